use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;

use anyhow::Context;
use clap::Parser;
use dlany_core::AppState;
use dlany_engine::SubmissionController;
use dlany_logging::{dlany_info, dlany_warn};

use super::config::AppConfig;
use super::effects;
use super::ui::constants::POLL_INTERVAL;
use super::ui::input::{self, Command};
use super::ui::render;

pub fn run_app() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::parse();
    dlany_logging::initialize(config.log.into(), config.log_level, &config.log_file);
    dlany_info!("Starting dlany {:?}", config.environment);

    let runtime = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
    let engine = effects::build_engine(&config, runtime.handle().clone())?;
    let mut controller =
        SubmissionController::new(AppState::with_reset_delay(config.reset_delay()), engine);

    let line_rx = spawn_stdin_reader();
    let mut out = io::stdout().lock();
    write_lines(&mut out, &render::header())?;
    write_lines(&mut out, &render::render(&controller.view()))?;

    let mut input_open = true;
    loop {
        let mut dirty = false;

        if input_open {
            match line_rx.recv_timeout(POLL_INTERVAL) {
                Ok(line) => match input::parse_line(&line) {
                    Command::Apply(msgs) => {
                        for msg in msgs {
                            dirty |= controller.dispatch(msg);
                        }
                    }
                    Command::Status => dirty = true,
                    Command::Help => write_lines(&mut out, &input::help_lines())?,
                    Command::Quit => break,
                },
                Err(mpsc::RecvTimeoutError::Timeout) => {}
                Err(mpsc::RecvTimeoutError::Disconnected) => {
                    dlany_info!("Input closed; waiting for outstanding work");
                    input_open = false;
                }
            }
        } else {
            // Piped input: let the last request and its reset play out, then leave.
            if !controller.state().in_flight() && controller.engine().pending_resets() == 0 {
                // A reset may have fired since the last poll.
                if controller.poll_events() {
                    write_lines(&mut out, &render::render(&controller.view()))?;
                }
                break;
            }
            thread::sleep(POLL_INTERVAL);
        }

        dirty |= controller.poll_events();
        if dirty {
            write_lines(&mut out, &render::render(&controller.view()))?;
        }
    }

    dlany_info!("Shutting down");
    Ok(())
}

fn spawn_stdin_reader() -> mpsc::Receiver<String> {
    let (line_tx, line_rx) = mpsc::channel();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if line_tx.send(line).is_err() {
                        break;
                    }
                }
                Err(err) => {
                    dlany_warn!("Failed to read input: {}", err);
                    break;
                }
            }
        }
    });
    line_rx
}

fn write_lines(out: &mut impl Write, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    writeln!(out)?;
    out.flush()
}
