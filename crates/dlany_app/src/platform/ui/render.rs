use dlany_core::{AppViewModel, Banner, Format};

use super::constants::*;

pub fn header() -> Vec<String> {
    vec![format!("{TITLE} {SUBTITLE}"), String::new()]
}

/// Renders the form and the status region as plain text lines.
pub fn render(view: &AppViewModel) -> Vec<String> {
    let url = if view.url.is_empty() {
        format!("({URL_PLACEHOLDER})")
    } else {
        view.url.clone()
    };

    let mut lines = Vec::with_capacity(4);
    lines.push(format!("Link:   {url}"));
    lines.push(format!(
        "Format: {}  {}",
        format_toggle(Format::Video, view.format),
        format_toggle(Format::Audio, view.format)
    ));
    lines.push(if view.trigger_enabled {
        format!("Button: [{}]", view.trigger_label)
    } else {
        format!("Button: [{}] (disabled)", view.trigger_label)
    });
    if let Some(banner) = view.banner {
        lines.push(banner_line(banner));
    }
    lines
}

fn format_toggle(format: Format, selected: Format) -> String {
    let mark = if format == selected { 'x' } else { ' ' };
    format!("[{mark}] {}", format.label())
}

fn banner_line(banner: Banner) -> String {
    let tag = match banner {
        Banner::Success => "ok",
        Banner::Error => "error",
    };
    format!("[{tag}] {}", banner.message())
}
