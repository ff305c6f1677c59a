use crate::{AnalyticsEvent, AppState, Effect, Msg, SubmissionState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::UrlChanged(url) => {
            state.set_url(url);
            Vec::new()
        }
        Msg::FormatSelected(format) => {
            state.set_format(format);
            Vec::new()
        }
        Msg::SubmitClicked => {
            // Trigger is disabled: empty url or a request already in flight.
            if !state.can_submit() {
                return (state, Vec::new());
            }

            let mut effects = Vec::with_capacity(3);
            if let Some(previous) = state.take_pending_reset() {
                effects.push(Effect::CancelReset {
                    request_id: previous,
                });
            }
            let (request_id, request) = state.begin_submission();
            effects.push(Effect::Capture(AnalyticsEvent::download_start(&request)));
            effects.push(Effect::Process {
                request_id,
                request,
            });
            effects
        }
        Msg::ProcessingFinished { request_id, result } => {
            let Some(request) = state.finish_in_flight(request_id) else {
                return (state, Vec::new());
            };
            match result {
                Ok(_outcome) => {
                    state.set_status(SubmissionState::Complete);
                    state.arm_reset(request_id);
                    vec![
                        Effect::Capture(AnalyticsEvent::download_success(&request)),
                        Effect::ScheduleReset {
                            request_id,
                            delay: state.reset_delay(),
                        },
                    ]
                }
                // No reset is armed here: the error banner stays until the
                // next manual submit.
                Err(message) => {
                    state.set_status(SubmissionState::Error);
                    vec![Effect::Capture(AnalyticsEvent::download_error(&message))]
                }
            }
        }
        Msg::ResetElapsed { request_id } => {
            state.apply_reset(request_id);
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
