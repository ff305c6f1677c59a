use std::sync::Once;

use dlany_core::{
    update, AnalyticsEvent, AppState, Effect, Format, Msg, SubmissionRequest, SubmissionState,
    EVENT_DOWNLOAD_START, PROCESSING_LABEL, SUBMIT_LABEL,
};
use pretty_assertions::assert_eq;

const URL: &str = "https://youtube.com/watch?v=abc";

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(dlany_logging::initialize_for_tests);
}

fn submit(state: AppState, url: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::UrlChanged(url.to_string()));
    update(state, Msg::SubmitClicked)
}

fn count_captures(effects: &[Effect], name: &str) -> usize {
    effects
        .iter()
        .filter(|effect| matches!(effect, Effect::Capture(event) if event.name == name))
        .count()
}

#[test]
fn submit_moves_idle_to_processing_and_disables_trigger() {
    init_logging();
    let (mut state, effects) = submit(AppState::new(), URL);
    let view = state.view();

    assert_eq!(view.status, SubmissionState::Processing);
    assert!(!view.trigger_enabled);
    assert_eq!(view.trigger_label, PROCESSING_LABEL);
    assert_eq!(view.banner, None);
    assert!(state.in_flight());
    assert!(state.consume_dirty());

    let request = SubmissionRequest::new(URL, Format::Video);
    assert_eq!(
        effects,
        vec![
            Effect::Capture(AnalyticsEvent::download_start(&request)),
            Effect::Process {
                request_id: 1,
                request,
            },
        ]
    );
}

#[test]
fn download_start_carries_url_and_format() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::FormatSelected(Format::Audio));
    let (_state, effects) = submit(state, URL);

    let event = effects
        .iter()
        .find_map(|effect| match effect {
            Effect::Capture(event) => Some(event.clone()),
            _ => None,
        })
        .expect("capture effect");
    assert_eq!(event.name, EVENT_DOWNLOAD_START);
    assert_eq!(event.properties["url"], URL);
    assert_eq!(event.properties["format"], "audio");
}

#[test]
fn submit_with_empty_url_is_noop() {
    init_logging();
    let state = AppState::new();
    let (mut next, effects) = update(state.clone(), Msg::SubmitClicked);

    assert_eq!(next, state);
    assert!(effects.is_empty());
    assert_eq!(next.submission_state(), SubmissionState::Idle);
    assert!(!next.consume_dirty());
}

#[test]
fn whitespace_url_is_not_trimmed_and_counts_as_present() {
    init_logging();
    let (state, effects) = submit(AppState::new(), "   ");

    assert_eq!(state.submission_state(), SubmissionState::Processing);
    assert_eq!(count_captures(&effects, EVENT_DOWNLOAD_START), 1);
    let (_, request) = state.in_flight_request().expect("in flight");
    assert_eq!(request.url, "   ");
}

#[test]
fn double_submit_while_processing_is_ignored() {
    init_logging();
    let (state, effects) = submit(AppState::new(), URL);
    assert_eq!(count_captures(&effects, EVENT_DOWNLOAD_START), 1);

    let (state, effects) = update(state, Msg::SubmitClicked);
    assert!(effects.is_empty());
    assert_eq!(state.submission_state(), SubmissionState::Processing);
    assert_eq!(state.last_request_id(), 1);
}

#[test]
fn edits_while_in_flight_do_not_touch_the_request() {
    init_logging();
    let (state, _) = submit(AppState::new(), URL);
    let (state, _) = update(state, Msg::FormatSelected(Format::Audio));
    let (state, effects) = update(state, Msg::UrlChanged("https://other.example".to_string()));

    assert!(effects.is_empty());
    assert_eq!(state.format(), Format::Audio);
    assert_eq!(state.url(), "https://other.example");
    assert!(!state.view().trigger_enabled);

    let (request_id, request) = state.in_flight_request().expect("in flight");
    assert_eq!(request_id, 1);
    assert_eq!(request, &SubmissionRequest::new(URL, Format::Video));
}

#[test]
fn trigger_follows_url_presence_when_idle() {
    init_logging();
    let state = AppState::new();
    assert!(!state.view().trigger_enabled);
    assert_eq!(state.view().trigger_label, SUBMIT_LABEL);

    let (state, _) = update(state, Msg::UrlChanged(URL.to_string()));
    assert!(state.view().trigger_enabled);

    let (state, _) = update(state, Msg::UrlChanged(String::new()));
    assert!(!state.view().trigger_enabled);
}

#[test]
fn selecting_the_current_format_is_not_a_visible_change() {
    init_logging();
    let (mut state, effects) = update(AppState::new(), Msg::FormatSelected(Format::Video));

    assert!(effects.is_empty());
    assert!(!state.consume_dirty());

    let (mut state, _) = update(state, Msg::FormatSelected(Format::Audio));
    assert!(state.consume_dirty());
    assert_eq!(state.view().format, Format::Audio);
}
