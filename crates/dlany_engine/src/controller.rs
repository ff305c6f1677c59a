use dlany_core::{update, AppState, AppViewModel, Format, Msg, SubmissionState};

use crate::EngineHandle;

/// Headless driver: owns the submission state and runs its effects.
///
/// All state changes happen on the caller's thread, one message at a time.
pub struct SubmissionController {
    state: AppState,
    engine: EngineHandle,
}

impl SubmissionController {
    pub fn new(state: AppState, engine: EngineHandle) -> Self {
        Self { state, engine }
    }

    /// Applies `msg`, executes the resulting effects and reports whether the
    /// view changed.
    pub fn dispatch(&mut self, msg: Msg) -> bool {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        self.state = state;
        self.engine.execute_all(effects);
        was_dirty
    }

    pub fn set_url(&mut self, url: impl Into<String>) -> bool {
        self.dispatch(Msg::UrlChanged(url.into()))
    }

    pub fn select_format(&mut self, format: Format) -> bool {
        self.dispatch(Msg::FormatSelected(format))
    }

    pub fn submit(&mut self) -> bool {
        self.dispatch(Msg::SubmitClicked)
    }

    pub fn current_state(&self) -> SubmissionState {
        self.state.submission_state()
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn view(&self) -> AppViewModel {
        self.state.view()
    }

    pub fn engine(&self) -> &EngineHandle {
        &self.engine
    }

    /// Applies every engine event that is already available.
    pub fn poll_events(&mut self) -> bool {
        let mut changed = false;
        while let Some(event) = self.engine.try_recv() {
            changed |= self.dispatch(event.into_msg());
        }
        changed
    }

    /// Waits for the next engine event, applies it and returns it as a message.
    ///
    /// Blocks until an event arrives; with no request in flight and no reset
    /// armed it never resolves.
    pub async fn next_event(&mut self) -> Msg {
        let msg = self.engine.recv().await.into_msg();
        self.dispatch(msg.clone());
        msg
    }
}
