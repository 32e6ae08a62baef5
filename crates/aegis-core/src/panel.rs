//! Prompt Panel State Machine
//!
//! The single question/answer exchange behind the agent page. The panel
//! owns the three pieces of transient UI state (prompt text, displayed
//! answer, loading flag) and enforces the submission contract:
//!
//! - only the commit key begins a submission, every other key is a no-op
//! - at most one request is outstanding at a time
//! - both settlement outcomes pass through [`PromptPanel::settle`], so the
//!   loading flag cannot leak
//! - clearing the prompt to blank clears the answer without a request
//!
//! The view layer holds a `PromptPanel` in one reactive signal and maps
//! DOM events onto `edit`, `key_down`, and `settle`.

use crate::error::AegisError;

/// The key press that triggers submission.
pub const COMMIT_KEY: &str = "Enter";

/// Transient state of the question/answer panel.
///
/// `Idle → Submitting → Idle` on success or failure; `Idle → Idle` on any
/// keystroke that is not the commit key. No terminal state.
#[derive(Clone, Debug, Default)]
pub struct PromptPanel {
    prompt: String,
    answer: Option<String>,
    in_flight: bool,
}

impl PromptPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an edit to the prompt text.
    ///
    /// Editing the prompt down to an empty or whitespace-only string also
    /// clears the displayed answer.
    pub fn edit(&mut self, text: impl Into<String>) {
        self.prompt = text.into();
        if self.prompt.trim().is_empty() {
            self.answer = None;
        }
    }

    /// Handle a key press on the input.
    ///
    /// Returns the prompt to dispatch when the commit key begins a
    /// submission, `None` otherwise.
    pub fn key_down(&mut self, key: &str) -> Option<String> {
        if key != COMMIT_KEY {
            return None;
        }
        self.commit()
    }

    /// Try to begin a submission.
    ///
    /// Refused while a request is already outstanding (single-flight) and
    /// for a blank prompt. On success the loading flag is set and the
    /// caller must eventually [`settle`](Self::settle).
    pub fn commit(&mut self) -> Option<String> {
        if self.in_flight || self.prompt.trim().is_empty() {
            return None;
        }
        self.in_flight = true;
        Some(self.prompt.clone())
    }

    /// Settle the outstanding request.
    ///
    /// Success replaces the answer with the response message, verbatim.
    /// Failure leaves the answer untouched; the caller logs the error at
    /// the submission boundary. The loading flag clears on every path.
    pub fn settle(&mut self, outcome: Result<String, AegisError>) {
        self.in_flight = false;
        if let Ok(message) = outcome {
            self.answer = Some(message);
        }
    }

    /// Current prompt text.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Most recent answer, if one is displayed.
    pub fn answer(&self) -> Option<&str> {
        self.answer.as_deref()
    }

    /// True strictly between dispatch and settlement.
    pub fn is_loading(&self) -> bool {
        self.in_flight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submitted(prompt: &str) -> PromptPanel {
        let mut panel = PromptPanel::new();
        panel.edit(prompt);
        panel.key_down(COMMIT_KEY).expect("commit should dispatch");
        panel
    }

    #[test]
    fn non_commit_keys_never_dispatch() {
        let mut panel = PromptPanel::new();
        panel.edit("What ports are open?");

        for key in ["a", "Shift", "Tab", "Escape", "ArrowDown", " "] {
            assert_eq!(panel.key_down(key), None);
            assert!(!panel.is_loading());
        }
    }

    #[test]
    fn commit_key_dispatches_current_prompt() {
        let mut panel = PromptPanel::new();
        panel.edit("What ports are open?");

        let dispatched = panel.key_down(COMMIT_KEY);

        assert_eq!(dispatched.as_deref(), Some("What ports are open?"));
        assert!(panel.is_loading());
    }

    #[test]
    fn blank_prompt_does_not_dispatch() {
        let mut panel = PromptPanel::new();
        panel.edit("   ");

        assert_eq!(panel.key_down(COMMIT_KEY), None);
        assert!(!panel.is_loading());
    }

    #[test]
    fn second_commit_while_loading_is_refused() {
        let mut panel = submitted("scan the subnet");

        assert_eq!(panel.key_down(COMMIT_KEY), None);
        assert!(panel.is_loading());
    }

    #[test]
    fn success_displays_message_verbatim() {
        let mut panel = submitted("What ports are open?");

        panel.settle(Ok("No scan has been run yet.".to_string()));

        assert_eq!(panel.answer(), Some("No scan has been run yet."));
        assert!(!panel.is_loading());
    }

    #[test]
    fn failure_leaves_answer_unchanged_and_clears_loading() {
        let mut panel = submitted("first");
        panel.settle(Ok("first answer".to_string()));

        panel.edit("test");
        panel.key_down(COMMIT_KEY).unwrap();
        panel.settle(Err(AegisError::Status(500)));

        assert_eq!(panel.answer(), Some("first answer"));
        assert!(!panel.is_loading());
    }

    #[test]
    fn resubmission_overwrites_previous_answer() {
        let mut panel = submitted("same question");
        panel.settle(Ok("first".to_string()));

        let dispatched = panel.key_down(COMMIT_KEY);
        assert_eq!(dispatched.as_deref(), Some("same question"));
        panel.settle(Ok("second".to_string()));

        assert_eq!(panel.answer(), Some("second"));
    }

    #[test]
    fn clearing_prompt_clears_answer() {
        let mut panel = submitted("What ports are open?");
        panel.settle(Ok("No scan has been run yet.".to_string()));

        panel.edit("");

        assert_eq!(panel.answer(), None);
        assert!(!panel.is_loading());
    }

    #[test]
    fn whitespace_prompt_clears_answer() {
        let mut panel = submitted("anything");
        panel.settle(Ok("something".to_string()));

        panel.edit("   \t ");

        assert_eq!(panel.answer(), None);
    }

    #[test]
    fn panel_is_reusable_after_settlement() {
        let mut panel = submitted("one");
        panel.settle(Err(AegisError::Transport("connection refused".into())));

        panel.edit("two");
        assert!(panel.key_down(COMMIT_KEY).is_some());
        panel.settle(Ok("answer two".to_string()));

        assert_eq!(panel.answer(), Some("answer two"));
        assert!(!panel.is_loading());
    }
}
