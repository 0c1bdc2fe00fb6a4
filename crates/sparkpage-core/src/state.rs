//! View state machine for the generation flow.
//!
//! An explicit finite-state value for the `input → loading → display →
//! error` cycle, independent of any UI framework.

use crate::{GeneratedAppData, Result};

/// The view states of the generation flow.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    /// Waiting for the user's idea.
    #[default]
    Input,
    /// A generation is in flight.
    Loading,
    /// A generated page is on screen.
    Display(GeneratedAppData),
    /// A generation failed; resubmitting retries.
    Error(String),
}

impl ViewState {
    /// Begin a generation. Allowed from `Input` and `Error` (retry);
    /// returns whether the transition happened.
    pub fn submit(&mut self) -> bool {
        match self {
            ViewState::Input | ViewState::Error(_) => {
                *self = ViewState::Loading;
                true
            }
            _ => false,
        }
    }

    /// Settle an in-flight generation.
    ///
    /// Only meaningful from `Loading`. Success shows the page;
    /// cancellation is swallowed silently and leaves the state untouched;
    /// every other failure collapses into the one generic error message.
    pub fn settle(&mut self, outcome: Result<GeneratedAppData>) {
        if !matches!(self, ViewState::Loading) {
            return;
        }
        match outcome {
            Ok(page) => *self = ViewState::Display(page),
            Err(err) => {
                if let Some(message) = err.user_message() {
                    *self = ViewState::Error(message.to_string());
                }
            }
        }
    }

    /// Discard everything and return to the input screen.
    pub fn reset(&mut self) {
        *self = ViewState::Input;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CallToAction, Section, SparkError, GENERIC_FAILURE_MESSAGE};

    fn page() -> GeneratedAppData {
        GeneratedAppData {
            app_name: "PawPal".into(),
            tagline: "Walks on demand".into(),
            hero_illustration: "rocket".into(),
            features: vec![Section {
                title: "Book".into(),
                description: "d".into(),
                illustration: "zap".into(),
            }],
            problem_statement: Section {
                title: "The Problem".into(),
                description: "p".into(),
                illustration: "problem".into(),
            },
            solution_statement: Section {
                title: "Our Solution".into(),
                description: "s".into(),
                illustration: "solution".into(),
            },
            target_audience: Section {
                title: "Who It's For".into(),
                description: "t".into(),
                illustration: "users".into(),
            },
            cta: CallToAction {
                title: "Ready?".into(),
                description: "go".into(),
                button_text: "Launch Now".into(),
            },
        }
    }

    #[test]
    fn happy_path_reaches_display() {
        let mut state = ViewState::default();
        assert!(state.submit());
        state.settle(Ok(page()));
        assert!(matches!(state, ViewState::Display(_)));
    }

    #[test]
    fn failure_shows_the_generic_message_and_allows_retry() {
        let mut state = ViewState::default();
        state.submit();
        state.settle(Err(SparkError::NoJsonFound));
        assert_eq!(state, ViewState::Error(GENERIC_FAILURE_MESSAGE.to_string()));

        // Resubmitting from the error screen retries.
        assert!(state.submit());
        assert_eq!(state, ViewState::Loading);
    }

    #[test]
    fn cancellation_is_swallowed_silently() {
        let mut state = ViewState::default();
        state.submit();
        state.settle(Err(SparkError::Cancelled));
        assert_eq!(state, ViewState::Loading);
    }

    #[test]
    fn submit_is_ignored_while_loading_or_displaying() {
        let mut state = ViewState::Loading;
        assert!(!state.submit());

        let mut state = ViewState::Display(page());
        assert!(!state.submit());
        assert!(matches!(state, ViewState::Display(_)));
    }

    #[test]
    fn settle_outside_loading_is_a_no_op() {
        let mut state = ViewState::Input;
        state.settle(Err(SparkError::EmptyResponse));
        assert_eq!(state, ViewState::Input);
    }

    #[test]
    fn reset_discards_the_page() {
        let mut state = ViewState::Display(page());
        state.reset();
        assert_eq!(state, ViewState::Input);
    }
}
