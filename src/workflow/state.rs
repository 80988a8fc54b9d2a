//! Workflow states and the transition reducer
//!
//! One tagged union, one pure reducer. All transition decisions live here;
//! the session layer only feeds events in and never mutates state by hand.
//! Illegal (state, event) pairs leave the state unchanged, which is what
//! makes duplicate submissions harmless.

use crate::analysis::GenerationResult;

/// The single active state of a generation workflow.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowState {
    /// Collecting form input
    Input,
    /// A manifest analysis request is in flight
    Analyzing,
    /// A README generation request is in flight
    Generating,
    /// Document received, pacing step before success
    Formatting(GenerationResult),
    /// Generation finished
    Success(GenerationResult),
    /// Generation failed; retry is available
    Failed { message: String },
}

impl WorkflowState {
    /// True while a request is in flight — new submissions are no-ops.
    pub fn is_busy(&self) -> bool {
        matches!(
            self,
            WorkflowState::Analyzing | WorkflowState::Generating | WorkflowState::Formatting(_)
        )
    }

    /// Short state label for logs and status payloads.
    pub fn label(&self) -> &'static str {
        match self {
            WorkflowState::Input => "input",
            WorkflowState::Analyzing => "analyzing",
            WorkflowState::Generating => "generating",
            WorkflowState::Formatting(_) => "formatting",
            WorkflowState::Success(_) => "success",
            WorkflowState::Failed { .. } => "failed",
        }
    }
}

impl Default for WorkflowState {
    fn default() -> Self {
        WorkflowState::Input
    }
}

/// Events fed to the reducer.
#[derive(Debug, Clone)]
pub enum WorkflowEvent {
    /// A manifest upload kicked off analysis
    UploadStarted,
    /// The analysis call settled (merge/error capture happens in the session)
    AnalysisSettled,
    /// A validated submission kicked off generation
    GenerateRequested,
    /// The generated document arrived
    DocumentReceived(GenerationResult),
    /// The pacing step finished
    FormattingDone,
    /// The in-flight call failed
    CallFailed { message: String },
    /// The user asked to retry the failed generation
    RetryRequested,
    /// Back/create-new: clear everything
    Reset,
}

/// Applies an event to a state, returning the next state.
///
/// Transitions are strictly forward except `RetryRequested` (Failed →
/// Generating) and `Reset` (anywhere → Input). Anything else that does not
/// match is ignored and the current state is returned unchanged.
pub fn reduce(state: WorkflowState, event: WorkflowEvent) -> WorkflowState {
    match (state, event) {
        (WorkflowState::Input, WorkflowEvent::UploadStarted) => WorkflowState::Analyzing,
        (WorkflowState::Analyzing, WorkflowEvent::AnalysisSettled) => WorkflowState::Input,
        (WorkflowState::Input, WorkflowEvent::GenerateRequested) => WorkflowState::Generating,
        (WorkflowState::Generating, WorkflowEvent::DocumentReceived(result)) => {
            WorkflowState::Formatting(result)
        }
        (WorkflowState::Formatting(result), WorkflowEvent::FormattingDone) => {
            WorkflowState::Success(result)
        }
        (
            WorkflowState::Generating | WorkflowState::Formatting(_),
            WorkflowEvent::CallFailed { message },
        ) => WorkflowState::Failed { message },
        (WorkflowState::Failed { .. }, WorkflowEvent::RetryRequested) => WorkflowState::Generating,
        (_, WorkflowEvent::Reset) => WorkflowState::Input,
        (state, _) => state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{ProjectInfo, ProjectLicense, ReadmeInput};

    fn sample_result() -> GenerationResult {
        GenerationResult {
            markdown: "# demo".to_string(),
            input: ReadmeInput {
                project_info: ProjectInfo {
                    name: "demo".to_string(),
                    short_description: String::new(),
                    detailed_description: "a demo".to_string(),
                },
                features: vec![],
                tech_stack: vec![],
                license: ProjectLicense::default(),
                dependencies: vec![],
                installation: vec![],
                usage: vec![],
            },
        }
    }

    #[test]
    fn test_happy_path() {
        let state = WorkflowState::Input;
        let state = reduce(state, WorkflowEvent::GenerateRequested);
        assert_eq!(state, WorkflowState::Generating);

        let state = reduce(state, WorkflowEvent::DocumentReceived(sample_result()));
        assert!(matches!(state, WorkflowState::Formatting(_)));

        let state = reduce(state, WorkflowEvent::FormattingDone);
        assert!(matches!(state, WorkflowState::Success(_)));
    }

    #[test]
    fn test_analysis_round_trip() {
        let state = reduce(WorkflowState::Input, WorkflowEvent::UploadStarted);
        assert_eq!(state, WorkflowState::Analyzing);

        let state = reduce(state, WorkflowEvent::AnalysisSettled);
        assert_eq!(state, WorkflowState::Input);
    }

    #[test]
    fn test_failure_and_retry() {
        let state = reduce(
            WorkflowState::Generating,
            WorkflowEvent::CallFailed {
                message: "boom".to_string(),
            },
        );
        assert_eq!(
            state,
            WorkflowState::Failed {
                message: "boom".to_string()
            }
        );

        let state = reduce(state, WorkflowEvent::RetryRequested);
        assert_eq!(state, WorkflowState::Generating);
    }

    #[test]
    fn test_formatting_failure() {
        let state = reduce(
            WorkflowState::Formatting(sample_result()),
            WorkflowEvent::CallFailed {
                message: "late failure".to_string(),
            },
        );
        assert!(matches!(state, WorkflowState::Failed { .. }));
    }

    #[test]
    fn test_reset_from_any_state() {
        for state in [
            WorkflowState::Input,
            WorkflowState::Analyzing,
            WorkflowState::Generating,
            WorkflowState::Success(sample_result()),
            WorkflowState::Failed {
                message: "x".to_string(),
            },
        ] {
            assert_eq!(reduce(state, WorkflowEvent::Reset), WorkflowState::Input);
        }
    }

    #[test]
    fn test_illegal_transitions_leave_state_unchanged() {
        // a duplicate submit while generating is a no-op
        let state = reduce(WorkflowState::Generating, WorkflowEvent::GenerateRequested);
        assert_eq!(state, WorkflowState::Generating);

        // retry only makes sense from Failed
        let state = reduce(WorkflowState::Input, WorkflowEvent::RetryRequested);
        assert_eq!(state, WorkflowState::Input);

        // a stray document in Input is ignored
        let state = reduce(
            WorkflowState::Input,
            WorkflowEvent::DocumentReceived(sample_result()),
        );
        assert_eq!(state, WorkflowState::Input);
    }

    #[test]
    fn test_is_busy() {
        assert!(WorkflowState::Analyzing.is_busy());
        assert!(WorkflowState::Generating.is_busy());
        assert!(WorkflowState::Formatting(sample_result()).is_busy());
        assert!(!WorkflowState::Input.is_busy());
        assert!(!WorkflowState::Success(sample_result()).is_busy());
        assert!(!WorkflowState::Failed {
            message: String::new()
        }
        .is_busy());
    }

    #[test]
    fn test_labels() {
        assert_eq!(WorkflowState::Input.label(), "input");
        assert_eq!(WorkflowState::Analyzing.label(), "analyzing");
        assert_eq!(
            WorkflowState::Failed {
                message: String::new()
            }
            .label(),
            "failed"
        );
    }
}
