//! Session-scoped workflow driver
//!
//! One `WorkflowSession` per user session. It owns the form state and the
//! current [`WorkflowState`], sequences analyze/generate calls through the
//! service, and enforces the concurrency rules: at most one request in
//! flight, duplicate submissions are no-ops, and responses belonging to a
//! superseded session generation are discarded.
//!
//! The inner mutex is never held across an await; in-flight calls carry the
//! session epoch and re-validate it before applying their result.

use crate::analysis::{AnalysisReport, FormState, ReadmeInput, ValidationError};
use crate::service::{ReadmeService, ServiceError};
use crate::workflow::state::{reduce, WorkflowEvent, WorkflowState};
use std::sync::{Arc, Mutex};
use tracing::{debug, info, warn};

#[derive(Debug, Default)]
struct SessionInner {
    state: WorkflowState,
    form: FormState,
    last_input: Option<ReadmeInput>,
    /// Error from the most recent analysis attempt, shown inline on the form
    last_error: Option<String>,
    /// Bumped by create_new; stale in-flight results are discarded
    epoch: u64,
}

/// A single user session's workflow.
pub struct WorkflowSession {
    service: Arc<ReadmeService>,
    inner: Mutex<SessionInner>,
}

impl WorkflowSession {
    pub fn new(service: Arc<ReadmeService>) -> Self {
        Self {
            service,
            inner: Mutex::new(SessionInner::default()),
        }
    }

    /// Current workflow state.
    pub fn state(&self) -> WorkflowState {
        self.inner.lock().unwrap().state.clone()
    }

    /// Error captured from the most recent failed analysis, if any.
    pub fn last_error(&self) -> Option<String> {
        self.inner.lock().unwrap().last_error.clone()
    }

    /// Reads from the form state.
    pub fn with_form<R>(&self, f: impl FnOnce(&FormState) -> R) -> R {
        f(&self.inner.lock().unwrap().form)
    }

    /// Edits the form state (user input).
    pub fn update_form(&self, f: impl FnOnce(&mut FormState)) {
        f(&mut self.inner.lock().unwrap().form)
    }

    /// Handles a manifest upload: runs analysis and merges the result into
    /// the form. A no-op while another request is in flight. Returns the
    /// state after the call settles.
    pub async fn upload(&self, file_name: &str, content: &str) -> WorkflowState {
        let epoch = {
            let mut inner = self.inner.lock().unwrap();
            if inner.state.is_busy() {
                debug!("Upload ignored: request already in flight");
                return inner.state.clone();
            }
            inner.state = reduce(inner.state.clone(), WorkflowEvent::UploadStarted);
            inner.epoch
        };

        let outcome = self.service.analyze(content, file_name).await;
        self.apply_analysis(epoch, outcome)
    }

    fn apply_analysis(
        &self,
        epoch: u64,
        outcome: Result<AnalysisReport, ServiceError>,
    ) -> WorkflowState {
        let mut inner = self.inner.lock().unwrap();
        if inner.epoch != epoch {
            warn!("Discarding analysis result from superseded session");
            return inner.state.clone();
        }

        match outcome {
            Ok(report) => {
                inner.form.merge_analysis(&report);
                inner.last_error = None;
                info!(
                    tech_stack = report.tech_stack.len(),
                    dependencies = report.dependencies.len(),
                    "Analysis merged into form"
                );
            }
            Err(err) => {
                warn!(error = %err, "Analysis failed");
                inner.last_error = Some(err.to_string());
            }
        }

        inner.state = reduce(inner.state.clone(), WorkflowEvent::AnalysisSettled);
        inner.state.clone()
    }

    /// Submits the form for generation.
    ///
    /// Fails with a [`ValidationError`] naming the missing fields when the
    /// project name or description is empty — the state stays `Input` and
    /// no upstream call is made. A no-op while a request is in flight.
    pub async fn submit(&self) -> Result<WorkflowState, ValidationError> {
        let (epoch, input) = {
            let mut inner = self.inner.lock().unwrap();
            if inner.state.is_busy() {
                debug!("Submit ignored: request already in flight");
                return Ok(inner.state.clone());
            }

            let input = inner.form.to_readme_input()?;
            inner.last_input = Some(input.clone());
            inner.state = reduce(inner.state.clone(), WorkflowEvent::GenerateRequested);
            (inner.epoch, input)
        };

        Ok(self.run_generation(epoch, input).await)
    }

    /// Retries the last failed generation, replaying the exact input that
    /// was submitted. A no-op unless the workflow is in `Failed`.
    pub async fn retry(&self) -> WorkflowState {
        let (epoch, input) = {
            let mut inner = self.inner.lock().unwrap();
            let replay = match (&inner.state, inner.last_input.clone()) {
                (WorkflowState::Failed { .. }, Some(input)) => input,
                _ => {
                    debug!("Retry ignored: nothing to retry");
                    return inner.state.clone();
                }
            };

            inner.state = reduce(inner.state.clone(), WorkflowEvent::RetryRequested);
            (inner.epoch, replay)
        };

        self.run_generation(epoch, input).await
    }

    async fn run_generation(&self, epoch: u64, input: ReadmeInput) -> WorkflowState {
        let outcome = self.service.generate(&input).await;

        let mut inner = self.inner.lock().unwrap();
        if inner.epoch != epoch {
            warn!("Discarding generation result from superseded session");
            return inner.state.clone();
        }

        match outcome {
            Ok(result) => {
                inner.state = reduce(
                    inner.state.clone(),
                    WorkflowEvent::DocumentReceived(result),
                );
                // the pacing step carries no work of its own
                inner.state = reduce(inner.state.clone(), WorkflowEvent::FormattingDone);
            }
            Err(err) => {
                warn!(error = %err, "Generation failed");
                inner.state = reduce(
                    inner.state.clone(),
                    WorkflowEvent::CallFailed {
                        message: err.to_string(),
                    },
                );
            }
        }

        inner.state.clone()
    }

    /// Clears all session data and returns to `Input`. Serves both the
    /// "back" and "create new" actions; any request still in flight is
    /// superseded and its eventual result discarded.
    pub fn create_new(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.epoch += 1;
        inner.form = FormState::new();
        inner.last_input = None;
        inner.last_error = None;
        inner.state = reduce(inner.state.clone(), WorkflowEvent::Reset);
        info!("Session reset");
    }
}

impl std::fmt::Debug for WorkflowSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.lock().unwrap();
        f.debug_struct("WorkflowSession")
            .field("state", &inner.state.label())
            .field("epoch", &inner.epoch)
            .finish()
    }
}
