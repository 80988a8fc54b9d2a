//! Generation workflow: states, reducer, and the session driver

mod session;
mod state;

pub use session::WorkflowSession;
pub use state::{reduce, WorkflowEvent, WorkflowState};
