//! Pipeline use case
//!
//! Linear state machine over the stages of a `PipelinePlan`:
//! resolve, run each stage in order, commit the manifest. Any stage
//! failure ends the run and leaves the manifest untouched.

mod result;
mod use_case;

pub use result::PipelineReport;
pub use use_case::{Collaborators, PipelineUseCase};
