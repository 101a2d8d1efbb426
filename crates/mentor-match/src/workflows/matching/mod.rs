mod assignment;
mod capacity;
pub mod domain;
mod matrix;
mod pipeline;
mod scoring;

pub use assignment::{
    AssignedMentee, Assignment, AssignmentDecision, AssignmentPass, GreedyAssigner,
    MentorAssignment,
};
pub use capacity::{capacity_for_answer, resolve_capacity, CapacityTable};
pub use domain::{
    format_score, format_signed_score, ActivityCategory, Category, Explanation, MatchRecord,
    MatchScore, ScoreBreakdown,
};
pub use matrix::MatchMatrix;
pub use pipeline::{MatchingPipeline, PipelineOutput};
pub use scoring::ScoreEngine;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MatchingError {
    #[error("mentor {mentor_id} gave an unrecognized capacity answer '{answer}'")]
    UnrecognizedCapacity { mentor_id: String, answer: String },
    #[error("match record references mentor {mentor_id} with no capacity entry")]
    UnknownMentor { mentor_id: String },
    #[error("mentee {mentee_id} was assigned but is not in the mentee list")]
    UnexpectedMentee { mentee_id: String },
    #[error("some mentees are unassigned: {}", .mentee_ids.join(", "))]
    UnassignedMentees { mentee_ids: Vec<String> },
}
