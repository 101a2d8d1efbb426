//! Mentor/mentee matching for survey exports.
//!
//! Survey CSVs are loaded into typed profiles, every mentor/mentee pair is
//! scored, and the sorted match matrix is resolved into a capacity-aware
//! assignment by a deterministic two-pass greedy sweep.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;

pub use workflows::matching::{
    Assignment, AssignmentDecision, AssignmentPass, CapacityTable, Category, GreedyAssigner,
    MatchMatrix, MatchRecord, MatchScore, MatchingError, MatchingPipeline, PipelineOutput,
    ScoreEngine,
};
pub use workflows::survey::{MenteeProfile, MentorActivities, MentorProfile, ProfileStore};
