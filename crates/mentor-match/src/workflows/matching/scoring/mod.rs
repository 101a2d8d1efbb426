mod rules;

use super::domain::MatchScore;
use crate::workflows::survey::{MenteeProfile, MentorProfile};

/// Stateless pairwise scorer. Every category contributes additively to the total.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreEngine;

impl ScoreEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn score(&self, mentor: &MentorProfile, mentee: &MenteeProfile) -> MatchScore {
        rules::score_pair(mentor, mentee)
    }
}
