use super::assignment::{Assignment, GreedyAssigner};
use super::capacity::CapacityTable;
use super::matrix::MatchMatrix;
use super::scoring::ScoreEngine;
use super::MatchingError;
use crate::workflows::survey::{MentorActivities, ProfileStore};
use std::collections::BTreeSet;
use tracing::info;

/// Everything a matching run produces, ready for the report writer.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub matrix: MatchMatrix,
    pub capacities: CapacityTable,
    pub assignment: Assignment,
    pub activities: MentorActivities,
}

/// Scores every pair, resolves capacities and runs the greedy assignment.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchingPipeline {
    engine: ScoreEngine,
    assigner: GreedyAssigner,
}

impl MatchingPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn run(&self, store: &ProfileStore) -> Result<PipelineOutput, MatchingError> {
        let capacities = CapacityTable::from_mentors(store.mentors())?;
        let matrix = MatchMatrix::build_with(&self.engine, store.mentors(), store.mentees());

        let mentee_ids: BTreeSet<String> = store
            .mentees()
            .iter()
            .map(|mentee| mentee.id.clone())
            .collect();

        info!(
            pairs = matrix.len(),
            total_capacity = capacities.total_capacity(),
            mentees = mentee_ids.len(),
            "assigning mentees"
        );
        let assignment = self
            .assigner
            .assign(matrix.records(), &capacities, &mentee_ids)?;

        Ok(PipelineOutput {
            matrix,
            capacities,
            assignment,
            activities: store.activities().clone(),
        })
    }
}
