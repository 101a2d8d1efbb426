use crate::workflows::matching::{
    format_score, Assignment, AssignmentDecision, MentorAssignment, PipelineOutput,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Machine-readable record of a matching run.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub generated_at: DateTime<Utc>,
    pub mentors: usize,
    pub mentees: usize,
    pub pairs_scored: usize,
    pub total_capacity: usize,
    pub assignments: Vec<MentorAssignment>,
    pub decisions: Vec<AssignmentDecision>,
}

impl RunSummary {
    pub fn from_output(output: &PipelineOutput, generated_at: DateTime<Utc>) -> Self {
        Self {
            generated_at,
            mentors: output.capacities.len(),
            mentees: output.assignment.assigned_count(),
            pairs_scored: output.matrix.len(),
            total_capacity: output.capacities.total_capacity(),
            assignments: output.assignment.iter().cloned().collect(),
            decisions: output.assignment.decisions().to_vec(),
        }
    }
}

/// Human-readable listing of each mentor's mentees and their scores.
pub fn render_assignments(assignment: &Assignment) -> String {
    let rule = "=".repeat(20);
    let mut lines = vec![String::new(), "Mentor Assignments:".to_string(), rule.clone()];

    for entry in assignment.iter() {
        let mentees = if entry.mentees.is_empty() {
            "No mentees assigned".to_string()
        } else {
            entry
                .mentees
                .iter()
                .map(|mentee| format!("{} ({})", mentee.mentee_id, format_score(mentee.score)))
                .collect::<Vec<_>>()
                .join(", ")
        };
        lines.push(format!("Mentor: {} | Mentees: {}", entry.mentor_id, mentees));
    }

    lines.push(rule);
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::matching::{
        CapacityTable, Category, GreedyAssigner, MatchRecord, MatchScore,
    };
    use std::collections::BTreeSet;

    #[test]
    fn listing_marks_mentors_without_mentees() {
        let mut score = MatchScore::default();
        score.breakdown.set(Category::ActivityMatches, 12.0);
        let records = vec![MatchRecord {
            mentor_id: "a".to_string(),
            mentee_id: "x".to_string(),
            score,
        }];
        let capacities: CapacityTable =
            [("a".to_string(), 1), ("b".to_string(), 1)].into_iter().collect();
        let mentees: BTreeSet<String> = ["x".to_string()].into_iter().collect();
        let assignment = GreedyAssigner::new()
            .assign(&records, &capacities, &mentees)
            .expect("assignment succeeds");

        let listing = render_assignments(&assignment);
        let lines: Vec<&str> = listing.lines().collect();
        assert_eq!(
            lines,
            vec![
                "",
                "Mentor Assignments:",
                "====================",
                "Mentor: a | Mentees: x (12)",
                "Mentor: b | Mentees: No mentees assigned",
                "====================",
            ]
        );
    }
}
