use super::capacity::CapacityTable;
use super::domain::MatchRecord;
use super::MatchingError;
use serde::Serialize;
use std::collections::{BTreeSet, HashMap, HashSet};
use tracing::info;

/// The two sweeps over the sorted match list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentPass {
    /// Gives each mentor its first mentee.
    Coverage,
    /// Tops mentors up to capacity.
    Fill,
}

impl AssignmentPass {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Coverage => "Pass 1",
            Self::Fill => "Pass 2",
        }
    }
}

/// A single placement, in the order it was made.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssignmentDecision {
    pub pass: AssignmentPass,
    pub mentor_id: String,
    pub mentee_id: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssignedMentee {
    pub mentee_id: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MentorAssignment {
    pub mentor_id: String,
    pub mentees: Vec<AssignedMentee>,
}

/// Final mentor to mentee lists, in capacity-table order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Assignment {
    mentors: Vec<MentorAssignment>,
    #[serde(skip)]
    decisions: Vec<AssignmentDecision>,
}

impl Assignment {
    pub fn iter(&self) -> impl Iterator<Item = &MentorAssignment> {
        self.mentors.iter()
    }

    pub fn mentees_for(&self, mentor_id: &str) -> Option<&[AssignedMentee]> {
        self.mentors
            .iter()
            .find(|entry| entry.mentor_id == mentor_id)
            .map(|entry| entry.mentees.as_slice())
    }

    pub fn mentor_for(&self, mentee_id: &str) -> Option<&str> {
        self.mentors
            .iter()
            .find(|entry| entry.mentees.iter().any(|m| m.mentee_id == mentee_id))
            .map(|entry| entry.mentor_id.as_str())
    }

    pub fn decisions(&self) -> &[AssignmentDecision] {
        &self.decisions
    }

    pub fn assigned_count(&self) -> usize {
        self.mentors.iter().map(|entry| entry.mentees.len()).sum()
    }

    pub fn pairs(&self) -> impl Iterator<Item = (&str, &AssignedMentee)> {
        self.mentors.iter().flat_map(|entry| {
            entry
                .mentees
                .iter()
                .map(move |mentee| (entry.mentor_id.as_str(), mentee))
        })
    }
}

/// Deterministic two-pass greedy assignment over a score-sorted match list.
///
/// Decisions are never revisited: a mentee moves from unassigned to assigned
/// exactly once.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyAssigner;

struct AssignmentState<'a> {
    capacities: &'a CapacityTable,
    lists: Vec<MentorAssignment>,
    position: HashMap<&'a str, usize>,
    assigned: HashSet<String>,
    decisions: Vec<AssignmentDecision>,
}

impl<'a> AssignmentState<'a> {
    fn new(capacities: &'a CapacityTable) -> Self {
        let mut lists = Vec::with_capacity(capacities.len());
        let mut position = HashMap::with_capacity(capacities.len());
        for (mentor_id, _) in capacities.iter() {
            position.insert(mentor_id, lists.len());
            lists.push(MentorAssignment {
                mentor_id: mentor_id.to_string(),
                mentees: Vec::new(),
            });
        }
        Self {
            capacities,
            lists,
            position,
            assigned: HashSet::new(),
            decisions: Vec::new(),
        }
    }

    fn sweep(
        &mut self,
        pass: AssignmentPass,
        records: &[MatchRecord],
    ) -> Result<(), MatchingError> {
        for record in records {
            let slot = *self
                .position
                .get(record.mentor_id.as_str())
                .ok_or_else(|| MatchingError::UnknownMentor {
                    mentor_id: record.mentor_id.clone(),
                })?;
            let limit = match pass {
                AssignmentPass::Coverage => 1,
                AssignmentPass::Fill => self.capacities.get(&record.mentor_id).unwrap_or(0),
            };

            let current = self.lists[slot].mentees.len();
            if current < limit && !self.assigned.contains(&record.mentee_id) {
                self.place(pass, slot, record);
            }
        }
        Ok(())
    }

    fn place(&mut self, pass: AssignmentPass, slot: usize, record: &MatchRecord) {
        let score = record.total();
        info!(
            pass = pass.label(),
            mentor = record.mentor_id.as_str(),
            mentee = record.mentee_id.as_str(),
            score,
            "assigned mentee"
        );
        self.assigned.insert(record.mentee_id.clone());
        self.lists[slot].mentees.push(AssignedMentee {
            mentee_id: record.mentee_id.clone(),
            score,
        });
        self.decisions.push(AssignmentDecision {
            pass,
            mentor_id: record.mentor_id.clone(),
            mentee_id: record.mentee_id.clone(),
            score,
        });
    }
}

impl GreedyAssigner {
    pub fn new() -> Self {
        Self
    }

    pub fn assign(
        &self,
        records: &[MatchRecord],
        capacities: &CapacityTable,
        mentee_ids: &BTreeSet<String>,
    ) -> Result<Assignment, MatchingError> {
        let mut state = AssignmentState::new(capacities);

        state.sweep(AssignmentPass::Coverage, records)?;
        state.sweep(AssignmentPass::Fill, records)?;

        if let Some(mentee_id) = state
            .assigned
            .iter()
            .filter(|mentee_id| !mentee_ids.contains(*mentee_id))
            .min()
        {
            return Err(MatchingError::UnexpectedMentee {
                mentee_id: mentee_id.clone(),
            });
        }

        let missing: Vec<String> = mentee_ids
            .iter()
            .filter(|mentee_id| !state.assigned.contains(*mentee_id))
            .cloned()
            .collect();
        if !missing.is_empty() {
            return Err(MatchingError::UnassignedMentees {
                mentee_ids: missing,
            });
        }

        Ok(Assignment {
            mentors: state.lists,
            decisions: state.decisions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::matching::{Category, MatchScore};

    fn record(mentor: &str, mentee: &str, total: f64) -> MatchRecord {
        let mut score = MatchScore::default();
        score.breakdown.set(Category::ActivityMatches, total);
        MatchRecord {
            mentor_id: mentor.to_string(),
            mentee_id: mentee.to_string(),
            score,
        }
    }

    fn capacities(entries: &[(&str, usize)]) -> CapacityTable {
        entries
            .iter()
            .map(|(mentor, capacity)| (mentor.to_string(), *capacity))
            .collect()
    }

    fn mentee_ids(ids: &[&str]) -> BTreeSet<String> {
        ids.iter().map(|id| id.to_string()).collect()
    }

    #[test]
    fn coverage_pass_runs_before_fill() {
        let records = vec![
            record("a", "x", 50.0),
            record("a", "y", 40.0),
            record("b", "y", 30.0),
            record("b", "x", 20.0),
            record("a", "z", 10.0),
            record("b", "z", 5.0),
        ];
        let assignment = GreedyAssigner::new()
            .assign(
                &records,
                &capacities(&[("a", 3), ("b", 3)]),
                &mentee_ids(&["x", "y", "z"]),
            )
            .expect("assignment succeeds");

        let a: Vec<&str> = assignment
            .mentees_for("a")
            .expect("mentor a")
            .iter()
            .map(|m| m.mentee_id.as_str())
            .collect();
        assert_eq!(a, vec!["x", "z"]);
        assert_eq!(assignment.mentor_for("y"), Some("b"));

        let passes: Vec<AssignmentPass> =
            assignment.decisions().iter().map(|d| d.pass).collect();
        assert_eq!(
            passes,
            vec![
                AssignmentPass::Coverage,
                AssignmentPass::Coverage,
                AssignmentPass::Fill
            ]
        );
    }

    #[test]
    fn respects_capacity() {
        let records = vec![
            record("a", "x", 9.0),
            record("a", "y", 8.0),
            record("a", "z", 7.0),
            record("b", "x", 1.0),
            record("b", "y", 1.0),
            record("b", "z", 1.0),
        ];
        let assignment = GreedyAssigner::new()
            .assign(
                &records,
                &capacities(&[("a", 2), ("b", 1)]),
                &mentee_ids(&["x", "y", "z"]),
            )
            .expect("assignment succeeds");

        assert_eq!(assignment.mentees_for("a").map(<[_]>::len), Some(2));
        assert_eq!(assignment.mentees_for("b").map(<[_]>::len), Some(1));
        assert_eq!(assignment.mentor_for("x"), Some("a"));
        assert_eq!(assignment.mentor_for("y"), Some("b"));
        assert_eq!(assignment.mentor_for("z"), Some("a"));
    }

    #[test]
    fn insufficient_capacity_reports_missing_mentee() {
        let mut records = Vec::new();
        let mut total = 100.0;
        for mentee in ["w", "x", "y", "z"] {
            for mentor in ["a", "b", "c"] {
                records.push(record(mentor, mentee, total));
                total -= 1.0;
            }
        }
        records.sort_by(|l, r| r.total().total_cmp(&l.total()));

        let error = GreedyAssigner::new()
            .assign(
                &records,
                &capacities(&[("a", 1), ("b", 1), ("c", 1)]),
                &mentee_ids(&["w", "x", "y", "z"]),
            )
            .expect_err("one mentee cannot be placed");

        match error {
            MatchingError::UnassignedMentees { mentee_ids } => {
                assert_eq!(mentee_ids, vec!["z".to_string()])
            }
            other => panic!("expected coverage error, got {other:?}"),
        }
    }

    #[test]
    fn unknown_mentor_is_rejected() {
        let error = GreedyAssigner::new()
            .assign(
                &[record("ghost", "x", 1.0)],
                &capacities(&[("a", 1)]),
                &mentee_ids(&["x"]),
            )
            .expect_err("mentor missing from capacities");
        assert!(matches!(error, MatchingError::UnknownMentor { .. }));
    }

    #[test]
    fn mentee_outside_input_set_is_rejected() {
        let records = vec![record("a", "x", 3.0), record("b", "stray", 2.0)];
        let error = GreedyAssigner::new()
            .assign(
                &records,
                &capacities(&[("a", 1), ("b", 1)]),
                &mentee_ids(&["x"]),
            )
            .expect_err("stray mentee placed");
        match error {
            MatchingError::UnexpectedMentee { mentee_id } => assert_eq!(mentee_id, "stray"),
            other => panic!("expected unexpected mentee error, got {other:?}"),
        }
    }

    #[test]
    fn mentor_without_mentees_is_tolerated() {
        let records = vec![record("a", "x", 3.0), record("b", "x", 2.0)];
        let assignment = GreedyAssigner::new()
            .assign(
                &records,
                &capacities(&[("a", 2), ("b", 2)]),
                &mentee_ids(&["x"]),
            )
            .expect("assignment succeeds");
        assert_eq!(assignment.mentees_for("b").map(<[_]>::len), Some(0));
        assert_eq!(assignment.assigned_count(), 1);
    }
}
