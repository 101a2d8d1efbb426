use super::MatchingError;
use crate::workflows::survey::MentorProfile;
use std::collections::HashMap;
use tracing::warn;

/// Survey answers to "How many students are you comfortable mentoring?".
const CAPACITY_ANSWERS: [(&str, usize); 4] = [
    ("As many as you need me to", 10),
    ("Two or three", 3),
    ("Just one", 1),
    ("One or two is good for me", 2),
];

pub fn capacity_for_answer(answer: &str) -> Option<usize> {
    CAPACITY_ANSWERS
        .iter()
        .find(|(label, _)| *label == answer)
        .map(|(_, capacity)| *capacity)
}

/// Maximum mentee count for `mentor`. Unrecognized answers are malformed input.
pub fn resolve_capacity(mentor: &MentorProfile) -> Result<usize, MatchingError> {
    mentor
        .capacity_answer
        .as_deref()
        .and_then(capacity_for_answer)
        .ok_or_else(|| MatchingError::UnrecognizedCapacity {
            mentor_id: mentor.id.clone(),
            answer: mentor.capacity_answer.clone().unwrap_or_default(),
        })
}

/// Per-mentor capacities in mentor file order. A repeated mentor id keeps its first capacity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapacityTable {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl CapacityTable {
    pub fn from_mentors(mentors: &[MentorProfile]) -> Result<Self, MatchingError> {
        mentors
            .iter()
            .map(|mentor| resolve_capacity(mentor).map(|capacity| (mentor.id.clone(), capacity)))
            .collect()
    }

    pub fn get(&self, mentor_id: &str) -> Option<usize> {
        self.index
            .get(mentor_id)
            .and_then(|position| self.entries.get(*position))
            .map(|(_, capacity)| *capacity)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries
            .iter()
            .map(|(mentor_id, capacity)| (mentor_id.as_str(), *capacity))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_capacity(&self) -> usize {
        self.entries.iter().map(|(_, capacity)| capacity).sum()
    }
}

impl FromIterator<(String, usize)> for CapacityTable {
    fn from_iter<I: IntoIterator<Item = (String, usize)>>(iter: I) -> Self {
        let mut table = Self::default();
        for (mentor_id, capacity) in iter {
            match table.index.get(&mentor_id) {
                Some(position) => warn!(
                    id = mentor_id.as_str(),
                    kept = table.entries[*position].1,
                    ignored = capacity,
                    "duplicate mentor id in capacity table"
                ),
                None => {
                    table.index.insert(mentor_id.clone(), table.entries.len());
                    table.entries.push((mentor_id, capacity));
                }
            }
        }
        table
    }
}
