mod activities;
mod normalizer;
mod parser;
mod profile;

pub use activities::{
    ActivitySelections, MentorActivities, ACTIVITY_CATEGORIES_COLUMN, ACTIVITY_NAME_COLUMN,
};
pub use normalizer::normalize_id;
pub use parser::{SurveyRecord, SurveyTable, ID_COLUMN};
pub use profile::{
    questions, CommonAnswers, MenteeProfile, MentorProfile, DEFAULT_EXTROVERSION, DEFAULT_HOURS,
    DEFAULT_STRENGTH, DEFAULT_YEAR,
};

use crate::config::InputConfig;
use normalizer::is_blank;
use std::collections::{BTreeSet, HashSet};
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum SurveyError {
    #[error("failed to read survey export {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid survey CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("column '{column}' not found in survey export")]
    MissingColumn { column: &'static str },
    #[error("row on line {line} has a blank '{}'", ID_COLUMN)]
    MissingIdentifier { line: u64 },
}

/// Parses both sides as comma-separated sets and intersects them.
///
/// Blank inputs yield an empty set. Items are trimmed; empty items are dropped.
pub fn get_comma_separated_intersection(left: &str, right: &str) -> BTreeSet<String> {
    if is_blank(left) || is_blank(right) {
        return BTreeSet::new();
    }
    let right = comma_separated_to_set(right);
    comma_separated_to_set(left)
        .into_iter()
        .filter(|item| right.contains(item))
        .collect()
}

/// Same as [`get_comma_separated_intersection`] for optional answers.
pub fn intersect_answers(left: Option<&str>, right: Option<&str>) -> BTreeSet<String> {
    match (left, right) {
        (Some(left), Some(right)) => get_comma_separated_intersection(left, right),
        _ => BTreeSet::new(),
    }
}

fn comma_separated_to_set(value: &str) -> BTreeSet<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Typed mentor and mentee profiles, with mentor activities merged in.
#[derive(Debug, Clone, Default)]
pub struct ProfileStore {
    mentors: Vec<MentorProfile>,
    mentees: Vec<MenteeProfile>,
    activities: MentorActivities,
}

impl ProfileStore {
    pub fn load(inputs: &InputConfig) -> Result<Self, SurveyError> {
        let store = Self::from_readers(
            open(&inputs.mentors)?,
            open(&inputs.mentees)?,
            open(&inputs.activities)?,
        )?;
        info!(
            mentors = store.mentors.len(),
            mentees = store.mentees.len(),
            mentors_with_activities = store.activities.len(),
            "loaded survey exports"
        );
        Ok(store)
    }

    pub fn from_readers<M: Read, E: Read, A: Read>(
        mentors: M,
        mentees: E,
        activities: A,
    ) -> Result<Self, SurveyError> {
        let activities = MentorActivities::from_reader(activities)?;
        let mentors = SurveyTable::from_reader(mentors)?;
        let mentees = SurveyTable::from_reader(mentees)?;
        Ok(Self::from_tables(&mentors, &mentees, activities))
    }

    pub fn from_tables(
        mentors: &SurveyTable,
        mentees: &SurveyTable,
        activities: MentorActivities,
    ) -> Self {
        warn_on_duplicates("mentor", mentors);
        warn_on_duplicates("mentee", mentees);

        let mentors = mentors
            .records()
            .iter()
            .map(|record| {
                let profile = MentorProfile::from_record(record);
                match activities.for_mentor(&profile.id) {
                    Some(selections) => profile.with_activities(selections.clone()),
                    None => profile,
                }
            })
            .collect();
        let mentees = mentees
            .records()
            .iter()
            .map(MenteeProfile::from_record)
            .collect();

        Self {
            mentors,
            mentees,
            activities,
        }
    }

    pub fn mentors(&self) -> &[MentorProfile] {
        &self.mentors
    }

    pub fn mentees(&self) -> &[MenteeProfile] {
        &self.mentees
    }

    pub fn activities(&self) -> &MentorActivities {
        &self.activities
    }

    pub fn mentor(&self, id: &str) -> Option<&MentorProfile> {
        let id = normalize_id(id);
        self.mentors.iter().find(|mentor| mentor.id == id)
    }

    pub fn mentee(&self, id: &str) -> Option<&MenteeProfile> {
        let id = normalize_id(id);
        self.mentees.iter().find(|mentee| mentee.id == id)
    }
}

fn open(path: &Path) -> Result<std::fs::File, SurveyError> {
    std::fs::File::open(path).map_err(|source| SurveyError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn warn_on_duplicates(population: &'static str, table: &SurveyTable) {
    let mut seen = HashSet::new();
    for record in table.records() {
        if !seen.insert(record.id()) {
            warn!(population, id = record.id(), "duplicate computing id in survey export");
        }
    }
}
