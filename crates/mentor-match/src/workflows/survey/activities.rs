use super::normalizer::is_blank;
use super::parser::{SurveyRecord, SurveyTable};
use super::SurveyError;
use crate::workflows::matching::ActivityCategory;
use std::collections::{BTreeMap, HashMap};
use std::io::Read;
use tracing::debug;

pub const ACTIVITY_NAME_COLUMN: &str = "What is the name of your activity?";
pub const ACTIVITY_CATEGORIES_COLUMN: &str = "What categor(ies) best describe your activity?";

/// Comma-separated activity names per category. Blank categories are not stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivitySelections {
    by_category: BTreeMap<ActivityCategory, String>,
}

impl ActivitySelections {
    pub fn get(&self, category: ActivityCategory) -> Option<&str> {
        self.by_category.get(&category).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.by_category.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ActivityCategory, &str)> {
        self.by_category
            .iter()
            .map(|(category, names)| (*category, names.as_str()))
    }
}

impl FromIterator<(ActivityCategory, String)> for ActivitySelections {
    fn from_iter<I: IntoIterator<Item = (ActivityCategory, String)>>(iter: I) -> Self {
        let by_category = iter
            .into_iter()
            .filter(|(_, names)| !is_blank(names))
            .collect();
        Self { by_category }
    }
}

/// Activities each mentor runs, grouped by category, in order of first appearance.
#[derive(Debug, Clone, Default)]
pub struct MentorActivities {
    mentors: Vec<(String, ActivitySelections)>,
    index: HashMap<String, usize>,
}

impl MentorActivities {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, SurveyError> {
        let table = SurveyTable::from_reader(reader)?;
        for column in [ACTIVITY_NAME_COLUMN, ACTIVITY_CATEGORIES_COLUMN] {
            if !table.has_column(column) {
                return Err(SurveyError::MissingColumn { column });
            }
        }
        Ok(Self::from_records(table.records()))
    }

    pub fn from_records(records: &[SurveyRecord]) -> Self {
        let mut order: Vec<String> = Vec::new();
        let mut grouped: HashMap<String, BTreeMap<ActivityCategory, Vec<String>>> =
            HashMap::new();

        for record in records {
            let name = match record.get(ACTIVITY_NAME_COLUMN) {
                Some(name) => name.to_string(),
                None => {
                    debug!(mentor = record.id(), "skipping activity row without a name");
                    continue;
                }
            };

            let entry = grouped.entry(record.id().to_string()).or_insert_with(|| {
                order.push(record.id().to_string());
                BTreeMap::new()
            });

            for label in record
                .get(ACTIVITY_CATEGORIES_COLUMN)
                .unwrap_or_default()
                .split(',')
                .map(str::trim)
                .filter(|label| !label.is_empty())
            {
                match ActivityCategory::from_label(label) {
                    Some(category) => entry.entry(category).or_default().push(name.clone()),
                    None => debug!(
                        mentor = record.id(),
                        activity = name.as_str(),
                        category = label,
                        "ignoring unrecognized activity category"
                    ),
                }
            }
        }

        let mut activities = Self::default();
        for mentor_id in order {
            let selections = grouped
                .remove(&mentor_id)
                .unwrap_or_default()
                .into_iter()
                .map(|(category, names)| (category, names.join(", ")))
                .collect();
            activities.insert(mentor_id, selections);
        }

        activities
    }

    fn insert(&mut self, mentor_id: String, selections: ActivitySelections) {
        self.index.insert(mentor_id.clone(), self.mentors.len());
        self.mentors.push((mentor_id, selections));
    }

    pub fn for_mentor(&self, mentor_id: &str) -> Option<&ActivitySelections> {
        self.index
            .get(mentor_id)
            .and_then(|position| self.mentors.get(*position))
            .map(|(_, selections)| selections)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ActivitySelections)> {
        self.mentors
            .iter()
            .map(|(mentor_id, selections)| (mentor_id.as_str(), selections))
    }

    pub fn len(&self) -> usize {
        self.mentors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mentors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const EXPORT: &str = "Computing id,What is the name of your activity?,What categor(ies) best describe your activity?\n\
AB1CD,Mock Trial,\"Debate, Academic & Professional\"\n\
ab1cd,Glee Club,\"Choir, Visual & Performing Arts\"\n\
ef2gh,Chess Club,\"Social & Hobby, Board Games\"\n\
ab1cd,Model UN,Debate\n";

    #[test]
    fn groups_activities_by_mentor_and_category() {
        let activities = MentorActivities::from_reader(Cursor::new(EXPORT)).expect("parse");
        assert_eq!(activities.len(), 2);

        let first = activities.for_mentor("ab1cd").expect("mentor present");
        assert_eq!(first.get(ActivityCategory::Debate), Some("Mock Trial, Model UN"));
        assert_eq!(
            first.get(ActivityCategory::AcademicAndProfessional),
            Some("Mock Trial")
        );
        assert_eq!(first.get(ActivityCategory::Choir), Some("Glee Club"));
        assert_eq!(first.get(ActivityCategory::PeerMentors), None);
    }

    #[test]
    fn unknown_categories_are_dropped() {
        let activities = MentorActivities::from_reader(Cursor::new(EXPORT)).expect("parse");
        let second = activities.for_mentor("ef2gh").expect("mentor present");
        let categories: Vec<ActivityCategory> =
            second.iter().map(|(category, _)| category).collect();
        assert_eq!(categories, vec![ActivityCategory::SocialAndHobby]);
    }

    #[test]
    fn requires_activity_columns() {
        let error =
            MentorActivities::from_reader(Cursor::new("Computing id,Activity\nab1cd,Chess\n"))
                .expect_err("missing columns");
        assert!(matches!(
            error,
            SurveyError::MissingColumn {
                column: ACTIVITY_NAME_COLUMN
            }
        ));
    }

    #[test]
    fn preserves_first_appearance_order() {
        let activities = MentorActivities::from_reader(Cursor::new(EXPORT)).expect("parse");
        let ids: Vec<&str> = activities.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["ab1cd", "ef2gh"]);
    }
}
