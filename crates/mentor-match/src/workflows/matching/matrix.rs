use super::domain::MatchRecord;
use super::scoring::ScoreEngine;
use crate::workflows::survey::{MenteeProfile, MentorProfile};
use std::collections::HashMap;
use tracing::debug;

/// Every mentor/mentee pair, sorted by total score descending.
///
/// Pairs are scored mentee-major and sorted stably, so equal totals keep
/// enumeration order and repeated builds yield the same sequence.
#[derive(Debug, Clone, Default)]
pub struct MatchMatrix {
    records: Vec<MatchRecord>,
    index: HashMap<(String, String), usize>,
}

impl MatchMatrix {
    pub fn build(mentors: &[MentorProfile], mentees: &[MenteeProfile]) -> Self {
        Self::build_with(&ScoreEngine::new(), mentors, mentees)
    }

    pub fn build_with(
        engine: &ScoreEngine,
        mentors: &[MentorProfile],
        mentees: &[MenteeProfile],
    ) -> Self {
        let mut records = Vec::with_capacity(mentors.len() * mentees.len());
        for mentee in mentees {
            for mentor in mentors {
                records.push(MatchRecord {
                    mentor_id: mentor.id.clone(),
                    mentee_id: mentee.id.clone(),
                    score: engine.score(mentor, mentee),
                });
            }
        }

        records.sort_by(|left, right| right.total().total_cmp(&left.total()));

        let index = records
            .iter()
            .enumerate()
            .map(|(position, record)| {
                (
                    (record.mentor_id.clone(), record.mentee_id.clone()),
                    position,
                )
            })
            .collect();

        debug!(
            mentors = mentors.len(),
            mentees = mentees.len(),
            pairs = records.len(),
            "built match matrix"
        );

        Self { records, index }
    }

    pub fn records(&self) -> &[MatchRecord] {
        &self.records
    }

    pub fn get(&self, mentor_id: &str, mentee_id: &str) -> Option<&MatchRecord> {
        self.index
            .get(&(mentor_id.to_string(), mentee_id.to_string()))
            .and_then(|position| self.records.get(*position))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::survey::{questions, SurveyRecord};
    use std::collections::HashMap;

    fn record(id: &str, pairs: &[(&str, &str)]) -> SurveyRecord {
        let fields: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        SurveyRecord::new(id, fields)
    }

    fn fixtures() -> (Vec<MentorProfile>, Vec<MenteeProfile>) {
        let mentors = vec![
            MentorProfile::from_record(&record("m1", &[(questions::SCHOOL, "Engineering")])),
            MentorProfile::from_record(&record("m2", &[(questions::YEAR, "1")])),
            MentorProfile::from_record(&record("m3", &[])),
        ];
        let mentees = vec![
            MenteeProfile::from_record(&record("e1", &[(questions::YEAR, "2")])),
            MenteeProfile::from_record(&record(
                "e2",
                &[(questions::YEAR, "2"), (questions::SCHOOL, "Engineering")],
            )),
        ];
        (mentors, mentees)
    }

    #[test]
    fn covers_every_pair_sorted_descending() {
        let (mentors, mentees) = fixtures();
        let matrix = MatchMatrix::build(&mentors, &mentees);

        assert_eq!(matrix.len(), 6);
        assert!(matrix
            .records()
            .windows(2)
            .all(|pair| pair[0].total() >= pair[1].total()));
        assert_eq!(matrix.records()[0].mentor_id, "m1");
        assert_eq!(matrix.records()[0].mentee_id, "e2");
        assert_eq!(
            matrix.get("m2", "e1").map(MatchRecord::total),
            Some(-100.0)
        );
    }

    #[test]
    fn ties_keep_mentee_major_order() {
        let (mentors, mentees) = fixtures();
        let matrix = MatchMatrix::build(&mentors, &mentees);

        let zero_pairs: Vec<(&str, &str)> = matrix
            .records()
            .iter()
            .filter(|record| record.total() == 0.0)
            .map(|record| (record.mentor_id.as_str(), record.mentee_id.as_str()))
            .collect();
        assert_eq!(zero_pairs, vec![("m1", "e1"), ("m3", "e1"), ("m3", "e2")]);
    }

    #[test]
    fn rebuilding_is_deterministic() {
        let (mentors, mentees) = fixtures();
        let first = MatchMatrix::build(&mentors, &mentees);
        let second = MatchMatrix::build(&mentors, &mentees);
        assert_eq!(first.records(), second.records());
    }
}
