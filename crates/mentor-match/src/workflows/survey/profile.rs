use super::activities::ActivitySelections;
use super::normalizer::{is_affirmative, leading_integer};
use super::parser::SurveyRecord;
use crate::workflows::matching::ActivityCategory;

/// Question text used as column headers in the survey exports.
pub mod questions {
    pub const GENDER: &str = "Gender";
    pub const YEAR: &str = "Year";
    pub const SCHOOL: &str = "School";
    pub const MAJORS: &str = "Major(s) and/or minor(s)";
    pub const STUDY_STYLE: &str = "Do you prefer to study alone or in groups?";
    pub const ACADEMIC_INTERESTS: &str = "Academic interests";
    pub const MENTORSHIP_STYLE: &str = "Preferred Mentorship Style (select up to 2)";

    pub const MENTOR_SAME_GENDER: &str = "Do you prefer to mentor someone with the same gender?";
    pub const MENTOR_EXTROVERSION: &str = "How introverted/extroverted are you?";
    pub const MENTOR_TRAITS: &str = "Personality Traits (select up to 3)";
    pub const MENTOR_RESEARCH: &str = "Are you involved in research?";
    pub const MENTOR_WORK_EXPERIENCE: &str =
        "Have you had work experience related to your major (e.g., an internship)";
    pub const MENTOR_HOURS: &str = "How many hours per month can you spare on mentoring?";
    pub const MENTOR_CAPACITY: &str = "How many students are you comfortable mentoring?";

    pub const MENTEE_SAME_GENDER: &str = "How much do you prefer a mentor with the same gender?";
    pub const MENTEE_MAJOR_PREFERENCE: &str =
        "How much do you prefer a mentor who shares your major or academic interests?";
    pub const MENTEE_EXTROVERSION: &str =
        "How introverted/extroverted would you like your MENTOR to be?";
    pub const MENTEE_TRAITS: &str =
        "What personality traits would you prefer your mentor to have (select up to 3)?";
    pub const MENTEE_PERSONALITY_CARE: &str =
        "How much do you care about your mentor's personality (the above two questions)?";
    pub const MENTEE_RESEARCH_PREFERENCE: &str =
        "How much do you prefer that your mentor has been involved in research?";
    pub const MENTEE_WORK_EXPERIENCE_PREFERENCE: &str =
        "How much do you prefer that your mentor has had experience related to their major (e.g., an internship)?";
    pub const MENTEE_HOURS: &str = "How many hours per MONTH would you prefer mentorship?";
}

pub const DEFAULT_YEAR: u32 = 5;
pub const DEFAULT_HOURS: u32 = 2;
pub const DEFAULT_EXTROVERSION: u8 = 3;
pub const DEFAULT_STRENGTH: u8 = 1;

/// Traits shared by both survey populations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommonAnswers {
    pub gender: Option<String>,
    /// Leading integer of the year answer; [`DEFAULT_YEAR`] when blank or non-numeric.
    pub year: u32,
    pub school: Option<String>,
    pub majors: Option<String>,
    pub study_style: Option<String>,
    pub academic_interests: Option<String>,
    pub mentorship_styles: Option<String>,
}

impl CommonAnswers {
    fn from_record(record: &SurveyRecord) -> Self {
        Self {
            gender: text(record, questions::GENDER),
            year: record
                .get(questions::YEAR)
                .and_then(leading_integer)
                .unwrap_or(DEFAULT_YEAR),
            school: text(record, questions::SCHOOL),
            majors: text(record, questions::MAJORS),
            study_style: text(record, questions::STUDY_STYLE),
            academic_interests: text(record, questions::ACADEMIC_INTERESTS),
            mentorship_styles: text(record, questions::MENTORSHIP_STYLE),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MentorProfile {
    pub id: String,
    pub common: CommonAnswers,
    pub prefers_same_gender: bool,
    /// Self-rated 1 (very introverted) to 5 (very extroverted), default 3.
    pub extroversion: u8,
    pub personality_traits: Option<String>,
    pub does_research: bool,
    pub has_work_experience: bool,
    /// Monthly hours offered; 2 when blank or non-numeric.
    pub hours_available: u32,
    /// Raw answer to the capacity question, resolved by the capacity table.
    pub capacity_answer: Option<String>,
    /// Activities this mentor runs, merged from the activities export.
    pub activities: ActivitySelections,
}

impl MentorProfile {
    pub fn from_record(record: &SurveyRecord) -> Self {
        Self {
            id: record.id().to_string(),
            common: CommonAnswers::from_record(record),
            prefers_same_gender: record
                .get(questions::MENTOR_SAME_GENDER)
                .map(is_affirmative)
                .unwrap_or(false),
            extroversion: scale(record, questions::MENTOR_EXTROVERSION, DEFAULT_EXTROVERSION),
            personality_traits: text(record, questions::MENTOR_TRAITS),
            does_research: record
                .get(questions::MENTOR_RESEARCH)
                .map(is_affirmative)
                .unwrap_or(false),
            has_work_experience: record
                .get(questions::MENTOR_WORK_EXPERIENCE)
                .map(is_affirmative)
                .unwrap_or(false),
            hours_available: hours(record, questions::MENTOR_HOURS),
            capacity_answer: text(record, questions::MENTOR_CAPACITY),
            activities: ActivitySelections::default(),
        }
    }

    pub fn with_activities(mut self, activities: ActivitySelections) -> Self {
        self.activities = activities;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenteeProfile {
    pub id: String,
    pub common: CommonAnswers,
    /// 1 (doesn't care) to 5 (strongly prefers), default 1.
    pub same_gender_preference: u8,
    pub major_preference: u8,
    /// Desired mentor extroversion, 1..5, default 3.
    pub desired_extroversion: u8,
    pub desired_traits: Option<String>,
    pub personality_care: u8,
    pub research_preference: u8,
    pub work_experience_preference: u8,
    /// Monthly hours wanted; 2 when blank or non-numeric.
    pub hours_desired: u32,
    /// Activities the mentee is interested in, one column per category.
    pub interests: ActivitySelections,
}

impl MenteeProfile {
    pub fn from_record(record: &SurveyRecord) -> Self {
        let interests = ActivityCategory::ordered()
            .into_iter()
            .filter_map(|category| {
                record
                    .get(category.label())
                    .map(|value| (category, value.to_string()))
            })
            .collect();

        Self {
            id: record.id().to_string(),
            common: CommonAnswers::from_record(record),
            same_gender_preference: scale(record, questions::MENTEE_SAME_GENDER, DEFAULT_STRENGTH),
            major_preference: scale(
                record,
                questions::MENTEE_MAJOR_PREFERENCE,
                DEFAULT_STRENGTH,
            ),
            desired_extroversion: scale(
                record,
                questions::MENTEE_EXTROVERSION,
                DEFAULT_EXTROVERSION,
            ),
            desired_traits: text(record, questions::MENTEE_TRAITS),
            personality_care: scale(
                record,
                questions::MENTEE_PERSONALITY_CARE,
                DEFAULT_STRENGTH,
            ),
            research_preference: scale(
                record,
                questions::MENTEE_RESEARCH_PREFERENCE,
                DEFAULT_STRENGTH,
            ),
            work_experience_preference: scale(
                record,
                questions::MENTEE_WORK_EXPERIENCE_PREFERENCE,
                DEFAULT_STRENGTH,
            ),
            hours_desired: hours(record, questions::MENTEE_HOURS),
            interests,
        }
    }
}

fn text(record: &SurveyRecord, question: &str) -> Option<String> {
    record.get(question).map(str::to_string)
}

fn hours(record: &SurveyRecord, question: &str) -> u32 {
    record
        .get(question)
        .and_then(leading_integer)
        .unwrap_or(DEFAULT_HOURS)
}

// Five-point survey scales; out-of-range answers are clamped.
fn scale(record: &SurveyRecord, question: &str, default: u8) -> u8 {
    record
        .get(question)
        .and_then(leading_integer)
        .map(|value| value.clamp(1, 5) as u8)
        .unwrap_or(default)
}
