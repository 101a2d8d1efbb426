use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Activity categories offered on both surveys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityCategory {
    SocialAndHobby,
    PublicService,
    MediaGroup,
    CulturalAndEthnic,
    VisualAndPerformingArts,
    HonorSociety,
    AcademicAndProfessional,
    ACappella,
    PeerMentors,
    Debate,
    Choir,
}

impl ActivityCategory {
    pub const fn ordered() -> [Self; 11] {
        [
            Self::SocialAndHobby,
            Self::PublicService,
            Self::MediaGroup,
            Self::CulturalAndEthnic,
            Self::VisualAndPerformingArts,
            Self::HonorSociety,
            Self::AcademicAndProfessional,
            Self::ACappella,
            Self::PeerMentors,
            Self::Debate,
            Self::Choir,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::SocialAndHobby => "Social & Hobby",
            Self::PublicService => "Public Service",
            Self::MediaGroup => "Media Group",
            Self::CulturalAndEthnic => "Cultural & Ethnic",
            Self::VisualAndPerformingArts => "Visual & Performing Arts",
            Self::HonorSociety => "Honor Society",
            Self::AcademicAndProfessional => "Academic & Professional",
            Self::ACappella => "A Cappella",
            Self::PeerMentors => "Peer Mentors",
            Self::Debate => "Debate",
            Self::Choir => "Choir",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ordered()
            .into_iter()
            .find(|category| category.label() == label)
    }
}

/// Scoring dimension. Declaration order is reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Total,
    Gender,
    Year,
    School,
    Major,
    StudyStyle,
    AcademicInterests,
    PersonalityTraits,
    Extroversion,
    Research,
    WorkExperience,
    Hours,
    MentorshipStyle,
    Activity(ActivityCategory),
    ActivityMatches,
}

impl Category {
    pub const COUNT: usize = 25;

    pub fn ordered() -> [Self; Self::COUNT] {
        let activities = ActivityCategory::ordered();
        [
            Self::Total,
            Self::Gender,
            Self::Year,
            Self::School,
            Self::Major,
            Self::StudyStyle,
            Self::AcademicInterests,
            Self::PersonalityTraits,
            Self::Extroversion,
            Self::Research,
            Self::WorkExperience,
            Self::Hours,
            Self::MentorshipStyle,
            Self::Activity(activities[0]),
            Self::Activity(activities[1]),
            Self::Activity(activities[2]),
            Self::Activity(activities[3]),
            Self::Activity(activities[4]),
            Self::Activity(activities[5]),
            Self::Activity(activities[6]),
            Self::Activity(activities[7]),
            Self::Activity(activities[8]),
            Self::Activity(activities[9]),
            Self::Activity(activities[10]),
            Self::ActivityMatches,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Total => "total",
            Self::Gender => "gender",
            Self::Year => "year",
            Self::School => "school",
            Self::Major => "major",
            Self::StudyStyle => "study style",
            Self::AcademicInterests => "academic interests",
            Self::PersonalityTraits => "personality traits",
            Self::Extroversion => "extroversion",
            Self::Research => "research",
            Self::WorkExperience => "work experience",
            Self::Hours => "hours",
            Self::MentorshipStyle => "mentorship style",
            Self::Activity(activity) => activity.label(),
            Self::ActivityMatches => "activity matches",
        }
    }

    pub const fn is_activity(self) -> bool {
        matches!(self, Self::Activity(_))
    }

    /// Sentence kept when the category scores zero.
    pub fn default_explanation(self) -> String {
        let sentence = match self {
            Self::Gender => "You have different genders or don't prefer the same gender",
            Self::Year => "The mentor is older than the mentee",
            Self::School => "You don't go to the same school (e.g., College of Arts and Sciences)",
            Self::Major => "You don't share any majors/minors or don't care",
            Self::StudyStyle => "You don't share a study style or don't care",
            Self::AcademicInterests => "You don't share any academic interests or don't care",
            Self::PersonalityTraits => {
                "The mentor doesn't have the mentee's desired personality traits or the mentee doesn't care"
            }
            Self::Extroversion => {
                "The mentor doesn't have the mentee's desired level of extroversion or the mentee doesn't care"
            }
            Self::Research => "The mentor doesn't do research or the mentee doesn't care",
            Self::WorkExperience => {
                "The mentor hasn't had work experience related to their major (e.g., an internship) or the mentee doesn't care"
            }
            Self::Hours => "The mentor is willing to spend as many hours as the mentee prefers",
            Self::MentorshipStyle => "You don't share a mentorship style or don't care",
            Self::ActivityMatches => {
                "The mentor isn't involved in any activities the mentee indicated interest in"
            }
            Self::Total | Self::Activity(_) => {
                return format!("\"{}\" did not contribute to score.", self.label())
            }
        };
        sentence.to_string()
    }
}

/// Signed contribution per category. `total` is always derived, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    scores: BTreeMap<Category, f64>,
}

impl Default for ScoreBreakdown {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreBreakdown {
    pub fn new() -> Self {
        let scores = Category::ordered()
            .into_iter()
            .filter(|category| *category != Category::Total)
            .map(|category| (category, 0.0))
            .collect();
        Self { scores }
    }

    pub fn set(&mut self, category: Category, score: f64) {
        if category != Category::Total {
            self.scores.insert(category, score);
        }
    }

    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Total => self.total(),
            other => self.scores.get(&other).copied().unwrap_or(0.0),
        }
    }

    pub fn total(&self) -> f64 {
        self.scores.values().sum()
    }

    /// Every category in reporting order, `total` first.
    pub fn entries(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        Category::ordered()
            .into_iter()
            .map(move |category| (category, self.get(category)))
    }
}

/// One sentence per category describing its contribution.
#[derive(Debug, Clone, PartialEq)]
pub struct Explanation {
    sentences: BTreeMap<Category, String>,
}

impl Default for Explanation {
    fn default() -> Self {
        let sentences = Category::ordered()
            .into_iter()
            .map(|category| (category, category.default_explanation()))
            .collect();
        Self { sentences }
    }
}

impl Explanation {
    pub fn set(&mut self, category: Category, sentence: impl Into<String>) {
        self.sentences.insert(category, sentence.into());
    }

    pub fn get(&self, category: Category) -> &str {
        self.sentences
            .get(&category)
            .map(String::as_str)
            .unwrap_or_default()
    }
}

/// Breakdown and explanation for one mentor/mentee pair.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MatchScore {
    pub breakdown: ScoreBreakdown,
    pub explanation: Explanation,
}

impl MatchScore {
    pub fn total(&self) -> f64 {
        self.breakdown.total()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchRecord {
    pub mentor_id: String,
    pub mentee_id: String,
    pub score: MatchScore,
}

impl MatchRecord {
    pub fn total(&self) -> f64 {
        self.score.total()
    }
}

/// Integral scores print without a fractional part: `12`, `-100`, `1.5`.
pub fn format_score(score: f64) -> String {
    if score.fract() == 0.0 && score.abs() < 1e15 {
        format!("{}", score as i64)
    } else {
        format!("{score}")
    }
}

/// [`format_score`] with an explicit sign for non-negative values.
pub fn format_signed_score(score: f64) -> String {
    if score >= 0.0 {
        format!("+{}", format_score(score))
    } else {
        format_score(score)
    }
}
