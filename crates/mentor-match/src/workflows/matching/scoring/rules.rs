use super::super::domain::{ActivityCategory, Category, MatchScore};
use crate::workflows::survey::{intersect_answers, MenteeProfile, MentorProfile};
use std::collections::BTreeSet;

const MENTEE_GENDER_PREFERENCE: [&str; 5] = [
    "didn't prefer",
    "slightly preferred",
    "preferred",
    "preferred",
    "strongly preferred",
];

const EXTROVERSION_LABELS: [&str; 5] = [
    "very introverted",
    "slightly introverted",
    "neither introverted nor extroverted",
    "slightly extroverted",
    "very extroverted",
];

const INTEREST_LEVELS: [&str; 5] = ["not ", "somewhat ", "", "", "very "];

pub(crate) fn score_pair(mentor: &MentorProfile, mentee: &MenteeProfile) -> MatchScore {
    let mut score = MatchScore::default();

    score_gender(mentor, mentee, &mut score);
    score_year(mentor, mentee, &mut score);
    score_school(mentor, mentee, &mut score);
    score_major(mentor, mentee, &mut score);
    score_study_style(mentor, mentee, &mut score);
    score_academic_interests(mentor, mentee, &mut score);
    score_personality(mentor, mentee, &mut score);
    score_research(mentor, mentee, &mut score);
    score_work_experience(mentor, mentee, &mut score);
    score_hours(mentor, mentee, &mut score);
    score_mentorship_style(mentor, mentee, &mut score);
    score_activities(mentor, mentee, &mut score);

    score
}

fn record(
    score: &mut MatchScore,
    category: Category,
    weight: f64,
    sentence: impl FnOnce() -> String,
) {
    score.breakdown.set(category, weight);
    if weight != 0.0 {
        score.explanation.set(category, sentence());
    }
}

fn joined(values: &BTreeSet<String>) -> String {
    values.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
}

fn label_at(labels: &[&'static str; 5], one_based: u8) -> &'static str {
    labels[usize::from(one_based.clamp(1, 5)) - 1]
}

fn score_gender(mentor: &MentorProfile, mentee: &MenteeProfile, score: &mut MatchScore) {
    let same_gender = matches!(
        (&mentor.common.gender, &mentee.common.gender),
        (Some(left), Some(right)) if left == right
    );
    if !same_gender {
        return;
    }

    let mentee_weight = mentee.same_gender_preference.saturating_sub(1);
    let mentor_weight: u8 = if mentor.prefers_same_gender { 3 } else { 0 };
    let weight = (f64::from(mentee_weight) + f64::from(mentor_weight)) / 2.0;

    record(score, Category::Gender, weight, || {
        let mentor_preferred = if mentor_weight == 0 {
            "didn't prefer"
        } else {
            "preferred"
        };
        format!(
            "You both share the same gender (mentee {}, mentor {}).",
            label_at(&MENTEE_GENDER_PREFERENCE, mentee_weight + 1),
            mentor_preferred
        )
    });
}

fn score_year(mentor: &MentorProfile, mentee: &MenteeProfile, score: &mut MatchScore) {
    let (mentor_year, mentee_year) = (mentor.common.year, mentee.common.year);
    if mentor_year == mentee_year {
        record(score, Category::Year, -20.0, || {
            "The mentee is as old as the mentor.".to_string()
        });
    } else if mentor_year < mentee_year {
        record(score, Category::Year, -100.0, || {
            "The mentee is older than the mentor.".to_string()
        });
    }
}

fn score_school(mentor: &MentorProfile, mentee: &MenteeProfile, score: &mut MatchScore) {
    if let (Some(school), Some(other)) = (&mentor.common.school, &mentee.common.school) {
        if school == other {
            record(score, Category::School, 2.0, || {
                format!("You both go to the school \"{school}\".")
            });
        }
    }
}

fn score_major(mentor: &MentorProfile, mentee: &MenteeProfile, score: &mut MatchScore) {
    let shared = intersect_answers(
        mentor.common.majors.as_deref(),
        mentee.common.majors.as_deref(),
    );
    let multiplier = f64::from(mentee.major_preference.saturating_sub(1));
    let weight = 2.0 * multiplier * shared.len() as f64;
    record(score, Category::Major, weight, || {
        format!("You share the major/minor(s): {}", joined(&shared))
    });
}

fn score_study_style(mentor: &MentorProfile, mentee: &MenteeProfile, score: &mut MatchScore) {
    if let (Some(style), Some(other)) = (&mentor.common.study_style, &mentee.common.study_style) {
        if style == other {
            record(score, Category::StudyStyle, 3.0, || {
                let style = style.to_lowercase();
                let style = if style == "either" {
                    "either alone or in groups".to_string()
                } else {
                    style
                };
                format!("You both prefer to study {style}")
            });
        }
    }
}

fn score_academic_interests(
    mentor: &MentorProfile,
    mentee: &MenteeProfile,
    score: &mut MatchScore,
) {
    let shared = intersect_answers(
        mentor.common.academic_interests.as_deref(),
        mentee.common.academic_interests.as_deref(),
    );
    let weight = 2.0 * shared.len() as f64;
    record(score, Category::AcademicInterests, weight, || {
        format!("You have the same academic interest(s): {}", joined(&shared))
    });
}

fn score_personality(mentor: &MentorProfile, mentee: &MenteeProfile, score: &mut MatchScore) {
    let care = f64::from(mentee.personality_care.saturating_sub(1));

    let shared = intersect_answers(
        mentor.personality_traits.as_deref(),
        mentee.desired_traits.as_deref(),
    );
    let weight = care * shared.len() as f64;
    record(score, Category::PersonalityTraits, weight, || {
        format!(
            "The mentor has the mentee's desired personality traits: {}",
            joined(&shared)
        )
    });

    let distance = f64::from(mentor.extroversion.abs_diff(mentee.desired_extroversion));
    let weight = care * (2.0 - distance);
    record(score, Category::Extroversion, weight, || {
        format!(
            "The mentee is looking for a mentor who is {}, and the mentor is {}",
            label_at(&EXTROVERSION_LABELS, mentee.desired_extroversion),
            label_at(&EXTROVERSION_LABELS, mentor.extroversion)
        )
    });
}

// Both the research and the work-experience questions write the `research`
// entry; the work-experience pass runs second and always replaces the score.
fn score_research(mentor: &MentorProfile, mentee: &MenteeProfile, score: &mut MatchScore) {
    let desired = mentee.research_preference.saturating_sub(1);
    let offered = if mentor.does_research { 2.0 } else { 0.0 };
    let weight = f64::from(desired) * offered;
    record(score, Category::Research, weight, || {
        format!(
            "The mentee is {}interested in a mentor who is in research",
            label_at(&INTEREST_LEVELS, desired + 1)
        )
    });
}

fn score_work_experience(mentor: &MentorProfile, mentee: &MenteeProfile, score: &mut MatchScore) {
    let desired = mentee.work_experience_preference.saturating_sub(1);
    let offered = if mentor.has_work_experience { 2.0 } else { 0.0 };
    let weight = f64::from(desired) * offered;
    record(score, Category::Research, weight, || {
        format!(
            "The mentee is {}interested in a mentor who had work experience related to their major (e.g., an internship)",
            label_at(&INTEREST_LEVELS, desired + 1)
        )
    });
}

fn score_hours(mentor: &MentorProfile, mentee: &MenteeProfile, score: &mut MatchScore) {
    let desired = i64::from(mentee.hours_desired);
    let available = i64::from(mentor.hours_available);
    let lacking = desired - available;
    if lacking > 0 {
        record(score, Category::Hours, -2.0 * lacking as f64, || {
            format!(
                "The mentee prefers {desired} hours a month, but the mentor can only spare {available} hours."
            )
        });
    }
}

fn score_mentorship_style(
    mentor: &MentorProfile,
    mentee: &MenteeProfile,
    score: &mut MatchScore,
) {
    let shared = intersect_answers(
        mentor.common.mentorship_styles.as_deref(),
        mentee.common.mentorship_styles.as_deref(),
    );
    let weight = 3.0 * shared.len() as f64;
    record(score, Category::MentorshipStyle, weight, || {
        format!(
            "You have the same preferred mentorship style: {}",
            joined(&shared)
        )
    });
}

fn score_activities(mentor: &MentorProfile, mentee: &MenteeProfile, score: &mut MatchScore) {
    let mut matched = BTreeSet::new();

    for category in ActivityCategory::ordered() {
        let runs = mentor.activities.get(category);
        let wants = mentee.interests.get(category);
        matched.extend(intersect_answers(runs, wants));

        if let (Some(runs), Some(wants)) = (runs, wants) {
            record(score, Category::Activity(category), 2.0, || {
                format!(
                    "You both like \"{}\" activities. (mentor is in {runs}; mentee is interested in {wants})",
                    category.label()
                )
            });
        }
    }

    let weight = 10.0 * matched.len() as f64;
    record(score, Category::ActivityMatches, weight, || {
        format!(
            "The mentee is interested in the mentor's activit(ies): {}",
            joined(&matched)
        )
    });
}
