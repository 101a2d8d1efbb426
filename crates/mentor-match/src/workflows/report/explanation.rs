use crate::workflows::matching::{format_score, format_signed_score, Category, MatchScore};

/// Plain-text account of why a mentor and mentee scored the way they did.
#[derive(Debug, Clone, PartialEq)]
pub struct ExplanationDocument {
    mentor_id: String,
    mentee_id: String,
    total: f64,
    body: String,
}

impl ExplanationDocument {
    pub fn render(mentor_id: &str, mentee_id: &str, score: &MatchScore) -> Self {
        let total = score.total();
        let header =
            format!("Score explanation for {mentor_id} (mentor) and {mentee_id} (mentee):");
        let mut lines = vec![header.clone(), "=".repeat(header.chars().count())];

        let mut contributing: Vec<(Category, f64)> = score
            .breakdown
            .entries()
            .filter(|(category, value)| *category != Category::Total && *value != 0.0)
            .collect();
        contributing.sort_by(|left, right| right.1.total_cmp(&left.1));

        for (category, value) in contributing {
            lines.push(format!(
                "{} ({})",
                score.explanation.get(category),
                format_signed_score(value)
            ));
        }

        lines.push(format!("TOTAL SCORE: {}", format_score(total)));
        lines.push(String::new());
        lines.push("The following did not contribute to the score:".to_string());

        lines.extend(
            score
                .breakdown
                .entries()
                .filter(|(category, value)| *value == 0.0 && !category.is_activity())
                .map(|(category, _)| format!("\t{}", score.explanation.get(category))),
        );

        Self {
            mentor_id: mentor_id.to_string(),
            mentee_id: mentee_id.to_string(),
            total,
            body: lines.join("\n"),
        }
    }

    /// `<total>_<mentor>_<mentee>`, so a directory listing sorts by score.
    pub fn file_name(&self) -> String {
        format!(
            "{}_{}_{}",
            format_score(self.total),
            self.mentor_id,
            self.mentee_id
        )
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}
