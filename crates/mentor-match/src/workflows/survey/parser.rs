use super::normalizer::{is_blank, normalize_id, strip_invisible};
use super::SurveyError;
use std::collections::HashMap;
use std::io::Read;

pub const ID_COLUMN: &str = "Computing id";

/// One survey response keyed by question text.
#[derive(Debug, Clone, PartialEq)]
pub struct SurveyRecord {
    id: String,
    fields: HashMap<String, String>,
}

impl SurveyRecord {
    pub fn new(id: impl Into<String>, fields: HashMap<String, String>) -> Self {
        Self {
            id: normalize_id(&id.into()),
            fields,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Answer to `question`, or `None` when the column is missing or the answer blank.
    pub fn get(&self, question: &str) -> Option<&str> {
        self.fields
            .get(question)
            .map(|value| value.trim())
            .filter(|value| !is_blank(value))
    }
}

/// A parsed survey export. Row order is preserved.
#[derive(Debug, Clone, Default)]
pub struct SurveyTable {
    headers: Vec<String>,
    records: Vec<SurveyRecord>,
}

impl SurveyTable {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, SurveyError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = csv_reader
            .headers()?
            .iter()
            .map(|header| strip_invisible(header).trim().to_string())
            .collect();

        if !headers.iter().any(|header| header == ID_COLUMN) {
            return Err(SurveyError::MissingColumn { column: ID_COLUMN });
        }

        let mut records = Vec::new();
        for (index, row) in csv_reader.records().enumerate() {
            let row = row?;
            let fields: HashMap<String, String> = headers
                .iter()
                .cloned()
                .zip(row.iter().map(str::to_string))
                .collect();

            let id = fields
                .get(ID_COLUMN)
                .map(|value| normalize_id(value))
                .filter(|value| !value.is_empty())
                .ok_or_else(|| SurveyError::MissingIdentifier {
                    line: row
                        .position()
                        .map(|position| position.line())
                        .unwrap_or(index as u64 + 2),
                })?;

            records.push(SurveyRecord { id, fields });
        }

        Ok(Self { headers, records })
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.headers.iter().any(|header| header == column)
    }

    pub fn records(&self) -> &[SurveyRecord] {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parses_rows_and_normalizes_ids() {
        let table = SurveyTable::from_reader(Cursor::new(
            "\u{feff}Computing id,School\n  ABC1D ,Engineering\nxy2z,nan\n",
        ))
        .expect("parse");

        let ids: Vec<&str> = table.records().iter().map(SurveyRecord::id).collect();
        assert_eq!(ids, vec!["abc1d", "xy2z"]);
        assert_eq!(table.records()[0].get("School"), Some("Engineering"));
        assert_eq!(table.records()[1].get("School"), None);
        assert_eq!(table.records()[1].get("Not a question"), None);
    }

    #[test]
    fn missing_identifier_column_is_rejected() {
        let error = SurveyTable::from_reader(Cursor::new("Name,School\nA,B\n"))
            .expect_err("missing id column");
        assert!(matches!(
            error,
            SurveyError::MissingColumn {
                column: ID_COLUMN
            }
        ));
    }

    #[test]
    fn blank_identifier_reports_line() {
        let error = SurveyTable::from_reader(Cursor::new("Computing id,School\nabc,X\n  ,Y\n"))
            .expect_err("blank id");
        assert!(matches!(error, SurveyError::MissingIdentifier { line: 3 }));
    }

    #[test]
    fn blank_identifier_line_accounts_for_multiline_answers() {
        let error = SurveyTable::from_reader(Cursor::new(
            "Computing id,Academic interests\nabc,\"Robotics,\nEthics\"\n,Poetry\n",
        ))
        .expect_err("blank id");
        assert!(matches!(error, SurveyError::MissingIdentifier { line: 4 }));
    }
}
