use super::ReportError;
use crate::workflows::matching::{format_score, ActivityCategory, Assignment, Category, MatchMatrix};
use crate::workflows::survey::{MentorActivities, ID_COLUMN};
use std::io::Write;

/// Full match matrix: one row per pair, every category score, highest total first.
pub fn write_match_matrix<W: Write>(writer: W, matrix: &MatchMatrix) -> Result<(), ReportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    let mut header = vec!["Mentee", "Mentor"];
    header.extend(Category::ordered().into_iter().map(Category::label));
    csv_writer.write_record(&header)?;

    for record in matrix.records() {
        let mut row = vec![record.mentee_id.clone(), record.mentor_id.clone()];
        row.extend(
            record
                .score
                .breakdown
                .entries()
                .map(|(_, value)| format_score(value)),
        );
        csv_writer.write_record(&row)?;
    }

    csv_writer.flush()?;
    Ok(())
}

pub fn write_assignments<W: Write>(writer: W, assignment: &Assignment) -> Result<(), ReportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["Mentor ID", "Mentees"])?;

    for entry in assignment.iter() {
        let mentees = entry
            .mentees
            .iter()
            .map(|mentee| mentee.mentee_id.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        csv_writer.write_record([entry.mentor_id.as_str(), mentees.as_str()])?;
    }

    csv_writer.flush()?;
    Ok(())
}

pub fn write_mentor_activities<W: Write>(
    writer: W,
    activities: &MentorActivities,
) -> Result<(), ReportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    let mut header = vec![ID_COLUMN];
    header.extend(ActivityCategory::ordered().into_iter().map(ActivityCategory::label));
    csv_writer.write_record(&header)?;

    for (mentor_id, selections) in activities.iter() {
        let mut row = vec![mentor_id];
        row.extend(
            ActivityCategory::ordered()
                .into_iter()
                .map(|category| selections.get(category).unwrap_or_default()),
        );
        csv_writer.write_record(&row)?;
    }

    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::matching::{CapacityTable, GreedyAssigner};
    use crate::workflows::survey::{questions, MenteeProfile, MentorProfile, SurveyRecord};
    use std::collections::{BTreeSet, HashMap};
    use std::io::Cursor;

    fn record(id: &str, pairs: &[(&str, &str)]) -> SurveyRecord {
        let fields: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        SurveyRecord::new(id, fields)
    }

    fn profiles() -> (Vec<MentorProfile>, Vec<MenteeProfile>) {
        let mentors = vec![
            MentorProfile::from_record(&record(
                "m1",
                &[(questions::SCHOOL, "Nursing"), (questions::MENTOR_CAPACITY, "Two or three")],
            )),
            MentorProfile::from_record(&record("m2", &[(questions::MENTOR_CAPACITY, "Just one")])),
        ];
        let mentees = vec![
            MenteeProfile::from_record(&record("e1", &[(questions::SCHOOL, "Nursing")])),
            MenteeProfile::from_record(&record("e2", &[])),
        ];
        (mentors, mentees)
    }

    #[test]
    fn matrix_csv_has_every_category_column() {
        let (mentors, mentees) = profiles();
        let matrix = MatchMatrix::build(&mentors, &mentees);
        let mut buffer = Vec::new();
        write_match_matrix(&mut buffer, &matrix).expect("write matrix");

        let text = String::from_utf8(buffer).expect("utf8");
        let mut lines = text.lines();
        let header = lines.next().expect("header");
        assert!(header.starts_with("Mentee,Mentor,total,gender,year,school"));
        assert!(header.ends_with("Choir,activity matches"));
        assert_eq!(header.split(',').count(), 2 + Category::COUNT);

        let first = lines.next().expect("first row");
        assert!(first.starts_with("e1,m1,-18,0,-20,2,"));
        assert_eq!(lines.count(), 3);
    }

    #[test]
    fn assignments_csv_joins_mentees() {
        let (mentors, mentees) = profiles();
        let matrix = MatchMatrix::build(&mentors, &mentees);
        let capacities = CapacityTable::from_mentors(&mentors).expect("capacities");
        let ids: BTreeSet<String> = mentees.iter().map(|m| m.id.clone()).collect();
        let assignment = GreedyAssigner::new()
            .assign(matrix.records(), &capacities, &ids)
            .expect("assign");

        let mut buffer = Vec::new();
        write_assignments(&mut buffer, &assignment).expect("write assignments");
        let text = String::from_utf8(buffer).expect("utf8");
        assert_eq!(text, "Mentor ID,Mentees\nm1,e1\nm2,e2\n");
    }

    #[test]
    fn activities_csv_leaves_blank_categories_empty() {
        let export = "Computing id,What is the name of your activity?,What categor(ies) best describe your activity?\nm1,Glee Club,Choir\n";
        let activities = MentorActivities::from_reader(Cursor::new(export)).expect("parse");
        let mut buffer = Vec::new();
        write_mentor_activities(&mut buffer, &activities).expect("write activities");

        let text = String::from_utf8(buffer).expect("utf8");
        let row = text.lines().nth(1).expect("row");
        assert_eq!(row, "m1,,,,,,,,,,,Glee Club");
    }
}
