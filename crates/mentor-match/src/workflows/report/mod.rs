mod explanation;
mod summary;
mod tables;

pub use explanation::ExplanationDocument;
pub use summary::{render_assignments, RunSummary};
pub use tables::{write_assignments, write_match_matrix, write_mentor_activities};

use crate::config::OutputConfig;
use crate::workflows::matching::PipelineOutput;
use crate::workflows::survey::MentorActivities;
use chrono::Utc;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write report {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write report data: {0}")]
    Write(#[from] std::io::Error),
    #[error("invalid CSV output: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid run summary: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no match record for mentor {mentor_id} and mentee {mentee_id}")]
    MissingPair {
        mentor_id: String,
        mentee_id: String,
    },
}

/// Removes the files and symlinks directly inside `path`, creating it if absent.
/// Subdirectories are left alone.
pub fn clear_directory(path: &Path) -> Result<usize, ReportError> {
    let io_error = |source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    };

    fs::create_dir_all(path).map_err(io_error)?;
    let mut removed = 0;
    for entry in fs::read_dir(path).map_err(io_error)? {
        let entry = entry.map_err(io_error)?;
        let file_type = entry.file_type().map_err(io_error)?;
        if file_type.is_file() || file_type.is_symlink() {
            fs::remove_file(entry.path()).map_err(|source| ReportError::Io {
                path: entry.path(),
                source,
            })?;
            removed += 1;
        }
    }
    Ok(removed)
}

fn create(path: &Path) -> Result<BufWriter<File>, ReportError> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ReportError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    File::create(path)
        .map(BufWriter::new)
        .map_err(|source| ReportError::Io {
            path: path.to_path_buf(),
            source,
        })
}

/// Paths of everything a run wrote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WrittenReports {
    pub matches: PathBuf,
    pub assignments: PathBuf,
    pub activities: PathBuf,
    pub summary: PathBuf,
    pub explanations: Vec<PathBuf>,
}

/// Writes the run outputs into the configured directories.
#[derive(Debug, Clone)]
pub struct ReportWriter {
    output: OutputConfig,
}

impl ReportWriter {
    pub fn new(output: OutputConfig) -> Self {
        Self { output }
    }

    pub fn write_activities(&self, activities: &MentorActivities) -> Result<PathBuf, ReportError> {
        let path = self.output.activities_csv();
        write_mentor_activities(create(&path)?, activities)?;
        debug!(path = %path.display(), mentors = activities.len(), "wrote mentor activities");
        Ok(path)
    }

    pub fn write_all(&self, output: &PipelineOutput) -> Result<WrittenReports, ReportError> {
        let activities = self.write_activities(&output.activities)?;

        let matches = self.output.matches_csv();
        write_match_matrix(create(&matches)?, &output.matrix)?;

        let assignments = self.output.assignments_csv();
        write_assignments(create(&assignments)?, &output.assignment)?;

        let explanations = self.write_explanations(output)?;

        let summary = self.output.summary_json();
        let mut writer = create(&summary)?;
        serde_json::to_writer_pretty(&mut writer, &RunSummary::from_output(output, Utc::now()))?;
        writer.flush()?;

        info!(
            directory = %self.output.directory.display(),
            explanations = explanations.len(),
            "wrote match reports"
        );

        Ok(WrittenReports {
            matches,
            assignments,
            activities,
            summary,
            explanations,
        })
    }

    fn write_explanations(&self, output: &PipelineOutput) -> Result<Vec<PathBuf>, ReportError> {
        let directory = &self.output.explanations;
        let removed = clear_directory(directory)?;
        debug!(directory = %directory.display(), removed, "cleared explanations");

        let mut written = Vec::with_capacity(output.assignment.assigned_count());
        for (mentor_id, mentee) in output.assignment.pairs() {
            let record = output
                .matrix
                .get(mentor_id, &mentee.mentee_id)
                .ok_or_else(|| ReportError::MissingPair {
                    mentor_id: mentor_id.to_string(),
                    mentee_id: mentee.mentee_id.clone(),
                })?;

            let document =
                ExplanationDocument::render(mentor_id, &mentee.mentee_id, &record.score);
            let path = directory.join(document.file_name());
            fs::write(&path, document.body()).map_err(|source| ReportError::Io {
                path: path.clone(),
                source,
            })?;
            written.push(path);
        }
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_directory_creates_missing_directory() {
        let root = tempfile::tempdir().expect("temp dir");
        let path = root.path().join("explanations").join("latest");

        let removed = clear_directory(&path).expect("directory cleared");
        assert_eq!(removed, 0);
        assert!(path.is_dir());
    }

    #[test]
    fn clear_directory_removes_files_only() {
        let root = tempfile::tempdir().expect("temp dir");
        fs::write(root.path().join("12_ab1cd_xy2z"), "old").expect("file");
        fs::write(root.path().join("3_ab1cd_qq9q"), "old").expect("file");
        fs::create_dir(root.path().join("archive")).expect("subdir");

        let removed = clear_directory(root.path()).expect("directory cleared");
        assert_eq!(removed, 2);
        let remaining: Vec<_> = fs::read_dir(root.path())
            .expect("read dir")
            .map(|entry| entry.expect("entry").file_name())
            .collect();
        assert_eq!(remaining, vec![std::ffi::OsString::from("archive")]);
    }
}
