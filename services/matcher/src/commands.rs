use crate::cli::{ExplainArgs, InputArgs, RunArgs};
use mentor_match::config::AppConfig;
use mentor_match::error::AppError;
use mentor_match::telemetry;
use mentor_match::workflows::report::{render_assignments, ExplanationDocument, ReportWriter};
use mentor_match::workflows::survey::SurveyError;
use mentor_match::{MatchingPipeline, MentorActivities, ProfileStore, ScoreEngine};
use std::fs::File;
use tracing::info;

fn load_config(inputs: InputArgs) -> Result<AppConfig, AppError> {
    let mut config = AppConfig::load()?;
    inputs.apply(&mut config);
    telemetry::init(&config.telemetry)?;
    Ok(config)
}

pub(crate) fn run_matching(args: RunArgs) -> Result<(), AppError> {
    let RunArgs {
        inputs,
        explanations_dir,
    } = args;

    let mut config = load_config(inputs)?;
    if let Some(path) = explanations_dir {
        config.output.explanations = path;
    }
    info!(environment = ?config.environment, "starting matching run");

    let store = ProfileStore::load(&config.inputs)?;
    let output = MatchingPipeline::new().run(&store)?;
    let written = ReportWriter::new(config.output.clone()).write_all(&output)?;

    println!("{}", render_assignments(&output.assignment));
    println!(
        "\nWrote {}, {} and {} explanation file(s) to {}",
        written.matches.display(),
        written.assignments.display(),
        written.explanations.len(),
        config.output.explanations.display()
    );
    Ok(())
}

pub(crate) fn run_activities(args: InputArgs) -> Result<(), AppError> {
    let config = load_config(args)?;

    let path = &config.inputs.activities;
    let file = File::open(path).map_err(|source| SurveyError::Io {
        path: path.clone(),
        source,
    })?;
    let activities = MentorActivities::from_reader(file)?;
    let written = ReportWriter::new(config.output.clone()).write_activities(&activities)?;

    println!(
        "Wrote activities for {} mentor(s) to {}",
        activities.len(),
        written.display()
    );
    Ok(())
}

pub(crate) fn run_explain(args: ExplainArgs) -> Result<(), AppError> {
    let ExplainArgs {
        inputs,
        mentor,
        mentee,
    } = args;
    let config = load_config(inputs)?;
    let store = ProfileStore::load(&config.inputs)?;

    let mentor = store
        .mentor(&mentor)
        .ok_or_else(|| AppError::NotFound(format!("mentor {mentor}")))?;
    let mentee = store
        .mentee(&mentee)
        .ok_or_else(|| AppError::NotFound(format!("mentee {mentee}")))?;

    let score = ScoreEngine::new().score(mentor, mentee);
    let document = ExplanationDocument::render(&mentor.id, &mentee.id, &score);
    println!("{}", document.body());
    Ok(())
}
