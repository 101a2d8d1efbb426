use crate::commands::{run_activities, run_explain, run_matching};
use clap::{Args, Parser, Subcommand};
use mentor_match::config::AppConfig;
use mentor_match::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "mentor-match",
    about = "Score mentor/mentee survey exports and assign mentees within mentor capacity",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score every pair, assign mentees and write all reports (default command)
    Run(RunArgs),
    /// Write the per-mentor activities table only
    Activities(InputArgs),
    /// Print the score explanation for a single mentor/mentee pair
    Explain(ExplainArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct InputArgs {
    /// Override the mentor survey export
    #[arg(long)]
    pub(crate) mentors: Option<PathBuf>,
    /// Override the mentee survey export
    #[arg(long)]
    pub(crate) mentees: Option<PathBuf>,
    /// Override the mentor activities export
    #[arg(long)]
    pub(crate) activities: Option<PathBuf>,
    /// Override the directory reports are written to
    #[arg(long)]
    pub(crate) output_dir: Option<PathBuf>,
}

impl InputArgs {
    pub(crate) fn apply(self, config: &mut AppConfig) {
        if let Some(path) = self.mentors {
            config.inputs.mentors = path;
        }
        if let Some(path) = self.mentees {
            config.inputs.mentees = path;
        }
        if let Some(path) = self.activities {
            config.inputs.activities = path;
        }
        if let Some(path) = self.output_dir {
            config.output.directory = path;
        }
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct RunArgs {
    #[command(flatten)]
    pub(crate) inputs: InputArgs,
    /// Override the directory explanation files are written to
    #[arg(long)]
    pub(crate) explanations_dir: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct ExplainArgs {
    #[command(flatten)]
    pub(crate) inputs: InputArgs,
    /// Computing id of the mentor
    #[arg(long)]
    pub(crate) mentor: String,
    /// Computing id of the mentee
    #[arg(long)]
    pub(crate) mentee: String,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Run(RunArgs::default()));

    match command {
        Command::Run(args) => run_matching(args),
        Command::Activities(args) => run_activities(args),
        Command::Explain(args) => run_explain(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_invocation_has_no_subcommand() {
        let cli = Cli::try_parse_from(["mentor-match"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn run_accepts_path_overrides() {
        let cli = Cli::try_parse_from([
            "mentor-match",
            "run",
            "--mentors",
            "in/mentors.csv",
            "--output-dir",
            "out",
            "--explanations-dir",
            "out/explanations",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Run(args)) => {
                assert_eq!(args.inputs.mentors, Some(PathBuf::from("in/mentors.csv")));
                assert_eq!(args.inputs.output_dir, Some(PathBuf::from("out")));
                assert_eq!(
                    args.explanations_dir,
                    Some(PathBuf::from("out/explanations"))
                );
            }
            other => panic!("expected run command, got {other:?}"),
        }
    }

    #[test]
    fn explain_requires_both_ids() {
        assert!(Cli::try_parse_from(["mentor-match", "explain", "--mentor", "ab1cd"]).is_err());
        let cli = Cli::try_parse_from([
            "mentor-match",
            "explain",
            "--mentor",
            "ab1cd",
            "--mentee",
            "xy2z",
        ])
        .expect("parses");
        assert!(matches!(cli.command, Some(Command::Explain(_))));
    }
}
