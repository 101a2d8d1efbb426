use std::env;
use std::fmt;
use std::path::PathBuf;

/// Distinguishes runtime behavior for different stages of a matching run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the matcher.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub inputs: InputConfig,
    pub output: OutputConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let inputs = InputConfig {
            mentors: path_var("MATCH_MENTORS_CSV", "mentors_cleaned.csv")?,
            mentees: path_var("MATCH_MENTEES_CSV", "mentees_cleaned.csv")?,
            activities: path_var("MATCH_ACTIVITIES_CSV", "activities_cleaned.csv")?,
        };

        let output = OutputConfig {
            directory: path_var("MATCH_OUTPUT_DIR", ".")?,
            explanations: path_var("MATCH_EXPLANATIONS_DIR", "explanations")?,
        };

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            inputs,
            output,
            telemetry: TelemetryConfig { log_level },
        })
    }
}

fn path_var(name: &'static str, default: &str) -> Result<PathBuf, ConfigError> {
    match env::var(name) {
        Ok(value) if value.trim().is_empty() => Err(ConfigError::EmptyPath { variable: name }),
        Ok(value) => Ok(PathBuf::from(value.trim())),
        Err(_) => Ok(PathBuf::from(default)),
    }
}

/// Locations of the three survey exports.
#[derive(Debug, Clone)]
pub struct InputConfig {
    pub mentors: PathBuf,
    pub mentees: PathBuf,
    pub activities: PathBuf,
}

/// Where reports are written.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub directory: PathBuf,
    pub explanations: PathBuf,
}

impl OutputConfig {
    pub fn matches_csv(&self) -> PathBuf {
        self.directory.join("matches.csv")
    }

    pub fn assignments_csv(&self) -> PathBuf {
        self.directory.join("mentor_assignments.csv")
    }

    pub fn activities_csv(&self) -> PathBuf {
        self.directory.join("activities_by_mentor.csv")
    }

    pub fn summary_json(&self) -> PathBuf {
        self.directory.join("run_summary.json")
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    EmptyPath { variable: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyPath { variable } => {
                write!(f, "{variable} must not be blank when set")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
