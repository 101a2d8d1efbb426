mod cli;
mod commands;

use mentor_match::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
