//! Error types for the command-line front end.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Friction factor error: {0}")]
    Solver(#[from] cw_solver::SolverError),

    #[error("Pipe flow error: {0}")]
    Pipe(#[from] cw_pipe::PipeError),

    #[error("Failed to read scenario file: {path}")]
    ScenarioFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse scenario file: {path}")]
    ScenarioFileParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type AppResult<T> = Result<T, AppError>;
