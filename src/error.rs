use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("File '{0}' not found.")]
    ResourceNotFound(String),
    #[error("Inputs directory not found: {}", .0.display())]
    InputsDirNotFound(PathBuf),
    #[error("{0}")]
    InvalidArgument(String),
    #[error("line {line}: '{token}' is not an integer level")]
    MalformedNumeric { line: usize, token: String },
    #[error("invalid config {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::InvalidArgument(_) => 1,
            AppError::ResourceNotFound(_) | AppError::InputsDirNotFound(_) => 2,
            AppError::MalformedNumeric { .. } => 3,
            AppError::Config { .. } | AppError::Io(_) => 1,
        }
    }
}
