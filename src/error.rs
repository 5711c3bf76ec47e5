use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PayslipError {
    #[error("Data directory not found at {0}. Run 'payslip init' to create it.")]
    DataDirNotFound(PathBuf),

    #[error("Data directory already exists at {0}")]
    AlreadyInitialized(PathBuf),

    #[error("Failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("Employee {0} not found")]
    EmployeeNotFound(u32),

    #[error("Failed to decode record at {path}:{line}: {source}")]
    StoreDecode {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode record for {path}: {source}")]
    StoreEncode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PayslipError>;
