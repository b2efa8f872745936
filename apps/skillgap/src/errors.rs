use std::path::PathBuf;

use thiserror::Error;

/// Application-level error type.
/// Every variant is fatal: `main` prints it and exits with status 1.
/// Recoverable failures (job lookup) have their own error type in `jobs`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Role skills file '{}' was not found", path.display())]
    ConfigMissing { path: PathBuf },

    #[error("Role skills file '{}' contains invalid JSON: {source}", path.display())]
    ConfigMalformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Role skills file '{}' defines no roles", path.display())]
    ConfigEmpty { path: PathBuf },

    #[error("Could not read resume '{}': {reason}", path.display())]
    DocumentUnreadable { path: PathBuf, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// True for the three ways the role catalog can fail to load.
    /// All three are reported identically to the user.
    pub fn is_fatal_config(&self) -> bool {
        matches!(
            self,
            AppError::ConfigMissing { .. }
                | AppError::ConfigMalformed { .. }
                | AppError::ConfigEmpty { .. }
        )
    }
}
