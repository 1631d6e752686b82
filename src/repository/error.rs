// ==========================================
// Load Distribution Engine - Directory Layer Errors
// ==========================================
// Tool: thiserror derive macros
// ==========================================

use thiserror::Error;

/// Directory layer error type
#[derive(Error, Debug)]
pub enum DirectoryError {
    // ===== Backend errors =====
    #[error("directory backend unavailable: {0}")]
    Unavailable(String),

    #[error("directory query failed: {0}")]
    QueryFailed(String),

    // ===== Fixture errors =====
    #[error("directory fixture read failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("directory fixture parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    // ===== Catch-all =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias
pub type DirectoryResult<T> = Result<T, DirectoryError>;
