// ==========================================
// Load Distribution Engine - Directory Access Layer
// ==========================================
// Responsibility: candidate data access behind a provider trait
// ==========================================

pub mod directory;
pub mod error;

pub use directory::{DirectoryProvider, DirectorySnapshot, InMemoryDirectory};
pub use error::{DirectoryError, DirectoryResult};
