//! Shared error types for the services crate.

use thiserror::Error;

use finbright_core::engine::EngineError;

/// Errors emitted by `ProgressionService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProgressionError {
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Errors emitted by `SettingsService`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("unsupported language code: {0}")]
    UnsupportedLanguage(String),
}
