#![forbid(unsafe_code)]

pub mod community;
pub mod error;
pub mod progression_service;
pub mod settings_service;
pub mod views;

pub use finbright_core::Clock;

pub use error::{ProgressionError, SettingsError};
pub use progression_service::{ProgressionService, StartReport};
pub use settings_service::{Language, SettingsService};
pub use views::{BadgeView, LessonView};
