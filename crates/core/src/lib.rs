#![forbid(unsafe_code)]

//! Core domain for the FinBright financial-literacy demo: the lesson/badge
//! catalog and the progression engine that governs points, unlocking, and
//! badge awards. Pure and synchronous; no I/O, no persistence.

pub mod badges;
pub mod catalog;
pub mod engine;
pub mod error;
pub mod model;
pub mod time;

pub use catalog::{Catalog, CatalogError};
pub use engine::{EngineError, StartOutcome, is_unlocked, start_lesson};
pub use error::Error;
pub use time::Clock;
