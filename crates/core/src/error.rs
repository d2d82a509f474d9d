use thiserror::Error;

use crate::catalog::CatalogError;
use crate::engine::EngineError;
use crate::model::{BadgeError, LessonError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Lesson(#[from] LessonError),
    #[error(transparent)]
    Badge(#[from] BadgeError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Engine(#[from] EngineError),
}
