mod badge;
mod ids;
mod lesson;
mod progress;

pub use ids::{BadgeId, LessonId};

pub use badge::{Badge, BadgeError};
pub use lesson::{Lesson, LessonError, Level};
pub use progress::UserProgress;
