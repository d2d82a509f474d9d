use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::model::ids::LessonId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LessonError {
    #[error("lesson id cannot be empty")]
    EmptyId,

    #[error("lesson title cannot be empty")]
    EmptyTitle,

    #[error("unrecognized lesson level: {0}")]
    InvalidLevel(String),
}

//
// ─── LEVEL ─────────────────────────────────────────────────────────────────────
//

/// Difficulty level of a lesson.
///
/// The level determines how many points completing the lesson awards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    /// Points granted for completing a lesson of this level.
    ///
    /// Beginner 20, Intermediate 40, Advanced 60.
    #[must_use]
    pub fn points_awarded(self) -> u32 {
        match self {
            Level::Beginner => 20,
            Level::Intermediate => 40,
            Level::Advanced => 60,
        }
    }

    /// Returns the display label for this level.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = LessonError;

    /// Parses a catalog level string.
    ///
    /// # Errors
    ///
    /// Returns `LessonError::InvalidLevel` for anything other than
    /// `Beginner`, `Intermediate`, or `Advanced`. A catalog that produces
    /// such a value is defective; the error is fatal to the call.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Beginner" => Ok(Level::Beginner),
            "Intermediate" => Ok(Level::Intermediate),
            "Advanced" => Ok(Level::Advanced),
            other => Err(LessonError::InvalidLevel(other.to_string())),
        }
    }
}

//
// ─── LESSON ────────────────────────────────────────────────────────────────────
//

/// A catalog entry the user can study.
///
/// `points_required` is the cumulative point total needed to unlock the
/// lesson; the first lesson in a track uses 0. Whether a lesson is unlocked
/// for a particular user is derived from their progress, never stored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    id: LessonId,
    title: String,
    description: String,
    duration_secs: u32,
    level: Level,
    points_required: u32,
}

impl Lesson {
    /// Creates a new lesson.
    ///
    /// # Errors
    ///
    /// Returns `LessonError::EmptyId` or `LessonError::EmptyTitle` when the
    /// corresponding field is blank.
    pub fn new(
        id: LessonId,
        title: impl Into<String>,
        description: impl Into<String>,
        duration_secs: u32,
        level: Level,
        points_required: u32,
    ) -> Result<Self, LessonError> {
        if id.is_empty() {
            return Err(LessonError::EmptyId);
        }
        let title = title.into();
        if title.trim().is_empty() {
            return Err(LessonError::EmptyTitle);
        }

        Ok(Self {
            id,
            title,
            description: description.into(),
            duration_secs,
            level,
            points_required,
        })
    }

    #[must_use]
    pub fn id(&self) -> &LessonId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn duration_secs(&self) -> u32 {
        self.duration_secs
    }

    /// Duration formatted as `m:ss` for display (e.g. `5:30`).
    #[must_use]
    pub fn duration_label(&self) -> String {
        format!("{}:{:02}", self.duration_secs / 60, self.duration_secs % 60)
    }

    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    /// Cumulative points needed before this lesson unlocks.
    #[must_use]
    pub fn points_required(&self) -> u32 {
        self.points_required
    }

    /// Points granted for completing this lesson.
    #[must_use]
    pub fn points_awarded(&self) -> u32 {
        self.level.points_awarded()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn build_lesson() -> Lesson {
        Lesson::new(
            LessonId::new("budgeting"),
            "Budgeting Basics",
            "Learn how to create and stick to a budget",
            330,
            Level::Beginner,
            0,
        )
        .unwrap()
    }

    #[test]
    fn level_points_follow_difficulty() {
        assert_eq!(Level::Beginner.points_awarded(), 20);
        assert_eq!(Level::Intermediate.points_awarded(), 40);
        assert_eq!(Level::Advanced.points_awarded(), 60);
    }

    #[test]
    fn level_parses_catalog_strings() {
        assert_eq!("Beginner".parse::<Level>().unwrap(), Level::Beginner);
        assert_eq!(
            "Intermediate".parse::<Level>().unwrap(),
            Level::Intermediate
        );
        assert_eq!("Advanced".parse::<Level>().unwrap(), Level::Advanced);
    }

    #[test]
    fn level_rejects_unknown_strings() {
        let err = "Expert".parse::<Level>().unwrap_err();
        assert_eq!(err, LessonError::InvalidLevel("Expert".to_string()));
    }

    #[test]
    fn lesson_rejects_empty_id() {
        let err = Lesson::new(
            LessonId::new(""),
            "Title",
            "desc",
            60,
            Level::Beginner,
            0,
        )
        .unwrap_err();
        assert_eq!(err, LessonError::EmptyId);
    }

    #[test]
    fn lesson_rejects_blank_title() {
        let err = Lesson::new(
            LessonId::new("budgeting"),
            "   ",
            "desc",
            60,
            Level::Beginner,
            0,
        )
        .unwrap_err();
        assert_eq!(err, LessonError::EmptyTitle);
    }

    #[test]
    fn lesson_points_awarded_comes_from_level() {
        let lesson = build_lesson();
        assert_eq!(lesson.points_awarded(), 20);
    }

    #[test]
    fn duration_label_is_minutes_and_seconds() {
        let lesson = build_lesson();
        assert_eq!(lesson.duration_label(), "5:30");
    }
}
