use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a Lesson.
///
/// Catalog ids are stable slugs (e.g. `budgeting`), not generated keys;
/// they never change across catalog revisions.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LessonId(String);

impl LessonId {
    /// Creates a new `LessonId` from a slug.
    #[must_use]
    pub fn new(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    /// Returns the underlying slug.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Unique identifier for a Badge.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BadgeId(String);

impl BadgeId {
    /// Creates a new `BadgeId` from a slug.
    #[must_use]
    pub fn new(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    /// Returns the underlying slug.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for LessonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LessonId({})", self.0)
    }
}

impl fmt::Debug for BadgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BadgeId({})", self.0)
    }
}

// ─── Display Implementations ───────────────────────────────────────────────────

impl fmt::Display for LessonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for BadgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for LessonId {
    fn from(slug: &str) -> Self {
        Self::new(slug)
    }
}

impl From<&str> for BadgeId {
    fn from(slug: &str) -> Self {
        Self::new(slug)
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lesson_id_display() {
        let id = LessonId::new("budgeting");
        assert_eq!(id.to_string(), "budgeting");
    }

    #[test]
    fn test_lesson_id_debug() {
        let id = LessonId::new("credit");
        assert_eq!(format!("{id:?}"), "LessonId(credit)");
    }

    #[test]
    fn test_badge_id_display() {
        let id = BadgeId::new("investing");
        assert_eq!(id.to_string(), "investing");
    }

    #[test]
    fn test_ids_are_ordered_by_slug() {
        let a = LessonId::new("budgeting");
        let b = LessonId::new("credit");
        assert!(a < b);
    }

    #[test]
    fn test_id_from_str_ref() {
        let id: LessonId = "budgeting".into();
        assert_eq!(id.as_str(), "budgeting");
    }
}
