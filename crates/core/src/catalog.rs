use thiserror::Error;

use crate::model::{Badge, BadgeError, BadgeId, Lesson, LessonError, LessonId, Level};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("duplicate lesson id in catalog: {0}")]
    DuplicateLesson(LessonId),

    #[error("duplicate badge id in catalog: {0}")]
    DuplicateBadge(BadgeId),

    #[error(transparent)]
    Lesson(#[from] LessonError),

    #[error(transparent)]
    Badge(#[from] BadgeError),
}

//
// ─── CATALOG ───────────────────────────────────────────────────────────────────
//

/// The fixed, ordered list of lessons and badges.
///
/// Populated once at startup and immutable thereafter; the engine reads it,
/// nothing writes it. Ordering is the authoring order, which is also the
/// order the presentation layer renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    lessons: Vec<Lesson>,
    badges: Vec<Badge>,
}

impl Catalog {
    /// Creates a catalog from authored lessons and badges.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateLesson` / `DuplicateBadge` when two
    /// entries share an id.
    pub fn new(lessons: Vec<Lesson>, badges: Vec<Badge>) -> Result<Self, CatalogError> {
        for (i, lesson) in lessons.iter().enumerate() {
            if lessons[..i].iter().any(|other| other.id() == lesson.id()) {
                return Err(CatalogError::DuplicateLesson(lesson.id().clone()));
            }
        }
        for (i, badge) in badges.iter().enumerate() {
            if badges[..i].iter().any(|other| other.id() == badge.id()) {
                return Err(CatalogError::DuplicateBadge(badge.id().clone()));
            }
        }

        Ok(Self { lessons, badges })
    }

    /// Lessons in authoring order.
    #[must_use]
    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    /// Badges in authoring order.
    #[must_use]
    pub fn badges(&self) -> &[Badge] {
        &self.badges
    }

    /// Looks up a lesson by id.
    #[must_use]
    pub fn lesson(&self, id: &LessonId) -> Option<&Lesson> {
        self.lessons.iter().find(|lesson| lesson.id() == id)
    }

    /// Looks up a badge by id.
    #[must_use]
    pub fn badge(&self, id: &BadgeId) -> Option<&Badge> {
        self.badges.iter().find(|badge| badge.id() == id)
    }

    /// The built-in FinBright demo catalog.
    ///
    /// Three lessons (Beginner/Intermediate/Advanced, unlocking at 0/50/100
    /// points) and three point-threshold badges at 50/100/150.
    #[must_use]
    pub fn finbright() -> Self {
        let lessons = vec![
            Lesson::new(
                LessonId::new("budgeting"),
                "Budgeting Basics",
                "Learn how to create and stick to a budget",
                330,
                Level::Beginner,
                0,
            ),
            Lesson::new(
                LessonId::new("credit"),
                "Understanding Credit",
                "Improve your credit score and financial health",
                435,
                Level::Intermediate,
                50,
            ),
            Lesson::new(
                LessonId::new("investing"),
                "Investing 101",
                "Introduction to investment strategies",
                405,
                Level::Advanced,
                100,
            ),
        ];
        let badges = vec![
            Badge::new(BadgeId::new("budgeting"), "Budgeting Master", 50),
            Badge::new(BadgeId::new("credit"), "Credit Guru", 100),
            Badge::new(BadgeId::new("investing"), "Investment Wizard", 150),
        ];

        // The demo entries are literals with unique ids and non-empty text.
        let lessons = lessons
            .into_iter()
            .collect::<Result<Vec<_>, _>>()
            .expect("demo lessons should be valid");
        let badges = badges
            .into_iter()
            .collect::<Result<Vec<_>, _>>()
            .expect("demo badges should be valid");

        Self { lessons, badges }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn lesson(id: &str, required: u32) -> Lesson {
        Lesson::new(
            LessonId::new(id),
            format!("Lesson {id}"),
            "",
            60,
            Level::Beginner,
            required,
        )
        .unwrap()
    }

    #[test]
    fn finbright_catalog_shape() {
        let catalog = Catalog::finbright();

        let ids: Vec<&str> = catalog
            .lessons()
            .iter()
            .map(|l| l.id().as_str())
            .collect();
        assert_eq!(ids, vec!["budgeting", "credit", "investing"]);

        let thresholds: Vec<u32> = catalog
            .badges()
            .iter()
            .map(Badge::points_required)
            .collect();
        assert_eq!(thresholds, vec![50, 100, 150]);
    }

    #[test]
    fn finbright_first_lesson_requires_nothing() {
        let catalog = Catalog::finbright();
        let first = &catalog.lessons()[0];
        assert_eq!(first.points_required(), 0);
        assert_eq!(first.level(), Level::Beginner);
    }

    #[test]
    fn lookup_by_id() {
        let catalog = Catalog::finbright();
        let credit = catalog.lesson(&LessonId::new("credit")).unwrap();
        assert_eq!(credit.title(), "Understanding Credit");
        assert_eq!(credit.points_required(), 50);

        assert!(catalog.lesson(&LessonId::new("nonexistent")).is_none());

        let guru = catalog.badge(&BadgeId::new("credit")).unwrap();
        assert_eq!(guru.name(), "Credit Guru");
        assert!(catalog.badge(&BadgeId::new("nonexistent")).is_none());
    }

    #[test]
    fn duplicate_lesson_ids_are_rejected() {
        let err = Catalog::new(vec![lesson("a", 0), lesson("a", 50)], Vec::new()).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateLesson(LessonId::new("a")));
    }

    #[test]
    fn duplicate_badge_ids_are_rejected() {
        let badge = Badge::new(BadgeId::new("b"), "Badge", 10).unwrap();
        let err = Catalog::new(Vec::new(), vec![badge.clone(), badge]).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateBadge(BadgeId::new("b")));
    }
}
