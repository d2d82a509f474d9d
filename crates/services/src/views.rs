//! Presentation-agnostic view models over engine state.
//!
//! These carry the derived flags (`locked`, `earned`) the catalog itself
//! deliberately does not store; they are recomputed from the progress
//! snapshot on every query, so they cannot drift from the engine's state.

use serde::Serialize;

use finbright_core::engine::is_unlocked;
use finbright_core::model::{Badge, Lesson, Level, UserProgress};

/// A lesson as the presentation layer should render it for one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LessonView {
    pub id: String,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub level: Level,
    pub points_required: u32,
    pub locked: bool,
    pub completed: bool,
}

impl LessonView {
    /// Builds the view for a lesson against the given progress snapshot.
    #[must_use]
    pub fn for_progress(lesson: &Lesson, progress: &UserProgress) -> Self {
        Self {
            id: lesson.id().to_string(),
            title: lesson.title().to_string(),
            description: lesson.description().to_string(),
            duration: lesson.duration_label(),
            level: lesson.level(),
            points_required: lesson.points_required(),
            locked: !is_unlocked(lesson, progress),
            completed: progress.is_completed(lesson.id()),
        }
    }

    /// Points still missing before this lesson unlocks; 0 when unlocked.
    #[must_use]
    pub fn missing_points(&self, current_points: u32) -> u32 {
        if self.locked {
            self.points_required.saturating_sub(current_points)
        } else {
            0
        }
    }
}

/// A badge plus its earned flag for one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BadgeView {
    pub id: String,
    pub name: String,
    pub points_required: u32,
    pub earned: bool,
}

impl BadgeView {
    /// Builds the view for a badge at the given point total.
    #[must_use]
    pub fn at_points(badge: &Badge, points: u32) -> Self {
        Self {
            id: badge.id().to_string(),
            name: badge.name().to_string(),
            points_required: badge.points_required(),
            earned: badge.earned_at(points),
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use finbright_core::Catalog;
    use finbright_core::model::LessonId;
    use finbright_core::time::fixed_now;

    #[test]
    fn fresh_progress_locks_everything_but_the_first_lesson() {
        let catalog = Catalog::finbright();
        let progress = UserProgress::new(fixed_now());

        let views: Vec<LessonView> = catalog
            .lessons()
            .iter()
            .map(|lesson| LessonView::for_progress(lesson, &progress))
            .collect();

        assert!(!views[0].locked);
        assert!(views[1].locked);
        assert!(views[2].locked);
        assert!(views.iter().all(|view| !view.completed));
    }

    #[test]
    fn missing_points_counts_down_to_the_threshold() {
        let catalog = Catalog::finbright();
        let progress = UserProgress::new(fixed_now());
        let credit = catalog.lesson(&LessonId::new("credit")).unwrap();

        let view = LessonView::for_progress(credit, &progress);
        assert_eq!(view.missing_points(progress.points()), 50);
        assert_eq!(view.missing_points(30), 20);
    }

    #[test]
    fn badge_view_reflects_threshold() {
        let catalog = Catalog::finbright();
        let views: Vec<BadgeView> = catalog
            .badges()
            .iter()
            .map(|badge| BadgeView::at_points(badge, 100))
            .collect();

        assert!(views[0].earned);
        assert!(views[1].earned);
        assert!(!views[2].earned);
    }
}
