use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::model::ids::LessonId;

/// Per-session record of a user's points and completed lessons.
///
/// Progress only ever grows: points never decrease and completed lessons are
/// never removed. The progression engine is the sole writer; everything the
/// presentation layer shows (locked lessons, earned badges) is derived from
/// this value rather than stored alongside it, so the views cannot drift.
///
/// There is no durable storage: a fresh `UserProgress` is created when the
/// session starts and dropped when it ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProgress {
    points: u32,
    completed: BTreeSet<LessonId>,
    started_at: DateTime<Utc>,
}

impl UserProgress {
    /// Creates fresh progress for a new session: zero points, nothing
    /// completed.
    #[must_use]
    pub fn new(started_at: DateTime<Utc>) -> Self {
        Self {
            points: 0,
            completed: BTreeSet::new(),
            started_at,
        }
    }

    /// Cumulative points earned this session.
    #[must_use]
    pub fn points(&self) -> u32 {
        self.points
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Ids of completed lessons, in stable (slug) order.
    pub fn completed_lessons(&self) -> impl Iterator<Item = &LessonId> {
        self.completed.iter()
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    /// Whether the given lesson has been completed this session.
    #[must_use]
    pub fn is_completed(&self, lesson_id: &LessonId) -> bool {
        self.completed.contains(lesson_id)
    }

    /// Records a lesson completion and its point gain.
    ///
    /// Only the engine calls this; keeping the mutation crate-private is
    /// what makes the monotonicity guarantees hold by construction.
    /// Inserting an already-completed lesson is a no-op on the set but the
    /// points are still added (repeat runs re-grant points by contract).
    pub(crate) fn record_completion(&mut self, lesson_id: LessonId, gain: u32) {
        self.points += gain;
        self.completed.insert(lesson_id);
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    #[test]
    fn fresh_progress_is_empty() {
        let progress = UserProgress::new(fixed_now());
        assert_eq!(progress.points(), 0);
        assert_eq!(progress.completed_count(), 0);
        assert_eq!(progress.started_at(), fixed_now());
    }

    #[test]
    fn record_completion_adds_points_and_lesson() {
        let mut progress = UserProgress::new(fixed_now());
        progress.record_completion(LessonId::new("budgeting"), 20);

        assert_eq!(progress.points(), 20);
        assert!(progress.is_completed(&LessonId::new("budgeting")));
        assert_eq!(progress.completed_count(), 1);
    }

    #[test]
    fn repeat_completion_regrants_points_without_duplicating_lesson() {
        let mut progress = UserProgress::new(fixed_now());
        progress.record_completion(LessonId::new("budgeting"), 20);
        progress.record_completion(LessonId::new("budgeting"), 20);

        assert_eq!(progress.points(), 40);
        assert_eq!(progress.completed_count(), 1);
    }

    #[test]
    fn completed_lessons_iterate_in_slug_order() {
        let mut progress = UserProgress::new(fixed_now());
        progress.record_completion(LessonId::new("credit"), 40);
        progress.record_completion(LessonId::new("budgeting"), 20);

        let ids: Vec<&str> = progress.completed_lessons().map(LessonId::as_str).collect();
        assert_eq!(ids, vec!["budgeting", "credit"]);
    }
}
