use std::sync::{Mutex, PoisonError};

use finbright_core::engine::{self, StartOutcome};
use finbright_core::model::{LessonId, UserProgress};
use finbright_core::{Catalog, Clock};

use crate::error::ProgressionError;
use crate::views::{BadgeView, LessonView};

//
// ─── START REPORT ──────────────────────────────────────────────────────────────
//

/// What a `start_lesson` call produced: the outcome plus the progress
/// snapshot the presentation layer should render from now on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartReport {
    pub progress: UserProgress,
    pub outcome: StartOutcome,
}

//
// ─── SERVICE ───────────────────────────────────────────────────────────────────
//

/// Session-scoped owner of `UserProgress`.
///
/// The engine itself is value-in/value-out; this service gives one session a
/// home for the current snapshot and serializes `start_lesson`'s
/// read-modify-write behind a mutex, so concurrent callers (say, two views
/// over one session) cannot interleave updates. Reads clone the snapshot and
/// never block a writer for longer than the copy.
///
/// Progress lives only as long as the service; there is no persistence.
pub struct ProgressionService {
    catalog: Catalog,
    clock: Clock,
    progress: Mutex<UserProgress>,
}

impl ProgressionService {
    /// Creates a service over the given catalog with a fresh session.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self::with_clock(catalog, Clock::default_clock())
    }

    /// Creates a service with an explicit clock (fixed clocks keep the
    /// session timestamp deterministic in tests).
    #[must_use]
    pub fn with_clock(catalog: Catalog, clock: Clock) -> Self {
        let progress = UserProgress::new(clock.now());
        Self {
            catalog,
            clock,
            progress: Mutex::new(progress),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Snapshot of the current progress.
    #[must_use]
    pub fn current_progress(&self) -> UserProgress {
        self.lock().clone()
    }

    /// Lessons in catalog order with locked/completed flags for the current
    /// progress.
    #[must_use]
    pub fn list_lessons(&self) -> Vec<LessonView> {
        let progress = self.current_progress();
        self.catalog
            .lessons()
            .iter()
            .map(|lesson| LessonView::for_progress(lesson, &progress))
            .collect()
    }

    /// Badges in catalog order with earned flags for the current points.
    #[must_use]
    pub fn list_badges(&self) -> Vec<BadgeView> {
        let points = self.current_progress().points();
        self.catalog
            .badges()
            .iter()
            .map(|badge| BadgeView::at_points(badge, points))
            .collect()
    }

    /// Attempts to start a lesson, committing the new snapshot on success.
    ///
    /// A denial leaves the stored progress untouched; the report still
    /// carries the (unchanged) snapshot so callers can re-render from it.
    ///
    /// # Errors
    ///
    /// Returns `ProgressionError::Engine` for unknown lesson ids.
    pub fn start_lesson(&self, lesson_id: &LessonId) -> Result<StartReport, ProgressionError> {
        // Hold the lock across the whole read-modify-write: starting a
        // lesson is the one critical section in the system.
        let mut guard = self.lock();
        let (next, outcome) = engine::start_lesson(&self.catalog, &guard, lesson_id)?;
        *guard = next.clone();
        Ok(StartReport {
            progress: next,
            outcome,
        })
    }

    /// Discards the session and starts over from zero points.
    pub fn reset_session(&self) {
        *self.lock() = UserProgress::new(self.clock.now());
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, UserProgress> {
        // A poisoned lock still holds a consistent snapshot, because the
        // value is only ever replaced wholesale.
        self.progress.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
