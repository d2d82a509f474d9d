//! The progression engine: the sole arbiter of lesson unlocking, point
//! gains, and badge awards.
//!
//! `start_lesson` is value-in/value-out: it takes a progress snapshot and
//! returns the next one instead of mutating shared state, so whoever owns
//! the session (a service, a UI context) decides where the value lives.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::badges;
use crate::catalog::Catalog;
use crate::model::{Badge, Lesson, LessonId, UserProgress};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Errors from the progression engine.
///
/// These indicate integration or catalog defects, not user mistakes; a user
/// trying a locked lesson is the `StartOutcome::Denied` outcome instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EngineError {
    #[error("unknown lesson id: {0}")]
    UnknownLesson(LessonId),
}

//
// ─── OUTCOME ───────────────────────────────────────────────────────────────────
//

/// Result of attempting to start a lesson.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StartOutcome {
    /// The lesson ran: points were granted and any badge whose threshold the
    /// new total crossed is listed, in catalog order.
    Granted {
        points_gained: u32,
        newly_earned: Vec<Badge>,
    },
    /// The lesson is still locked; no state changed. The presentation layer
    /// turns `points_required` into a "need N points" message.
    Denied { points_required: u32 },
}

impl StartOutcome {
    #[must_use]
    pub fn is_granted(&self) -> bool {
        matches!(self, StartOutcome::Granted { .. })
    }
}

//
// ─── ENGINE ────────────────────────────────────────────────────────────────────
//

/// Whether a lesson is accessible for the given progress.
///
/// A lesson is unlocked once the point requirement is met, or forever after
/// it has been completed — completing a lesson can never re-lock it, even if
/// a later catalog revision raises its threshold.
#[must_use]
pub fn is_unlocked(lesson: &Lesson, progress: &UserProgress) -> bool {
    progress.is_completed(lesson.id()) || progress.points() >= lesson.points_required()
}

/// Attempts to start (and complete) a lesson.
///
/// On success the returned progress has the lesson's points added and the
/// lesson recorded as completed; `newly_earned` holds the badges whose
/// thresholds the gain crossed, computed against the pre-transaction total.
/// Re-running an already-completed lesson is allowed and grants its points
/// again; this mirrors the shipped behavior and is part of the contract.
///
/// On denial the input progress is returned unchanged.
///
/// # Errors
///
/// Returns `EngineError::UnknownLesson` if the id is not in the catalog.
pub fn start_lesson(
    catalog: &Catalog,
    progress: &UserProgress,
    lesson_id: &LessonId,
) -> Result<(UserProgress, StartOutcome), EngineError> {
    let lesson = catalog
        .lesson(lesson_id)
        .ok_or_else(|| EngineError::UnknownLesson(lesson_id.clone()))?;

    if !is_unlocked(lesson, progress) {
        return Ok((
            progress.clone(),
            StartOutcome::Denied {
                points_required: lesson.points_required(),
            },
        ));
    }

    let gain = lesson.points_awarded();
    let points_before = progress.points();

    let mut next = progress.clone();
    next.record_completion(lesson.id().clone(), gain);

    let newly_earned = badges::newly_earned(catalog, points_before, next.points());

    Ok((
        next,
        StartOutcome::Granted {
            points_gained: gain,
            newly_earned,
        },
    ))
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
