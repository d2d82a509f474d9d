use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::BadgeId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BadgeError {
    #[error("badge id cannot be empty")]
    EmptyId,

    #[error("badge name cannot be empty")]
    EmptyName,
}

//
// ─── BADGE ─────────────────────────────────────────────────────────────────────
//

/// An achievement awarded purely by cumulative points.
///
/// A badge is earned the moment the user's point total reaches
/// `points_required`; it is never tied to completing a specific lesson, and
/// once earned it stays earned because points never decrease.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    id: BadgeId,
    name: String,
    points_required: u32,
}

impl Badge {
    /// Creates a new badge.
    ///
    /// # Errors
    ///
    /// Returns `BadgeError::EmptyId` or `BadgeError::EmptyName` when the
    /// corresponding field is blank.
    pub fn new(
        id: BadgeId,
        name: impl Into<String>,
        points_required: u32,
    ) -> Result<Self, BadgeError> {
        if id.is_empty() {
            return Err(BadgeError::EmptyId);
        }
        let name = name.into();
        if name.trim().is_empty() {
            return Err(BadgeError::EmptyName);
        }

        Ok(Self {
            id,
            name,
            points_required,
        })
    }

    #[must_use]
    pub fn id(&self) -> &BadgeId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Point total at which this badge is earned.
    #[must_use]
    pub fn points_required(&self) -> u32 {
        self.points_required
    }

    /// Whether this badge is earned at the given point total.
    #[must_use]
    pub fn earned_at(&self, points: u32) -> bool {
        points >= self.points_required
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
