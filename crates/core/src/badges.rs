//! Badge evaluation: which badges a point total has earned.
//!
//! Badges are awarded purely on cumulative points; completing a particular
//! lesson never factors in. Both functions are pure, so the engine and the
//! presentation layer can call them freely without drift — as long as the
//! caller passes the same point totals the engine used for the transition.

use crate::catalog::Catalog;
use crate::model::Badge;

/// Badges earned at the given point total, in catalog order.
#[must_use]
pub fn earned_badges(catalog: &Catalog, points: u32) -> Vec<&Badge> {
    catalog
        .badges()
        .iter()
        .filter(|badge| badge.earned_at(points))
        .collect()
}

/// Badges whose threshold was crossed going from `points_before` to
/// `points_after`, in catalog order.
///
/// `points_before` must be the pre-transaction total the engine started
/// from; comparing against a re-fetched value would miss or repeat awards.
#[must_use]
pub fn newly_earned(catalog: &Catalog, points_before: u32, points_after: u32) -> Vec<Badge> {
    catalog
        .badges()
        .iter()
        .filter(|badge| badge.earned_at(points_after) && !badge.earned_at(points_before))
        .cloned()
        .collect()
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn badge_names<'a>(badges: &'a [&'a Badge]) -> Vec<&'a str> {
        badges.iter().map(|b| b.name()).collect()
    }

    #[test]
    fn nothing_earned_at_zero() {
        let catalog = Catalog::finbright();
        assert!(earned_badges(&catalog, 0).is_empty());
        assert!(earned_badges(&catalog, 49).is_empty());
    }

    #[test]
    fn thresholds_are_inclusive() {
        let catalog = Catalog::finbright();
        assert_eq!(
            badge_names(&earned_badges(&catalog, 50)),
            vec!["Budgeting Master"]
        );
        assert_eq!(
            badge_names(&earned_badges(&catalog, 100)),
            vec!["Budgeting Master", "Credit Guru"]
        );
        assert_eq!(
            badge_names(&earned_badges(&catalog, 150)),
            vec!["Budgeting Master", "Credit Guru", "Investment Wizard"]
        );
    }

    #[test]
    fn earned_set_is_monotonic_in_points() {
        let catalog = Catalog::finbright();
        let mut previous = 0;
        for points in [0, 20, 49, 50, 60, 99, 100, 149, 150, 500] {
            let earned = earned_badges(&catalog, points).len();
            assert!(earned >= previous, "earned set shrank at {points} points");
            previous = earned;
        }
    }

    #[test]
    fn newly_earned_only_reports_crossed_thresholds() {
        let catalog = Catalog::finbright();

        let crossed = newly_earned(&catalog, 60, 100);
        let names: Vec<&str> = crossed.iter().map(Badge::name).collect();
        assert_eq!(names, vec!["Credit Guru"]);

        assert!(newly_earned(&catalog, 50, 60).is_empty());
        assert!(newly_earned(&catalog, 100, 100).is_empty());
    }

    #[test]
    fn newly_earned_can_cross_several_thresholds_at_once() {
        let catalog = Catalog::finbright();
        let crossed = newly_earned(&catalog, 40, 160);
        let names: Vec<&str> = crossed.iter().map(Badge::name).collect();
        assert_eq!(
            names,
            vec!["Budgeting Master", "Credit Guru", "Investment Wizard"]
        );
    }
}
