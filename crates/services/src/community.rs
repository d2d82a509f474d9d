//! Static demo content: community statistics, events, lending offers, the
//! demo user profile, and help topics.
//!
//! Everything here is fixed mock data rendered verbatim by the presentation
//! layer. Amounts are plain display figures; no interest or savings math
//! happens anywhere in the app.

use chrono::NaiveDate;
use serde::Serialize;

//
// ─── TYPES ─────────────────────────────────────────────────────────────────────
//

/// Headline community statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CommunitySnapshot {
    pub referrals: u32,
    pub total_savings_usd: u32,
    pub interest_earned_usd: u32,
}

/// A scheduled community event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommunityEvent {
    pub title: String,
    pub date: NaiveDate,
    pub location: String,
    pub description: String,
}

/// A community lending offer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LendingOffer {
    pub title: String,
    pub max_amount_usd: u32,
    pub interest_rate_pct: f32,
    pub available_slots: u32,
}

/// The demo user's profile card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserProfile {
    pub name: String,
    pub financial_health_score: u32,
    pub savings_goal_usd: u32,
    pub current_savings_usd: u32,
    pub learning_streak_days: u32,
}

/// An entry on the help screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HelpTopic {
    pub title: String,
    pub description: String,
}

//
// ─── CONTENT ───────────────────────────────────────────────────────────────────
//

/// Riverwood community headline numbers.
#[must_use]
pub fn community_snapshot() -> CommunitySnapshot {
    CommunitySnapshot {
        referrals: 42,
        total_savings_usd: 487_500,
        interest_earned_usd: 3_420,
    }
}

/// Upcoming community events, soonest first.
#[must_use]
pub fn upcoming_events() -> Vec<CommunityEvent> {
    vec![
        CommunityEvent {
            title: "Entrepreneurship Workshop".to_string(),
            date: event_date(2025, 4, 15),
            location: "Community Center".to_string(),
            description: "Learn startup strategies for local businesses".to_string(),
        },
        CommunityEvent {
            title: "Financial Literacy Fest".to_string(),
            date: event_date(2025, 5, 22),
            location: "River Elara Park".to_string(),
            description: "Free workshops and community networking".to_string(),
        },
    ]
}

/// Current community lending offers.
#[must_use]
pub fn lending_offers() -> Vec<LendingOffer> {
    vec![
        LendingOffer {
            title: "Small Business Microloan".to_string(),
            max_amount_usd: 5_000,
            interest_rate_pct: 4.5,
            available_slots: 12,
        },
        LendingOffer {
            title: "Community Education Grant".to_string(),
            max_amount_usd: 2_500,
            interest_rate_pct: 3.8,
            available_slots: 8,
        },
    ]
}

/// The demo profile shown on the home screen.
#[must_use]
pub fn demo_profile() -> UserProfile {
    UserProfile {
        name: "Maria Rodriguez".to_string(),
        financial_health_score: 72,
        savings_goal_usd: 10_000,
        current_savings_usd: 3_500,
        learning_streak_days: 14,
    }
}

/// Help screen entries.
#[must_use]
pub fn help_topics() -> Vec<HelpTopic> {
    vec![
        HelpTopic {
            title: "FAQ".to_string(),
            description: "Answers to common questions".to_string(),
        },
        HelpTopic {
            title: "Contact Support".to_string(),
            description: "Get help from our team".to_string(),
        },
        HelpTopic {
            title: "Community Resources".to_string(),
            description: "Local financial support".to_string(),
        },
    ]
}

fn event_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("event dates should be valid")
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_are_listed_soonest_first() {
        let events = upcoming_events();
        assert_eq!(events.len(), 2);
        assert!(events[0].date < events[1].date);
    }

    #[test]
    fn snapshot_matches_demo_figures() {
        let snapshot = community_snapshot();
        assert_eq!(snapshot.referrals, 42);
        assert_eq!(snapshot.total_savings_usd, 487_500);
        assert_eq!(snapshot.interest_earned_usd, 3_420);
    }

    #[test]
    fn help_screen_has_three_topics() {
        assert_eq!(help_topics().len(), 3);
    }
}
