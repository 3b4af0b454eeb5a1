use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::{update_by_id, AggregateRoot};
use crate::shared::notification::Notification;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BonusStatus {
    Available,
    Claimed,
    Expired,
}

impl BonusStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BonusStatus::Available => "Available",
            BonusStatus::Claimed => "Claimed",
            BonusStatus::Expired => "Expired",
        }
    }

    pub fn badge_variant(&self) -> &'static str {
        match self {
            BonusStatus::Available => "success",
            BonusStatus::Claimed => "primary",
            BonusStatus::Expired => "neutral",
        }
    }
}

/// Incentive an affiliate may claim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bonus {
    pub id: String,
    pub title: String,
    pub description: String,
    pub criteria: String,
    pub reward: String,
    pub status: BonusStatus,
    pub expiry_date: Option<String>,
    pub claim_date: Option<String>,
    pub progress: Option<String>,
}

impl Bonus {
    pub fn is_claimable(&self) -> bool {
        self.status == BonusStatus::Available
    }

    /// Marks the bonus claimed on `today`. Eligibility is not checked.
    pub fn claim(&mut self, today: NaiveDate) {
        self.status = BonusStatus::Claimed;
        self.claim_date = Some(today.format("%Y-%m-%d").to_string());
    }
}

impl AggregateRoot for Bonus {
    fn id(&self) -> &str {
        &self.id
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "bonus"
    }

    fn element_name() -> &'static str {
        "Bonus"
    }

    fn list_name() -> &'static str {
        "Bonuses"
    }

    fn empty_message() -> &'static str {
        "No Bonuses Available"
    }
}

/// Secondary line of the bonuses empty state
pub const EMPTY_HINT: &str = "Check back later for new bonus opportunities!";

/// Claim a bonus by id. Returns `None` if the id is unknown.
pub fn claim_bonus(bonuses: &mut [Bonus], id: &str, today: NaiveDate) -> Option<Notification> {
    let mut title = String::new();
    let found = update_by_id(bonuses, id, |b| {
        b.claim(today);
        title = b.title.clone();
    });
    if !found {
        return None;
    }
    Some(
        Notification::new("Bonus Claimed (UI Only)").with_description(format!(
            "You have successfully claimed the \"{}\" bonus. (Simulated)",
            title
        )),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_bonus::seed::mock_bonuses;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, 20).unwrap()
    }

    #[test]
    fn test_claim_welcome_bonus() {
        let mut bonuses = mock_bonuses();
        let n = claim_bonus(&mut bonuses, "BON001", day()).unwrap();
        let b = &bonuses[0];
        assert_eq!(b.status, BonusStatus::Claimed);
        assert_eq!(b.claim_date.as_deref(), Some("2024-07-20"));
        assert_eq!(n.title, "Bonus Claimed (UI Only)");
        assert_eq!(
            n.description.as_deref(),
            Some("You have successfully claimed the \"Welcome Bonus\" bonus. (Simulated)")
        );
        // others untouched
        assert_eq!(bonuses[3].status, BonusStatus::Available);
        assert_eq!(bonuses[1].claim_date.as_deref(), Some("2024-07-05"));
    }

    #[test]
    fn test_claim_unknown() {
        let mut bonuses = mock_bonuses();
        assert!(claim_bonus(&mut bonuses, "BON999", day()).is_none());
        assert_eq!(bonuses, mock_bonuses());
    }

    #[test]
    fn test_only_available_is_claimable() {
        let bonuses = mock_bonuses();
        let claimable: Vec<_> = bonuses
            .iter()
            .filter(|b| b.is_claimable())
            .map(|b| b.id.as_str())
            .collect();
        assert_eq!(claimable, vec!["BON001", "BON004"]);
    }
}
