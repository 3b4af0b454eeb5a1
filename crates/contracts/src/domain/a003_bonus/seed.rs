use super::aggregate::{Bonus, BonusStatus};

pub fn mock_bonuses() -> Vec<Bonus> {
    vec![
        Bonus {
            id: "BON001".into(),
            title: "Welcome Bonus".into(),
            description: "Achieve $100 in sales in your first month.".into(),
            criteria: "$100 Sales in 30 days".into(),
            reward: "$25 Cash Bonus".into(),
            status: BonusStatus::Available,
            expiry_date: Some("2024-08-31".into()),
            claim_date: None,
            progress: None,
        },
        Bonus {
            id: "BON002".into(),
            title: "Top Performer Q3".into(),
            description: "Be in the top 10% of affiliates by revenue in Q3.".into(),
            criteria: "Top 10% Revenue Q3".into(),
            reward: "Luxury Gift Set".into(),
            status: BonusStatus::Claimed,
            expiry_date: None,
            claim_date: Some("2024-07-05".into()),
            progress: None,
        },
        Bonus {
            id: "BON003".into(),
            title: "Early Bird Special".into(),
            description: "Promote new product X within first week of launch.".into(),
            criteria: "Promote Product X (Launch Week)".into(),
            reward: "Extra 5% Commission on Product X".into(),
            status: BonusStatus::Expired,
            expiry_date: Some("2024-06-15".into()),
            claim_date: None,
            progress: None,
        },
        Bonus {
            id: "BON004".into(),
            title: "Consistency King".into(),
            description: "Make at least 1 sale every week for 4 consecutive weeks.".into(),
            criteria: "1 Sale/Week for 4 Weeks".into(),
            reward: "$50 Bonus Credit".into(),
            status: BonusStatus::Available,
            expiry_date: None,
            claim_date: None,
            progress: Some("2/4 Weeks".into()),
        },
    ]
}
