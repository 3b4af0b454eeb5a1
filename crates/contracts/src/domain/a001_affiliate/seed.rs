use super::aggregate::{Affiliate, AffiliateStatus};

#[allow(clippy::too_many_arguments)]
fn affiliate(
    id: &str,
    name: &str,
    email: &str,
    phone: &str,
    join_date: &str,
    total_sales: u32,
    total_revenue: f64,
    status: AffiliateStatus,
    initials: &str,
) -> Affiliate {
    Affiliate {
        id: id.into(),
        name: name.into(),
        email: email.into(),
        phone: phone.into(),
        join_date: join_date.into(),
        total_sales,
        total_revenue,
        status,
        avatar_url: format!("https://placehold.co/40x40.png?text={}", initials),
    }
}

/// Roster shown on the affiliates page
pub fn mock_affiliates() -> Vec<Affiliate> {
    use AffiliateStatus::*;
    vec![
        affiliate("AFF001", "Alice Wonderland", "alice@example.com", "555-1234", "2023-01-15", 152, 35600.50, Active, "AW"),
        affiliate("AFF002", "Bob The Builder", "bob@example.com", "555-5678", "2023-03-22", 89, 19850.00, Active, "BB"),
        affiliate("AFF003", "Charlie Chaplin", "charlie@example.com", "555-9012", "2023-05-10", 205, 47800.75, Active, "CC"),
        affiliate("AFF004", "Diana Prince", "diana@example.com", "555-3456", "2023-02-01", 45, 9500.20, Inactive, "DP"),
        affiliate("AFF005", "Edward Scissorhands", "edward@example.com", "555-7890", "2023-06-30", 112, 25000.00, Active, "ES"),
    ]
}
