//! Static content of the home dashboard.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeStat {
    pub title: String,
    pub value: String,
    pub icon: String,
    pub description: String,
}

/// Card linking to another page of the portal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickLink {
    pub title: String,
    pub subtitle: String,
    pub body: String,
    pub icon: String,
    pub action_label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCard {
    pub title: String,
    pub subtitle: String,
    pub body: String,
    pub image_url: String,
    pub action_label: String,
    pub href: String,
}

fn stat(title: &str, value: &str, icon: &str, description: &str) -> HomeStat {
    HomeStat {
        title: title.into(),
        value: value.into(),
        icon: icon.into(),
        description: description.into(),
    }
}

pub fn home_stats() -> Vec<HomeStat> {
    vec![
        stat("Total Affiliates", "1,234", "users", "+20.1% from last month"),
        stat("Active Affiliates", "876", "activity", "+15% this week"),
        stat("Affiliate Products", "56", "package", "Managed Products"),
    ]
}

pub fn quick_links() -> Vec<QuickLink> {
    let link = |title: &str, subtitle: &str, body: &str, icon: &str, action: &str, href: &str| QuickLink {
        title: title.into(),
        subtitle: subtitle.into(),
        body: body.into(),
        icon: icon.into(),
        action_label: action.into(),
        href: href.into(),
    };
    vec![
        link(
            "My Profile",
            "View and manage your personal information.",
            "Keep your profile details up to date for seamless communication.",
            "user",
            "Go to Profile",
            "/settings",
        ),
        link(
            "My Courses",
            "Access your enrolled training courses.",
            "Continue your learning journey and enhance your affiliate skills.",
            "book-open",
            "View Courses",
            "/training",
        ),
        link(
            "Bank Details",
            "Manage your payout information.",
            "Ensure your bank details are correct for timely earnings.",
            "landmark",
            "Manage Bank Details",
            "/bank/details",
        ),
    ]
}

pub fn category_cards() -> Vec<CategoryCard> {
    (1..=2)
        .map(|n| {
            let (title, subtitle, body) = if n == 1 {
                (
                    "1st Category Products",
                    "Explore and promote products from our primary category.",
                    "High-demand products with great commission rates. Perfect for starting strong.",
                )
            } else {
                (
                    "2nd Category Products",
                    "Discover niche products in our secondary category.",
                    "Specialized items for targeted audiences. Expand your reach.",
                )
            };
            CategoryCard {
                title: title.into(),
                subtitle: subtitle.into(),
                body: body.into(),
                image_url: "https://placehold.co/600x300.png".into(),
                action_label: format!("Explore Category {}", n),
                href: format!("/products/all?category={}", n),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_content() {
        let stats = home_stats();
        assert_eq!(stats[0].value, "1,234");
        assert_eq!(stats[1].value, "876");
        assert_eq!(stats[2].value, "56");

        let hrefs: Vec<_> = quick_links().into_iter().map(|l| l.href).collect();
        assert_eq!(hrefs, vec!["/settings", "/training", "/bank/details"]);

        let cards = category_cards();
        assert_eq!(cards[1].href, "/products/all?category=2");
        assert_eq!(cards[0].action_label, "Explore Category 1");
    }
}
