use super::dto::{BestSellerProduct, TopAffiliate};

fn product(id: &str, name: &str, sales: u32, revenue: u64, category: &str) -> BestSellerProduct {
    BestSellerProduct {
        id: id.into(),
        name: name.into(),
        sales,
        revenue,
        category: category.into(),
        image_url: "https://placehold.co/100x100.png".into(),
    }
}

fn affiliate(id: &str, name: &str, sales: u32, revenue: u64, initials: &str) -> TopAffiliate {
    TopAffiliate {
        id: id.into(),
        name: name.into(),
        sales,
        revenue,
        image_url: format!("https://placehold.co/40x40.png?text={}", initials),
    }
}

pub fn mock_best_sellers() -> Vec<BestSellerProduct> {
    vec![
        product("P001", "Premium Smartwatch X1", 1250, 249875, "Electronics"),
        product("P002", "Organic Green Tea Blend", 980, 24500, "Groceries"),
        product("P003", "Pro Fitness Yoga Mat", 750, 29925, "Sports"),
        product("P004", "AI Content Creation Tool (Subscription)", 620, 61380, "Software"),
        product("P005", "Luxury Leather Handbag", 450, 112500, "Fashion"),
    ]
}

pub fn mock_top_affiliates() -> Vec<TopAffiliate> {
    vec![
        affiliate("A001", "John Doe", 350, 87500, "JD"),
        affiliate("A002", "Jane Smith", 280, 70000, "JS"),
        affiliate("A003", "Mike Brown", 210, 52500, "MB"),
    ]
}
