use super::aggregate::Product;

const PRODUCT_IMAGE: &str = "https://placehold.co/300x200.png";
const LINK_BASE: &str = "https://promillion.example/link";
const LINK_OWNER: &str = "john_doe";

fn product(id: &str, name: &str, category: &str, price: f64, commission: &str) -> Product {
    Product {
        id: id.into(),
        name: name.into(),
        category: category.into(),
        price,
        commission: commission.into(),
        image_url: PRODUCT_IMAGE.into(),
        unique_link: None,
    }
}

fn with_link(mut p: Product, slug: &str) -> Product {
    p.unique_link = Some(format!("{}/{}/{}", LINK_BASE, slug, LINK_OWNER));
    p
}

/// Full product catalog
pub fn mock_catalog() -> Vec<Product> {
    vec![
        product("PROD001", "ProSmart AI Assistant", "Software", 49.99, "15%"),
        product("PROD002", "EcoLife Water Bottle", "Lifestyle", 24.50, "10%"),
        product("PROD003", "QuantumLeap Online Course", "Education", 199.00, "20%"),
        product("PROD004", "FitMax Fitness Tracker", "Electronics", 89.90, "12%"),
        product("PROD005", "Gourmet Coffee Beans", "Food & Beverage", 18.75, "8%"),
        product("PROD006", "Artisan Leather Wallet", "Fashion", 75.00, "18%"),
    ]
}

/// Products the current affiliate already promotes
pub fn mock_my_products() -> Vec<Product> {
    vec![
        with_link(
            product("PROD001", "ProSmart AI Assistant", "Software", 49.99, "15%"),
            "ai-assistant",
        ),
        with_link(
            product("PROD003", "QuantumLeap Online Course", "Education", 199.00, "20%"),
            "q-course",
        ),
        with_link(
            product("PROD006", "Artisan Leather Wallet", "Fashion", 75.00, "18%"),
            "leather-wallet",
        ),
    ]
}
