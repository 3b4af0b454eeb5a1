use serde::{Deserialize, Serialize};

use crate::domain::common::{
    distinct_categories, remove_by_id, AggregateRoot, Categorized, FilterChain, ListView,
    Searchable,
};
use crate::shared::notification::Notification;

/// Selector label that shows every category
pub const ALL_CATEGORIES: &str = "All";

// ============================================================================
// Aggregate Root
// ============================================================================

/// Product available for promotion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: f64,
    /// Display string such as "15%"
    pub commission: String,
    pub image_url: String,
    /// Personal referral link, only for products in "My Products"
    pub unique_link: Option<String>,
}

impl AggregateRoot for Product {
    fn id(&self) -> &str {
        &self.id
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "product"
    }

    fn element_name() -> &'static str {
        "Product"
    }

    fn list_name() -> &'static str {
        "All Products"
    }

    fn empty_message() -> &'static str {
        "No products found matching your criteria."
    }
}

impl Searchable for Product {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }
}

impl Categorized for Product {
    fn category_key(&self) -> &str {
        &self.category
    }
}

// ============================================================================
// Catalog filter
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductFilter {
    pub search: String,
    pub category: String,
}

impl Default for ProductFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: ALL_CATEGORIES.to_string(),
        }
    }
}

impl ProductFilter {
    pub fn apply(&self, products: &[Product]) -> ListView<Product> {
        let rows = FilterChain::<Product>::new()
            .search(&self.search)
            .category(&self.category)
            .apply(products);
        ListView::for_aggregate(rows)
    }

    /// "All" followed by the catalog's categories in first-appearance order
    pub fn categories(products: &[Product]) -> Vec<String> {
        distinct_categories(products, ALL_CATEGORIES)
    }

    /// Filter preselected by a `?category=` value: either a category name
    /// (any case) or its 1-based position in `categories`. Anything else
    /// falls back to "All".
    pub fn from_query(categories: &[String], raw: Option<&str>) -> Self {
        let category = raw
            .map(str::trim)
            .and_then(|raw| {
                categories
                    .iter()
                    .find(|c| c.eq_ignore_ascii_case(raw))
                    .or_else(|| raw.parse::<usize>().ok().and_then(|n| categories.get(n)))
            })
            .cloned()
            .unwrap_or_else(|| ALL_CATEGORIES.to_string());
        Self {
            search: String::new(),
            category,
        }
    }
}

// ============================================================================
// My Products mutations
// ============================================================================

/// Message shown when "My Products" is empty
pub const MY_PRODUCTS_EMPTY: &str = "No Products Selected";

/// Append a catalog product to "My Products". Duplicates are not checked.
pub fn add_to_my_products(my_products: &mut Vec<Product>, product: &Product) -> Notification {
    my_products.push(product.clone());
    added_to_my_products(product)
}

/// Confirmation for a catalog "Add to My Products" click
pub fn added_to_my_products(product: &Product) -> Notification {
    Notification::new("Product Added (UI Only)").with_description(format!(
        "{} has been added to 'My Products'. (Simulated)",
        product.name
    ))
}

/// Drop a product from "My Products"; `None` when the id is unknown
pub fn remove_from_my_products(my_products: &mut Vec<Product>, id: &str) -> Option<Notification> {
    let removed = remove_by_id(my_products, id)?;
    Some(
        Notification::new("Product Removed (UI Only)")
            .with_description(format!(
                "{} has been removed from 'My Products'. (Simulated)",
                removed.name
            ))
            .destructive(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_product::seed::{mock_catalog, mock_my_products};

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_categories_from_catalog() {
        assert_eq!(
            ProductFilter::categories(&mock_catalog()),
            vec![
                "All",
                "Software",
                "Lifestyle",
                "Education",
                "Electronics",
                "Food & Beverage",
                "Fashion"
            ]
        );
    }

    #[test]
    fn test_search_by_name_only() {
        let filter = ProductFilter {
            search: "coffee".into(),
            ..Default::default()
        };
        let view = filter.apply(&mock_catalog());
        assert_eq!(ids(view.rows()), vec!["PROD005"]);

        // category text is not searched
        let filter = ProductFilter {
            search: "education".into(),
            ..Default::default()
        };
        assert!(filter.apply(&mock_catalog()).rows().is_empty());
    }

    #[test]
    fn test_category_filter() {
        let filter = ProductFilter {
            category: "Fashion".into(),
            ..Default::default()
        };
        assert_eq!(ids(filter.apply(&mock_catalog()).rows()), vec!["PROD006"]);
    }

    #[test]
    fn test_empty_catalog_view() {
        let filter = ProductFilter {
            search: "e".into(),
            category: "Automotive".into(),
        };
        let view = filter.apply(&mock_catalog());
        assert_eq!(
            view.empty_message(),
            Some("No products found matching your criteria.")
        );
    }

    #[test]
    fn test_remove_product() {
        let mut mine = mock_my_products();
        assert_eq!(mine.len(), 3);
        let n = remove_from_my_products(&mut mine, "PROD003").unwrap();
        assert_eq!(mine.len(), 2);
        assert!(mine.iter().all(|p| p.id != "PROD003"));
        assert!(n.is_destructive());
        assert!(n.description.unwrap().contains("QuantumLeap Online Course"));
    }

    #[test]
    fn test_remove_unknown_product() {
        let mut mine = mock_my_products();
        assert!(remove_from_my_products(&mut mine, "PROD999").is_none());
        assert_eq!(mine.len(), 3);
    }

    #[test]
    fn test_add_appends_without_duplicate_check() {
        let catalog = mock_catalog();
        let mut mine = mock_my_products();
        add_to_my_products(&mut mine, &catalog[0]);
        assert_eq!(mine.len(), 4);
        assert_eq!(mine.iter().filter(|p| p.id == "PROD001").count(), 2);
        assert_eq!(mine.last().map(|p| p.id.as_str()), Some("PROD001"));
    }

    #[test]
    fn test_added_notification_names_product() {
        let catalog = mock_catalog();
        let n = added_to_my_products(&catalog[1]);
        assert_eq!(n.title, "Product Added (UI Only)");
        assert!(n.description.as_deref().unwrap_or_default().contains(&catalog[1].name));

        let mut mine = Vec::new();
        assert_eq!(add_to_my_products(&mut mine, &catalog[1]), n);
    }

    #[test]
    fn test_filter_from_query() {
        let categories = ProductFilter::categories(&mock_catalog());
        assert_eq!(ProductFilter::from_query(&categories, None).category, "All");
        assert_eq!(ProductFilter::from_query(&categories, Some("1")).category, "Software");
        assert_eq!(ProductFilter::from_query(&categories, Some("2")).category, "Lifestyle");
        assert_eq!(ProductFilter::from_query(&categories, Some("fashion")).category, "Fashion");
        assert_eq!(ProductFilter::from_query(&categories, Some("99")).category, "All");
        assert_eq!(ProductFilter::from_query(&categories, Some("toys")).category, "All");
    }
}
