use serde::{Deserialize, Serialize};

use crate::domain::common::{Categorized, FilterChain, ListView, Searchable};

pub const CATEGORY_OPTIONS: &[(&str, &str)] = &[
    ("all", "All Categories"),
    ("Electronics", "Electronics"),
    ("Groceries", "Groceries"),
    ("Sports", "Sports"),
    ("Software", "Software"),
    ("Fashion", "Fashion"),
];

const PRODUCTS_EMPTY: &str = "No products found matching your criteria.";
const AFFILIATES_EMPTY: &str = "No affiliates found matching your criteria.";

/// Ranked product row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BestSellerProduct {
    pub id: String,
    pub name: String,
    pub sales: u32,
    pub revenue: u64,
    pub category: String,
    pub image_url: String,
}

impl Searchable for BestSellerProduct {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }
}

impl Categorized for BestSellerProduct {
    fn category_key(&self) -> &str {
        &self.category
    }
}

/// Ranked affiliate row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopAffiliate {
    pub id: String,
    pub name: String,
    pub sales: u32,
    pub revenue: u64,
    pub image_url: String,
}

impl Searchable for TopAffiliate {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BestSellerTab {
    #[default]
    Products,
    Affiliates,
}

impl BestSellerTab {
    pub fn as_str(&self) -> &'static str {
        match self {
            BestSellerTab::Products => "products",
            BestSellerTab::Affiliates => "affiliates",
        }
    }

    pub fn parse(s: &str) -> Self {
        if s.eq_ignore_ascii_case("affiliates") {
            BestSellerTab::Affiliates
        } else {
            BestSellerTab::Products
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BestSellerTab::Products => "Top Products",
            BestSellerTab::Affiliates => "Top Affiliates",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            BestSellerTab::Products => "Top Selling Products",
            BestSellerTab::Affiliates => "Top Performing Affiliates",
        }
    }

    pub fn description(&self) -> String {
        format!(
            "List of {} with the highest sales performance.",
            self.as_str()
        )
    }

    pub fn search_placeholder(&self) -> String {
        format!("Search {}...", self.as_str())
    }

    pub fn options() -> Vec<(String, String)> {
        [BestSellerTab::Products, BestSellerTab::Affiliates]
            .iter()
            .map(|t| (t.as_str().to_string(), t.label().to_string()))
            .collect()
    }
}

/// Filter state of the best sellers page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestSellerFilter {
    pub tab: BestSellerTab,
    pub search: String,
    pub category: String,
}

impl Default for BestSellerFilter {
    fn default() -> Self {
        Self {
            tab: BestSellerTab::Products,
            search: String::new(),
            category: "all".to_string(),
        }
    }
}

impl BestSellerFilter {
    pub fn products(&self, rows: &[BestSellerProduct]) -> ListView<BestSellerProduct> {
        let rows = FilterChain::<BestSellerProduct>::new()
            .search(&self.search)
            .category(&self.category)
            .apply(rows);
        ListView::from_rows(rows, PRODUCTS_EMPTY)
    }

    /// Category selector does not apply to affiliates
    pub fn affiliates(&self, rows: &[TopAffiliate]) -> ListView<TopAffiliate> {
        let rows = FilterChain::<TopAffiliate>::new()
            .search(&self.search)
            .apply(rows);
        ListView::from_rows(rows, AFFILIATES_EMPTY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projections::p900_best_sellers::seed::{mock_best_sellers, mock_top_affiliates};

    #[test]
    fn test_category_selector_value_matches() {
        // selector values are capitalised while stored categories match case-insensitively
        let filter = BestSellerFilter {
            category: "Electronics".into(),
            ..Default::default()
        };
        let view = filter.products(&mock_best_sellers());
        assert_eq!(view.rows().len(), 1);
        assert_eq!(view.rows()[0].id, "P001");
    }

    #[test]
    fn test_affiliates_ignore_category() {
        let filter = BestSellerFilter {
            tab: BestSellerTab::Affiliates,
            search: "j".into(),
            category: "Sports".into(),
        };
        let ids: Vec<_> = filter
            .affiliates(&mock_top_affiliates())
            .rows()
            .iter()
            .map(|a| a.id.clone())
            .collect();
        assert_eq!(ids, vec!["A001", "A002"]);
    }

    #[test]
    fn test_empty_messages() {
        let filter = BestSellerFilter {
            search: "nothing here".into(),
            ..Default::default()
        };
        assert_eq!(
            filter.products(&mock_best_sellers()).empty_message(),
            Some(PRODUCTS_EMPTY)
        );
        assert_eq!(
            filter.affiliates(&mock_top_affiliates()).empty_message(),
            Some(AFFILIATES_EMPTY)
        );
    }

    #[test]
    fn test_tab_text() {
        assert_eq!(BestSellerTab::parse("affiliates"), BestSellerTab::Affiliates);
        assert_eq!(BestSellerTab::parse("bogus"), BestSellerTab::Products);
        assert_eq!(
            BestSellerTab::Affiliates.search_placeholder(),
            "Search affiliates..."
        );
    }
}
