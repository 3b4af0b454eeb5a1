use serde::{Deserialize, Serialize};

use crate::domain::common::{AggregateRoot, Categorized, FilterChain, ListView, Searchable};
use crate::shared::format::initials;

// ============================================================================
// Status
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AffiliateStatus {
    Active,
    Inactive,
}

impl AffiliateStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AffiliateStatus::Active => "Active",
            AffiliateStatus::Inactive => "Inactive",
        }
    }

    /// Case-insensitive parse of a status selector value
    pub fn parse(s: &str) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|st| st.as_str().eq_ignore_ascii_case(s.trim()))
    }

    pub fn all() -> [AffiliateStatus; 2] {
        [AffiliateStatus::Active, AffiliateStatus::Inactive]
    }

    /// Badge variant used by the roster table
    pub fn badge_variant(&self) -> &'static str {
        match self {
            AffiliateStatus::Active => "success",
            AffiliateStatus::Inactive => "error",
        }
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Registered affiliate partner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Affiliate {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// ISO date "YYYY-MM-DD"
    pub join_date: String,
    pub total_sales: u32,
    pub total_revenue: f64,
    pub status: AffiliateStatus,
    pub avatar_url: String,
}

impl Affiliate {
    /// Avatar fallback, e.g. "AW"
    pub fn initials(&self) -> String {
        initials(&self.name)
    }
}

impl AggregateRoot for Affiliate {
    fn id(&self) -> &str {
        &self.id
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "affiliate"
    }

    fn element_name() -> &'static str {
        "Affiliate"
    }

    fn list_name() -> &'static str {
        "All Affiliates"
    }

    fn empty_message() -> &'static str {
        "No affiliates found matching your criteria."
    }
}

impl Searchable for Affiliate {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str()]
    }
}

impl Categorized for Affiliate {
    fn category_key(&self) -> &str {
        self.status.as_str()
    }
}

// ============================================================================
// Roster filter
// ============================================================================

/// Filter state of the roster page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffiliateFilter {
    pub search: String,
    /// "all" or a status name, any case
    pub status: String,
}

impl Default for AffiliateFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            status: "all".to_string(),
        }
    }
}

impl AffiliateFilter {
    pub fn apply(&self, affiliates: &[Affiliate]) -> ListView<Affiliate> {
        let rows = FilterChain::<Affiliate>::new()
            .search(&self.search)
            .category(&self.status)
            .apply(affiliates);
        ListView::for_aggregate(rows)
    }

    /// `(value, label)` options of the status selector
    pub fn status_options() -> Vec<(String, String)> {
        let mut options = vec![("all".to_string(), "All Statuses".to_string())];
        options.extend(
            AffiliateStatus::all()
                .iter()
                .map(|s| (s.as_str().to_string(), s.as_str().to_string())),
        );
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_affiliate::seed::mock_affiliates;

    fn ids(view: &ListView<Affiliate>) -> Vec<&str> {
        view.rows().iter().map(|a| a.id.as_str()).collect()
    }

    #[test]
    fn test_search_bob() {
        let filter = AffiliateFilter {
            search: "bob".into(),
            ..Default::default()
        };
        let view = filter.apply(&mock_affiliates());
        assert_eq!(ids(&view), vec!["AFF002"]);
    }

    #[test]
    fn test_search_matches_email() {
        let filter = AffiliateFilter {
            search: "DIANA@".into(),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&mock_affiliates())), vec!["AFF004"]);
    }

    #[test]
    fn test_status_inactive() {
        let filter = AffiliateFilter {
            status: "inactive".into(),
            ..Default::default()
        };
        let view = filter.apply(&mock_affiliates());
        assert_eq!(ids(&view), vec!["AFF004"]);
    }

    #[test]
    fn test_status_selector_value_from_options() {
        let filter = AffiliateFilter {
            status: "Active".into(),
            ..Default::default()
        };
        assert_eq!(filter.apply(&mock_affiliates()).rows().len(), 4);
    }

    #[test]
    fn test_no_match_renders_empty_state_once() {
        let filter = AffiliateFilter {
            search: "zzz".into(),
            status: "active".into(),
        };
        let view = filter.apply(&mock_affiliates());
        assert!(view.rows().is_empty());
        assert_eq!(
            view.empty_message(),
            Some("No affiliates found matching your criteria.")
        );
    }

    #[test]
    fn test_default_filter_keeps_source_order() {
        let view = AffiliateFilter::default().apply(&mock_affiliates());
        assert_eq!(
            ids(&view),
            vec!["AFF001", "AFF002", "AFF003", "AFF004", "AFF005"]
        );
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(AffiliateStatus::parse("inactive"), Some(AffiliateStatus::Inactive));
        assert_eq!(AffiliateStatus::parse(" ACTIVE "), Some(AffiliateStatus::Active));
        assert_eq!(AffiliateStatus::parse("pending"), None);
    }

    #[test]
    fn test_initials() {
        assert_eq!(mock_affiliates()[0].initials(), "AW");
    }

    #[test]
    fn test_status_options() {
        let opts = AffiliateFilter::status_options();
        assert_eq!(opts[0].0, "all");
        assert_eq!(opts.len(), 3);
    }
}
