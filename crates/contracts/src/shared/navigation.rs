//! Sidebar navigation tree.
//!
//! Leaves link to a route; groups only expand/collapse. Open/closed state is
//! kept per group id in [`NavState`].

use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavNode {
    pub id: &'static str,
    pub label: &'static str,
    /// Icon name understood by the frontend icon set
    pub icon: &'static str,
    /// Target route for leaves, path prefix for groups
    pub route: &'static str,
    /// Leaves: active only on an exact path match
    pub exact: bool,
    pub children: Vec<NavNode>,
}

impl NavNode {
    pub fn leaf(id: &'static str, label: &'static str, icon: &'static str, route: &'static str) -> Self {
        Self {
            id,
            label,
            icon,
            route,
            exact: false,
            children: Vec::new(),
        }
    }

    pub fn group(
        id: &'static str,
        label: &'static str,
        icon: &'static str,
        prefix: &'static str,
        children: Vec<NavNode>,
    ) -> Self {
        Self {
            id,
            label,
            icon,
            route: prefix,
            exact: false,
            children,
        }
    }

    fn exact_match(mut self) -> Self {
        self.exact = true;
        self
    }

    pub fn is_group(&self) -> bool {
        !self.children.is_empty()
    }

    /// Leaf: exact or prefix match on its route. Group: any child active.
    pub fn is_active(&self, path: &str) -> bool {
        if self.is_group() {
            return self.children.iter().any(|c| c.is_active(path));
        }
        if self.exact {
            path == self.route
        } else {
            path.starts_with(self.route)
        }
    }
}

/// Main sidebar section
pub fn main_menu() -> Vec<NavNode> {
    vec![
        NavNode::leaf("dashboard", "Dashboard", "home", "/dashboard").exact_match(),
        NavNode::leaf("earnings", "Earnings", "banknote", "/earnings"),
        NavNode::leaf("bestsellers", "Best Sellers", "star", "/bestsellers"),
        NavNode::leaf("invoices", "My Invoices", "file-text", "/invoices"),
        NavNode::leaf("affiliates", "Affiliates", "users", "/affiliates"),
        NavNode::group(
            "bank",
            "Bank Details",
            "landmark",
            "/bank",
            vec![
                NavNode::leaf("bank_new", "New Bank Details", "file-plus", "/bank/new"),
                NavNode::leaf("bank_details", "My Bank Details", "credit-card", "/bank/details"),
            ],
        ),
        NavNode::group(
            "products",
            "Products",
            "package",
            "/products",
            vec![
                NavNode::leaf("products_all", "All Products", "list-ordered", "/products/all"),
                NavNode::leaf("products_my", "My Products", "shopping-bag", "/products/my"),
            ],
        ),
        NavNode::leaf("bonuses", "Bonuses", "gift", "/bonuses"),
        NavNode::leaf("my_link", "My Affiliate Link", "link", "/my-link"),
        NavNode::leaf("training", "Training Videos", "youtube", "/training"),
    ]
}

/// Sidebar footer section
pub fn footer_menu() -> Vec<NavNode> {
    vec![NavNode::leaf("settings", "Settings", "settings", "/settings")]
}

/// Label of the leaf that owns `path`, for the top header
pub fn title_for_path(path: &str) -> Option<&'static str> {
    fn find(nodes: &[NavNode], path: &str) -> Option<&'static str> {
        nodes.iter().find_map(|n| {
            if n.is_group() {
                find(&n.children, path)
            } else if n.is_active(path) {
                Some(n.label)
            } else {
                None
            }
        })
    }
    find(&main_menu(), path).or_else(|| find(&footer_menu(), path))
}

/// Per-group open/closed state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavState {
    open: BTreeSet<&'static str>,
}

impl NavState {
    /// Groups start open when the current path lies under their prefix
    pub fn for_path(nodes: &[NavNode], path: &str) -> Self {
        let open = nodes
            .iter()
            .filter(|n| n.is_group() && path.starts_with(n.route))
            .map(|n| n.id)
            .collect();
        Self { open }
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.open.contains(id)
    }

    pub fn toggle(&mut self, id: &'static str) {
        if !self.open.remove(id) {
            self.open.insert(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_is_exact() {
        let menu = main_menu();
        let dashboard = &menu[0];
        assert!(dashboard.is_active("/dashboard"));
        assert!(!dashboard.is_active("/dashboard/extra"));
    }

    #[test]
    fn test_prefix_match_for_other_leaves() {
        let menu = main_menu();
        let invoices = menu.iter().find(|n| n.id == "invoices").unwrap();
        assert!(invoices.is_active("/invoices"));
        assert!(invoices.is_active("/invoices/INV-2024-001"));
        assert!(!invoices.is_active("/bonuses"));
    }

    #[test]
    fn test_group_active_via_child() {
        let menu = main_menu();
        let bank = menu.iter().find(|n| n.id == "bank").unwrap();
        assert!(bank.is_group());
        assert!(bank.is_active("/bank/details"));
        assert!(!bank.is_active("/products/all"));
    }

    #[test]
    fn test_groups_open_for_current_path() {
        let menu = main_menu();
        let state = NavState::for_path(&menu, "/products/my");
        assert!(state.is_open("products"));
        assert!(!state.is_open("bank"));

        let state = NavState::for_path(&menu, "/dashboard");
        assert!(!state.is_open("products"));
        assert!(!state.is_open("bank"));
    }

    #[test]
    fn test_toggle() {
        let mut state = NavState::default();
        state.toggle("bank");
        assert!(state.is_open("bank"));
        state.toggle("bank");
        assert!(!state.is_open("bank"));
    }

    #[test]
    fn test_every_route_reachable() {
        let mut routes = Vec::new();
        for node in main_menu().iter().chain(footer_menu().iter()) {
            if node.is_group() {
                routes.extend(node.children.iter().map(|c| c.route));
            } else {
                routes.push(node.route);
            }
        }
        assert_eq!(routes.len(), 13);
        assert!(routes.contains(&"/my-link"));
        assert!(routes.contains(&"/settings"));
    }

    #[test]
    fn test_title_for_path() {
        assert_eq!(title_for_path("/bank/new"), Some("New Bank Details"));
        assert_eq!(title_for_path("/settings"), Some("Settings"));
        assert_eq!(title_for_path("/nowhere"), None);
    }
}
