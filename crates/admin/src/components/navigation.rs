//! Sidebar navigation.

/// One sidebar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    /// Stable identifier, also the `/sections/{id}` path segment.
    pub id: &'static str,
    pub label: &'static str,
    /// Phosphor icon class.
    pub icon: &'static str,
}

impl NavItem {
    const fn new(id: &'static str, label: &'static str, icon: &'static str) -> Self {
        Self { id, label, icon }
    }

    /// Where the item links to.
    #[must_use]
    pub fn href(&self) -> String {
        match self.id {
            "dashboard" => "/dashboard".to_string(),
            "users" => "/users".to_string(),
            id => format!("/sections/{id}"),
        }
    }

    /// The logout entry renders as a form button instead of a link.
    #[must_use]
    pub fn is_logout(&self) -> bool {
        self.id == "logout"
    }

    /// Whether this item should be highlighted for `current_path`.
    #[must_use]
    pub fn is_active(&self, current_path: &str) -> bool {
        let href = self.href();
        current_path == href || current_path.starts_with(&format!("{href}/"))
    }
}

/// A titled group of sidebar entries. Untitled groups render without a header.
#[derive(Debug, Clone, Copy)]
pub struct NavSection {
    pub title: Option<&'static str>,
    pub items: &'static [NavItem],
}

const SIDEBAR: &[NavSection] = &[
    NavSection {
        title: None,
        items: &[
            NavItem::new("switch-org", "Switch Organization", "ph-buildings"),
            NavItem::new("dashboard", "Dashboard", "ph-house"),
        ],
    },
    NavSection {
        title: Some("CUSTOMERS"),
        items: &[
            NavItem::new("users", "Users", "ph-users"),
            NavItem::new("guarantors", "Guarantors", "ph-users-three"),
            NavItem::new("loans", "Loans", "ph-money"),
            NavItem::new("decision-models", "Decision Models", "ph-handshake"),
            NavItem::new("savings", "Savings", "ph-piggy-bank"),
            NavItem::new("loan-requests", "Loan Requests", "ph-hand-coins"),
            NavItem::new("whitelist", "Whitelist", "ph-user-check"),
            NavItem::new("karma", "Karma", "ph-user-minus"),
        ],
    },
    NavSection {
        title: Some("BUSINESSES"),
        items: &[
            NavItem::new("organization", "Organization", "ph-briefcase"),
            NavItem::new("loan-products", "Loan Products", "ph-package"),
            NavItem::new("savings-products", "Savings Products", "ph-bank"),
            NavItem::new("fees-charges", "Fees and Charges", "ph-coins"),
            NavItem::new("transactions", "Transactions", "ph-arrows-left-right"),
            NavItem::new("services", "Services", "ph-gear"),
            NavItem::new("service-account", "Service Account", "ph-user-gear"),
            NavItem::new("settlements", "Settlements", "ph-receipt"),
            NavItem::new("reports", "Reports", "ph-chart-bar"),
        ],
    },
    NavSection {
        title: Some("SETTINGS"),
        items: &[
            NavItem::new("preferences", "Preferences", "ph-sliders"),
            NavItem::new("fees-pricing", "Fees and Pricing", "ph-seal-percent"),
            NavItem::new("audit-logs", "Audit Logs", "ph-clipboard-text"),
            NavItem::new("system-messages", "Systems Messages", "ph-chat-text"),
        ],
    },
    NavSection {
        title: None,
        items: &[NavItem::new("logout", "Logout", "ph-sign-out")],
    },
];

/// All sidebar sections in display order.
#[must_use]
pub const fn sidebar() -> &'static [NavSection] {
    SIDEBAR
}

/// Look up a sidebar entry by ID.
#[must_use]
pub fn find_item(id: &str) -> Option<&'static NavItem> {
    SIDEBAR
        .iter()
        .flat_map(|section| section.items.iter())
        .find(|item| item.id == id)
}

/// Heading for a placeholder section page: first letter upper-cased and the
/// first `-` replaced by a space (`loan-requests` becomes `Loan requests`).
#[must_use]
pub fn section_title(id: &str) -> String {
    let mut chars = id.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let rest: String = chars.collect();
    format!("{}{}", first.to_uppercase(), rest.replacen('-', " ", 1))
}
