//! Data table component types.
//!
//! These types define the configuration for data tables in the admin panel.

use lendsqr_core::UserStatus;

use crate::services::SortKey;

/// Column definition for a data table.
#[derive(Debug, Clone)]
pub struct TableColumn {
    /// Unique key for the column (the sort parameter when sortable).
    pub key: String,
    /// Display label for the column header.
    pub label: String,
    /// Whether the column is sortable.
    pub sortable: bool,
}

impl TableColumn {
    /// Create a new sortable column.
    #[must_use]
    pub fn sortable(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            sortable: true,
        }
    }

    /// Create a new non-sortable column.
    #[must_use]
    pub fn new(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            sortable: false,
        }
    }
}

/// Filter type for data tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterType {
    /// Text input filter.
    Text,
    /// Single-select dropdown.
    Select,
}

/// Filter definition for a data table.
#[derive(Debug, Clone)]
pub struct TableFilter {
    /// Filter parameter key.
    pub key: String,
    /// Display label.
    pub label: String,
    /// Filter type.
    pub filter_type: FilterType,
    /// Placeholder text (for text inputs).
    pub placeholder: Option<String>,
    /// Available options (for selects).
    pub options: Vec<FilterOption>,
}

/// Option for select filters.
#[derive(Debug, Clone)]
pub struct FilterOption {
    /// Option value.
    pub value: String,
    /// Display label.
    pub label: String,
}

impl FilterOption {
    /// Create a new filter option.
    #[must_use]
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

impl TableFilter {
    /// Create a text filter.
    #[must_use]
    pub fn text(key: &str, label: &str, placeholder: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            filter_type: FilterType::Text,
            placeholder: Some(placeholder.to_string()),
            options: vec![],
        }
    }

    /// Create a select filter.
    #[must_use]
    pub fn select(key: &str, label: &str, options: Vec<FilterOption>) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            filter_type: FilterType::Select,
            placeholder: None,
            options,
        }
    }

    /// Whether this filter renders as a text input.
    #[must_use]
    pub fn is_text(&self) -> bool {
        self.filter_type == FilterType::Text
    }
}

/// Configuration for a data table.
#[derive(Debug, Clone)]
pub struct DataTableConfig {
    /// Unique table identifier.
    pub table_id: String,
    /// Column definitions.
    pub columns: Vec<TableColumn>,
    /// Filter definitions.
    pub filters: Vec<TableFilter>,
    /// Icon for empty state.
    pub empty_icon: String,
    /// Title for empty state.
    pub empty_title: String,
    /// Description for empty state.
    pub empty_description: Option<String>,
}

impl DataTableConfig {
    /// Create a new data table configuration.
    #[must_use]
    pub fn new(table_id: &str) -> Self {
        Self {
            table_id: table_id.to_string(),
            columns: vec![],
            filters: vec![],
            empty_icon: "ph-list".to_string(),
            empty_title: "No items found".to_string(),
            empty_description: None,
        }
    }

    /// Add a column.
    #[must_use]
    pub fn column(mut self, column: TableColumn) -> Self {
        self.columns.push(column);
        self
    }

    /// Add a filter.
    #[must_use]
    pub fn filter(mut self, filter: TableFilter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set empty state configuration.
    #[must_use]
    pub fn empty_state(mut self, icon: &str, title: &str, description: Option<&str>) -> Self {
        self.empty_icon = icon.to_string();
        self.empty_title = title.to_string();
        self.empty_description = description.map(ToString::to_string);
        self
    }
}

/// Build the users table configuration.
///
/// `organizations` feeds the organization dropdown.
#[must_use]
pub fn users_table_config(organizations: &[&str]) -> DataTableConfig {
    let mut config = DataTableConfig::new("users");
    for key in SortKey::ALL {
        config = config.column(TableColumn::sortable(key.as_str(), key.label()));
    }

    config
        .column(TableColumn::new("actions", ""))
        .filter(TableFilter::select(
            "organization",
            "Organization",
            organizations
                .iter()
                .map(|org| FilterOption::new(org, org))
                .collect(),
        ))
        .filter(TableFilter::select(
            "status",
            "Status",
            UserStatus::ALL
                .iter()
                .map(|s| FilterOption::new(s.as_str(), s.as_str()))
                .collect(),
        ))
        .filter(TableFilter::text("q", "Search", "Name, email or phone"))
        .empty_state(
            "ph-users",
            "No users found",
            Some("Try adjusting your search or filters"),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_users_table_columns() {
        let config = users_table_config(&["Lendsqr", "Kuda"]);
        let labels: Vec<&str> = config.columns.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Organization",
                "Username",
                "Email",
                "Phone Number",
                "Date Joined",
                "Status",
                ""
            ]
        );
        assert!(config.columns.iter().take(6).all(|c| c.sortable));
    }

    #[test]
    fn test_users_table_filters() {
        let config = users_table_config(&["Lendsqr", "Kuda"]);
        let org = config.filters.first().map(|f| f.options.len());
        assert_eq!(org, Some(2));
        let status = config.filters.iter().find(|f| f.key == "status");
        assert_eq!(status.map(|f| f.options.len()), Some(4));
        assert!(config.filters.iter().any(TableFilter::is_text));
    }
}
