//! Reusable view components for the admin panel.
//!
//! - `data_table` - Column, filter and empty-state configuration for tables
//! - `navigation` - Sidebar sections and items

pub mod data_table;
pub mod navigation;

pub use data_table::{DataTableConfig, FilterOption, TableColumn, TableFilter, users_table_config};
pub use navigation::{NavItem, NavSection, find_item, section_title, sidebar};
