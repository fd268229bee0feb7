//! Class definition document
//!
//! The serializable root of a generated schema: class-level metadata plus
//! the `layoutDefinitions` tree.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::definition::Definition;
use super::layouts::PanelLayout;

/// Visibility of the built-in system columns in one listing context
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SystemColumnVisibility {
    pub id: bool,
    pub key: bool,
    pub path: bool,
    pub published: bool,
    pub modification_date: bool,
    pub creation_date: bool,
}

impl Default for SystemColumnVisibility {
    fn default() -> Self {
        Self {
            id: true,
            key: false,
            path: true,
            published: true,
            modification_date: true,
            creation_date: true,
        }
    }
}

/// Default column visibility for the grid and search contexts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyVisibility {
    pub grid: SystemColumnVisibility,
    pub search: SystemColumnVisibility,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClassDefinition {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Unix timestamp (seconds), refreshed on every emission
    pub modification_date: i64,
    pub parent_class: String,
    pub implements_interfaces: String,
    pub listing_parent_class: String,
    pub use_traits: String,
    pub listing_use_traits: String,
    pub allow_inherit: bool,
    pub allow_variants: bool,
    pub show_variants: bool,
    /// Layout root; always a panel named `pimcore_root`
    pub layout_definitions: Definition,
    pub icon: String,
    pub group: String,
    pub show_app_logger_tab: bool,
    pub link_generator_reference: String,
    pub preview_generator_reference: String,
    pub composite_indices: Vec<serde_json::Value>,
    pub show_field_lookup: bool,
    pub property_visibility: PropertyVisibility,
    pub enable_grid_locking: bool,
}

impl Default for ClassDefinition {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            description: String::new(),
            modification_date: Utc::now().timestamp(),
            parent_class: String::new(),
            implements_interfaces: String::new(),
            listing_parent_class: String::new(),
            use_traits: String::new(),
            listing_use_traits: String::new(),
            allow_inherit: false,
            allow_variants: false,
            show_variants: false,
            layout_definitions: PanelLayout::root().into(),
            icon: String::new(),
            group: String::new(),
            show_app_logger_tab: false,
            link_generator_reference: String::new(),
            preview_generator_reference: String::new(),
            composite_indices: Vec::new(),
            show_field_lookup: false,
            property_visibility: PropertyVisibility::default(),
            enable_grid_locking: false,
        }
    }
}

impl ClassDefinition {
    /// Empty class with the given id and title
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    /// Parse a class definition previously exported as JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Total number of nodes below (and including) the layout root
    pub fn node_count(&self) -> usize {
        self.layout_definitions.count_nodes()
    }
}
