//! Class generation
//!
//! [`ClassGenerator`] owns the class definition under construction. Fields
//! and panels are inserted into its layout tree by container name, and
//! [`ClassGenerator::generate`] hands out the finished document.
//!
//! - `resolver`: name-based container lookup and insertion
//! - `panels`: screen id to panel mapping
//! - `placement`: field spec to schema node dispatch and placement
//! - `template`: built-in "Scheda descrittiva" layout

pub mod panels;
pub mod placement;
pub mod resolver;
pub mod template;

use std::collections::BTreeMap;

use chrono::Utc;
use tracing::{debug, warn};

use crate::config::GeneratorConfig;
use crate::models::{ClassDefinition, Definition, FieldSpec, PanelLayout};

pub use panels::{PanelMapper, technical_name};
pub use placement::{GenerationReport, SkipReason, SkippedRow, build_field, place_fields};

/// Builder for a Pimcore class definition
#[derive(Debug, Clone, Default)]
pub struct ClassGenerator {
    definition: ClassDefinition,
}

impl ClassGenerator {
    /// Generator over an empty `pimcore_root` layout
    pub fn new() -> Self {
        Self::default()
    }

    /// Generator continuing from an existing definition
    pub fn from_definition(definition: ClassDefinition) -> Self {
        Self { definition }
    }

    /// Generator for a configuration
    ///
    /// Starts from the built-in template when the configuration asks for it,
    /// otherwise from an empty root. Class metadata comes from the
    /// configuration in both cases.
    pub fn from_config(config: &GeneratorConfig) -> Self {
        let base = if config.use_template {
            template::descriptive_record()
        } else {
            ClassDefinition::default()
        };
        Self::with_base(base, config)
    }

    /// Generator over a given base definition, with metadata from `config`
    pub fn with_base(base: ClassDefinition, config: &GeneratorConfig) -> Self {
        let mut generator = Self::from_definition(base);
        generator
            .set_class_id(&config.class_id)
            .set_title(&config.class_title)
            .set_description(&config.description)
            .set_group(&config.group)
            .set_icon(&config.icon);
        generator
    }

    pub fn set_class_id(&mut self, id: impl Into<String>) -> &mut Self {
        self.definition.id = id.into();
        self
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.definition.title = title.into();
        self
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.definition.description = description.into();
        self
    }

    pub fn set_group(&mut self, group: impl Into<String>) -> &mut Self {
        self.definition.group = group.into();
        self
    }

    pub fn set_icon(&mut self, icon: impl Into<String>) -> &mut Self {
        self.definition.icon = icon.into();
        self
    }

    /// Definition as built so far
    pub fn definition(&self) -> &ClassDefinition {
        &self.definition
    }

    /// Layout root
    pub fn root(&self) -> &Definition {
        &self.definition.layout_definitions
    }

    /// Append a node directly under the layout root
    pub fn add_root_field(&mut self, node: impl Into<Definition>) -> &mut Self {
        if let Err(node) = self.definition.layout_definitions.push_child(node.into()) {
            warn!("Layout root cannot hold children, dropping '{}'", node.name());
        }
        self
    }

    /// Insert `node` into the first container named `container`
    ///
    /// Gives the node back when no such container exists.
    pub fn try_place(&mut self, container: &str, node: Definition) -> Result<(), Definition> {
        resolver::try_place(&mut self.definition.layout_definitions, container, node)
    }

    /// Insert `node` into the first container named `container`
    ///
    /// A miss is logged and the node dropped; the tree stays unchanged.
    pub fn add_field_to_container(&mut self, container: &str, node: Definition) -> bool {
        match self.try_place(container, node) {
            Ok(()) => true,
            Err(node) => {
                warn!(
                    "Container with name '{}' not found, field '{}' not added",
                    container,
                    node.name()
                );
                false
            }
        }
    }

    /// First container named `container`
    pub fn find_container(&self, container: &str) -> Option<&Definition> {
        resolver::find_container(self.root(), container)
    }

    /// Add a panel to the first tab panel directly under the root
    ///
    /// Without such a tab panel the panel goes under the root itself.
    pub fn add_panel(&mut self, panel: PanelLayout) -> &mut Self {
        let node = Definition::from(panel);
        match self.definition.layout_definitions.children_mut() {
            Some(children) => {
                let tab = children
                    .iter()
                    .position(|child| matches!(child, Definition::TabPanel(_)));
                match tab {
                    Some(index) => {
                        if let Err(node) = children[index].push_child(node) {
                            children.push(node);
                        }
                    }
                    None => children.push(node),
                }
            }
            None => warn!("Layout root cannot hold children, dropping panel '{}'", node.name()),
        }
        self
    }

    /// Map screens to panels and place every field spec
    ///
    /// `panel_mapping` seeds the screen -> panel table; entries whose panel
    /// is missing from the current layout are ignored.
    pub fn populate(
        &mut self,
        specs: &[FieldSpec],
        panel_mapping: &BTreeMap<String, String>,
    ) -> GenerationReport {
        let mut mapper = PanelMapper::for_tree(panel_mapping, self.root());
        let panels_created = mapper.map_screens(specs, self);
        let mut report = place_fields(self, &mapper, specs);
        report.panels_created = panels_created;
        debug!(
            placed = report.fields_placed,
            skipped = report.skipped.len(),
            panels = report.panels_created.len(),
            "Generation pass finished"
        );
        report
    }

    /// Finished document stamped with the current time
    pub fn generate(&self) -> ClassDefinition {
        self.generate_at(Utc::now().timestamp())
    }

    /// Finished document stamped with `timestamp` (Unix seconds)
    pub fn generate_at(&self, timestamp: i64) -> ClassDefinition {
        let mut definition = self.definition.clone();
        definition.modification_date = timestamp;
        definition
    }

    pub fn into_definition(self) -> ClassDefinition {
        self.definition
    }
}
