//! Screen-to-panel mapping
//!
//! Every catalog screen ends up in one panel. Screens listed in the static
//! table go to their hand-authored panel; any other screen gets a panel
//! named after its slug, created on first sight.

use std::collections::{BTreeMap, HashMap};

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info};

use super::{ClassGenerator, resolver};
use crate::models::{Definition, FieldSpec, PanelLayout};

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Technical panel name for a screen id: lower case, whitespace runs as `_`
pub fn technical_name(screen_id: &str) -> String {
    WHITESPACE_RUN
        .replace_all(&screen_id.to_lowercase(), "_")
        .into_owned()
}

/// Resolves screen ids to technical container names
#[derive(Debug, Clone, Default)]
pub struct PanelMapper {
    /// Screen id -> technical name
    mapping: HashMap<String, String>,
    /// Known technical names, keyed by their lower-case form
    known: BTreeMap<String, String>,
}

impl PanelMapper {
    /// Mapper seeded with a static screen -> panel table
    pub fn new(static_mapping: &BTreeMap<String, String>) -> Self {
        let mut mapper = Self::default();
        for (screen, panel) in static_mapping {
            mapper.mapping.insert(screen.clone(), panel.clone());
            mapper.remember(panel);
        }
        mapper
    }

    /// Mapper for an existing layout tree
    ///
    /// Static entries pointing at panels the tree does not contain are
    /// dropped, so their screens get a generated panel instead. Panels
    /// already in the tree count as known names.
    pub fn for_tree(static_mapping: &BTreeMap<String, String>, root: &Definition) -> Self {
        let containers = resolver::container_names(root);
        let mut mapper = Self::default();
        for (screen, panel) in static_mapping {
            if containers.contains(&panel.as_str()) {
                mapper.mapping.insert(screen.clone(), panel.clone());
                mapper.remember(panel);
            } else {
                debug!(screen = %screen, panel = %panel, "Static panel not in layout, ignoring mapping");
            }
        }
        for name in panel_names(root) {
            mapper.remember(name);
        }
        mapper
    }

    /// Technical container name for a screen id, if one is mapped
    pub fn resolve(&self, screen_id: &str) -> Option<&str> {
        self.mapping.get(screen_id).map(String::as_str)
    }

    /// Whether a technical name is already taken, ignoring case
    pub fn is_known(&self, technical: &str) -> bool {
        self.known.contains_key(&technical.to_lowercase())
    }

    /// Map every distinct screen id, creating panels for novel ones
    ///
    /// Screen ids are handled in first-seen order. Returns the names of the
    /// panels created; running it again over the same specs creates none.
    pub fn map_screens(&mut self, specs: &[FieldSpec], generator: &mut ClassGenerator) -> Vec<String> {
        let mut created = Vec::new();
        for spec in specs {
            let screen = spec.screen_id.as_str();
            if screen.is_empty() || self.mapping.contains_key(screen) {
                continue;
            }

            let slug = technical_name(screen);
            if let Some(existing) = self.known.get(&slug.to_lowercase()).cloned() {
                debug!(screen = %screen, panel = %existing, "Screen mapped to existing panel");
                self.mapping.insert(screen.to_string(), existing);
                continue;
            }

            info!("Panel '{}' not found in layout, creating '{}'", screen, slug);
            generator.add_panel(PanelLayout::new(slug.clone(), screen.to_uppercase()));
            self.remember(&slug);
            self.mapping.insert(screen.to_string(), slug.clone());
            created.push(slug);
        }
        created
    }

    fn remember(&mut self, technical: &str) {
        self.known
            .entry(technical.to_lowercase())
            .or_insert_with(|| technical.to_string());
    }
}

fn panel_names(root: &Definition) -> Vec<&str> {
    fn walk<'a>(items: &'a [Definition], names: &mut Vec<&'a str>) {
        for item in items {
            if let Definition::Panel(panel) = item {
                names.push(panel.common.name.as_str());
            }
            if let Some(children) = item.children() {
                walk(children, names);
            }
        }
    }
    let mut names = Vec::new();
    if let Some(children) = root.children() {
        walk(children, &mut names);
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_panel_mapping;
    use crate::models::{Datatype, TabPanelLayout};

    fn spec(screen: &str) -> FieldSpec {
        FieldSpec {
            screen_id: screen.to_string(),
            datatype: Datatype::Text,
            name: "x".to_string(),
            ..FieldSpec::default()
        }
    }

    fn generator_with_tab() -> ClassGenerator {
        let mut generator = ClassGenerator::new();
        generator.add_root_field(
            TabPanelLayout::new("Scheda descrittiva", "Scheda descrittiva")
                .with_child(PanelLayout::new("Identificazione", "IDENTIFICAZIONE"))
                .with_child(PanelLayout::new("Controllo e note", "CONTROLLO E NOTE"))
                .with_child(PanelLayout::new("Media", "MEDIA E COLLEGAMENTI")),
        );
        generator
    }

    fn tab_children(generator: &ClassGenerator) -> Vec<String> {
        let tab = &generator.root().children().unwrap()[0];
        tab.children()
            .unwrap()
            .iter()
            .map(|c| c.name().to_string())
            .collect()
    }

    #[test]
    fn test_technical_name() {
        assert_eq!(technical_name("Dati  tecnici"), "dati_tecnici");
        assert_eq!(technical_name("SOGGETTI\tE LUOGHI"), "soggetti_e_luoghi");
        assert_eq!(technical_name("Media"), "media");
    }

    #[test]
    fn test_static_mapping_resolves() {
        let mapper = PanelMapper::new(&default_panel_mapping());
        assert_eq!(mapper.resolve("MEDIA E COLLEGAMENTI"), Some("Media"));
        assert_eq!(mapper.resolve("Altro"), None);
    }

    #[test]
    fn test_novel_screen_creates_one_panel() {
        let mut generator = generator_with_tab();
        let mut mapper = PanelMapper::for_tree(&default_panel_mapping(), generator.root());
        let specs = vec![spec("Dati tecnici"), spec("Dati tecnici"), spec("IDENTIFICAZIONE")];

        let created = mapper.map_screens(&specs, &mut generator);
        assert_eq!(created, vec!["dati_tecnici"]);
        assert_eq!(mapper.resolve("Dati tecnici"), Some("dati_tecnici"));

        let panel = generator.find_container("dati_tecnici").unwrap();
        assert_eq!(panel.title(), Some("DATI TECNICI"));
        assert_eq!(panel.fieldtype(), "panel");
        assert_eq!(
            tab_children(&generator),
            vec!["Identificazione", "Controllo e note", "Media", "dati_tecnici"]
        );

        // Running again creates nothing
        assert!(mapper.map_screens(&specs, &mut generator).is_empty());
        assert_eq!(tab_children(&generator).len(), 4);
    }

    #[test]
    fn test_slug_matching_known_panel_reuses_it() {
        let mut generator = generator_with_tab();
        let mut mapper = PanelMapper::for_tree(&default_panel_mapping(), generator.root());

        let created = mapper.map_screens(&[spec("Media")], &mut generator);
        assert!(created.is_empty());
        assert_eq!(mapper.resolve("Media"), Some("Media"));
        assert_eq!(tab_children(&generator).len(), 3);
    }

    #[test]
    fn test_empty_screen_is_never_mapped() {
        let mut generator = generator_with_tab();
        let mut mapper = PanelMapper::for_tree(&default_panel_mapping(), generator.root());
        assert!(mapper.map_screens(&[spec("")], &mut generator).is_empty());
        assert_eq!(mapper.resolve(""), None);
    }

    #[test]
    fn test_panels_go_under_root_without_tab_panel() {
        let mut generator = ClassGenerator::new();
        let mut mapper = PanelMapper::for_tree(&default_panel_mapping(), generator.root());

        // The static targets are absent, so every screen gets its own panel
        let created = mapper.map_screens(&[spec("IDENTIFICAZIONE"), spec("Note")], &mut generator);
        assert_eq!(created, vec!["identificazione", "note"]);
        let names: Vec<&str> = generator
            .root()
            .children()
            .unwrap()
            .iter()
            .map(Definition::name)
            .collect();
        assert_eq!(names, vec!["identificazione", "note"]);
    }
}
