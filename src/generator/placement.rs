//! Field placement pass
//!
//! Turns each field spec into a schema node and inserts it into the panel
//! its screen maps to. Rows that cannot be placed are skipped and recorded
//! in the [`GenerationReport`]; nothing in this pass is fatal.

use std::fmt;

use serde::Serialize;
use tracing::{debug, warn};

use super::ClassGenerator;
use super::panels::PanelMapper;
use crate::models::{
    Datatype, Definition, FieldSpec, InputField, SelectField, TextareaField, WysiwygField,
};

/// Why a row produced no field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "camelCase")]
pub enum SkipReason {
    /// The screen id maps to no panel
    UnmappedScreen(String),
    /// Container or repeatable-group row
    Structural,
    /// The bundle key yields no field name
    EmptyName,
    /// Datatype without a field kind
    UnsupportedDatatype(String),
    /// The mapped panel is missing from the layout
    ContainerNotFound(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::UnmappedScreen(screen) => write!(f, "no panel for screen '{}'", screen),
            SkipReason::Structural => write!(f, "container or repeatable row"),
            SkipReason::EmptyName => write!(f, "empty field name"),
            SkipReason::UnsupportedDatatype(datatype) => {
                write!(f, "unsupported datatype '{}'", datatype)
            }
            SkipReason::ContainerNotFound(container) => {
                write!(f, "container '{}' not found", container)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedRow {
    /// 1-based data row number
    pub row: usize,
    pub name: String,
    pub reason: SkipReason,
}

/// Outcome of one generation run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationReport {
    pub rows_seen: usize,
    pub fields_placed: usize,
    /// Technical names of the panels created for novel screens
    pub panels_created: Vec<String>,
    pub skipped: Vec<SkippedRow>,
}

impl GenerationReport {
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    /// Skipped rows that point at a real problem in the catalog
    ///
    /// Structural rows and unsupported datatypes are expected in a
    /// CollectiveAccess export and are left out.
    pub fn problems(&self) -> impl Iterator<Item = &SkippedRow> {
        self.skipped.iter().filter(|skipped| {
            !matches!(
                skipped.reason,
                SkipReason::Structural | SkipReason::UnsupportedDatatype(_)
            )
        })
    }
}

/// Schema node for a field spec, or why there is none
///
/// `Text` becomes a WYSIWYG editor or a textarea, `Numeric` an input and
/// `List` a select whose options keep the catalog order.
pub fn build_field(spec: &FieldSpec) -> Result<Definition, SkipReason> {
    if spec.is_structural() {
        return Err(SkipReason::Structural);
    }
    if spec.name.is_empty() {
        return Err(SkipReason::EmptyName);
    }

    let node = match &spec.datatype {
        Datatype::Text if spec.wysiwyg => WysiwygField::new(&spec.name, &spec.title).into(),
        Datatype::Text => TextareaField::new(&spec.name, &spec.title).into(),
        Datatype::Numeric => InputField::new(&spec.name, &spec.title).into(),
        Datatype::List => SelectField::new(&spec.name, &spec.title)
            .with_values(spec.list_values.iter().cloned())
            .into(),
        Datatype::Other(other) => return Err(SkipReason::UnsupportedDatatype(other.clone())),
    };
    Ok(node)
}

/// Place every spec into the panel its screen maps to, in input order
pub fn place_fields(
    generator: &mut ClassGenerator,
    mapper: &PanelMapper,
    specs: &[FieldSpec],
) -> GenerationReport {
    let mut report = GenerationReport {
        rows_seen: specs.len(),
        ..GenerationReport::default()
    };

    for (index, spec) in specs.iter().enumerate() {
        let row = index + 1;
        let skip = |reason: SkipReason| SkippedRow {
            row,
            name: spec.name.clone(),
            reason,
        };

        let Some(container) = mapper.resolve(&spec.screen_id) else {
            warn!(
                "No target panel for screen '{}', skipping field '{}'",
                spec.screen_id, spec.name
            );
            report
                .skipped
                .push(skip(SkipReason::UnmappedScreen(spec.screen_id.clone())));
            continue;
        };

        let node = match build_field(spec) {
            Ok(node) => node,
            Err(reason) => {
                match &reason {
                    SkipReason::EmptyName => {
                        warn!("Row {} on screen '{}' has no field name, skipping", row, spec.screen_id)
                    }
                    SkipReason::UnsupportedDatatype(datatype) => {
                        debug!(name = %spec.name, datatype = %datatype, "Ignoring unsupported datatype")
                    }
                    _ => debug!(name = %spec.name, "Skipping structural row"),
                }
                report.skipped.push(skip(reason));
                continue;
            }
        };

        if generator.add_field_to_container(container, node) {
            report.fields_placed += 1;
        } else {
            report
                .skipped
                .push(skip(SkipReason::ContainerNotFound(container.to_string())));
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PanelLayout, TabPanelLayout};
    use std::collections::BTreeMap;

    fn spec(screen: &str, name: &str, datatype: Datatype) -> FieldSpec {
        FieldSpec {
            screen_id: screen.to_string(),
            name: name.to_string(),
            title: name.to_uppercase(),
            datatype,
            ..FieldSpec::default()
        }
    }

    fn media_generator() -> (ClassGenerator, PanelMapper) {
        let mut generator = ClassGenerator::new();
        generator.add_root_field(
            TabPanelLayout::new("Scheda descrittiva", "Scheda descrittiva")
                .with_child(PanelLayout::new("Media", "MEDIA")),
        );
        let mapping: BTreeMap<String, String> =
            [("Media".to_string(), "Media".to_string())].into_iter().collect();
        let mapper = PanelMapper::for_tree(&mapping, generator.root());
        (generator, mapper)
    }

    #[test]
    fn test_build_field_dispatch() {
        let text = build_field(&spec("S", "a", Datatype::Text)).unwrap();
        assert_eq!(text.fieldtype(), "textarea");

        let mut rich = spec("S", "b", Datatype::Text);
        rich.wysiwyg = true;
        assert_eq!(build_field(&rich).unwrap().fieldtype(), "wysiwyg");

        let number = build_field(&spec("S", "c", Datatype::Numeric)).unwrap();
        assert_eq!(number.fieldtype(), "input");
        assert_eq!(number.title(), Some("C"));
    }

    #[test]
    fn test_list_options_keep_order() {
        let mut list = spec("S", "lingua", Datatype::List);
        list.list_values = vec!["it".into(), "en".into(), "de".into()];
        let value = serde_json::to_value(build_field(&list).unwrap()).unwrap();
        assert_eq!(value["fieldtype"], "select");
        assert_eq!(
            value["options"],
            serde_json::json!([
                {"key": "it", "value": "it"},
                {"key": "en", "value": "en"},
                {"key": "de", "value": "de"}
            ])
        );
    }

    #[test]
    fn test_structural_rows_never_produce_fields() {
        let mut container = spec("S", "box", Datatype::Text);
        container.is_container = true;
        assert_eq!(build_field(&container), Err(SkipReason::Structural));

        let mut repeatable = spec("S", "rep", Datatype::List);
        repeatable.is_ripetibile = true;
        assert_eq!(build_field(&repeatable), Err(SkipReason::Structural));
    }

    #[test]
    fn test_unsupported_datatype() {
        let other = spec("S", "x", Datatype::Other("DateRange".into()));
        assert_eq!(
            build_field(&other),
            Err(SkipReason::UnsupportedDatatype("DateRange".into()))
        );
    }

    #[test]
    fn test_place_fields_report() {
        let (mut generator, mapper) = media_generator();
        let mut structural = spec("Media", "group", Datatype::Text);
        structural.is_ripetibile = true;
        let specs = vec![
            spec("Media", "caption", Datatype::Text),
            spec("Unknown", "lost", Datatype::Text),
            structural,
            spec("Media", "", Datatype::Text),
            spec("Media", "weight", Datatype::Numeric),
        ];

        let report = place_fields(&mut generator, &mapper, &specs);
        assert_eq!(report.rows_seen, 5);
        assert_eq!(report.fields_placed, 2);
        assert_eq!(report.skipped_count(), 3);
        assert_eq!(report.skipped[0].row, 2);
        assert_eq!(
            report.skipped[0].reason,
            SkipReason::UnmappedScreen("Unknown".into())
        );
        assert_eq!(report.problems().count(), 2);

        let media = generator.find_container("Media").unwrap();
        let names: Vec<&str> = media.children().unwrap().iter().map(Definition::name).collect();
        assert_eq!(names, vec!["caption", "weight"]);
    }

    #[test]
    fn test_container_miss_is_reported() {
        let mut generator = ClassGenerator::new();
        let mapping: BTreeMap<String, String> =
            [("Media".to_string(), "Media".to_string())].into_iter().collect();
        // Seeded without checking the tree, so the mapping points nowhere
        let mapper = PanelMapper::new(&mapping);

        let report = place_fields(&mut generator, &mapper, &[spec("Media", "caption", Datatype::Text)]);
        assert_eq!(report.fields_placed, 0);
        assert_eq!(
            report.skipped[0].reason,
            SkipReason::ContainerNotFound("Media".into())
        );
        assert_eq!(generator.root().children().unwrap().len(), 0);
    }
}
