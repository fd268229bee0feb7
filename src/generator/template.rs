//! Built-in layout template
//!
//! The hand-authored "Scheda descrittiva" layout of an archival description
//! record. Catalog fields are placed into its panels, and screens without a
//! panel here get one appended to its tab panel.

use crate::models::{
    BlockField, ClassDefinition, DateField, Definition, FieldsetLayout, ImageGalleryField,
    InputField, LinkField, LocalizedFields, ManyToManyRelationField, PanelLayout, SelectField,
    TabPanelLayout, TextLayout, TextareaField, VideoField, WysiwygField,
};

pub const TAB_PANEL_NAME: &str = "Scheda descrittiva";
pub const SUMMARY_RENDERER: &str = r"App\PromemoriaBundle\Renderer\SummaryRenderer";

const TITLE_TYPES: [&str; 4] = ["attribuito", "non specificato", "originale", "originale/attribuito"];
const ALT_TITLE_TYPES: [&str; 4] = ["alternativo", "non specificato", "originale", "parallelo"];
const ACTIONS: [&str; 5] = ["creazione", "bozza", "revisione", "versione finale", "pubblicazione"];
const DESCRIPTION_LEVELS: [&str; 4] = ["convalidato", "definitivo", "prima redazione", "rivisto"];
const LATIN_SUFFIXES: [&str; 9] = [
    "Bis", "Ter", "Quater", "Quinquies", "Sexies", "Septies", "Octies", "Novies", "Decies",
];

/// Fresh class definition holding the built-in layout
pub fn descriptive_record() -> ClassDefinition {
    let mut class = ClassDefinition::default();
    class.layout_definitions = PanelLayout::root().with_child(descriptive_tab()).into();
    class
}

/// The "Scheda descrittiva" tab panel with its four panels
pub fn descriptive_tab() -> TabPanelLayout {
    TabPanelLayout::new(TAB_PANEL_NAME, TAB_PANEL_NAME)
        .with_child(identification_panel())
        .with_child(control_panel())
        .with_child(media_panel())
        .with_child(summary_panel())
}

fn identification_panel() -> PanelLayout {
    let alternative_titles = BlockField::new("titoli_alt_block", "Titoli alternativi")
        .with_style("margin-top:15px;margin-bottom:15px;width:950px")
        .with_child(
            TextareaField::new("titolo_alternativo", "Titolo")
                .with_height(20)
                .with_width(850),
        )
        .with_child(SelectField::new("tipologia_titolo_alt", "Tipologia titolo").with_values(ALT_TITLE_TYPES));

    let titles = LocalizedFields::default()
        .with_width(1000)
        .with_border(true)
        .with_child(InputField::new("dcType", "Livello di descrizione"))
        .with_child(TextareaField::new("dcTitle", "Titolo").with_height(100).with_width(850))
        .with_child(SelectField::new("tipologia_titolo", "Tipologia titolo").with_values(TITLE_TYPES))
        .with_child(alternative_titles);

    PanelLayout::new("Identificazione", "IDENTIFICAZIONE")
        .with_child(titles)
        .with_child(numbering("prov", "Numerazione provvisoria"))
        .with_child(numbering("def", "Numerazione definitiva"))
        .with_child(dating())
        .with_child(InputField::new("source_id", "Identificativo di origine"))
}

/// Prefix / number / suffix fieldset
fn numbering(prefix: &str, title: &str) -> FieldsetLayout {
    let suffixes = LATIN_SUFFIXES
        .iter()
        .map(|suffix| suffix.to_string())
        .chain((1..=40).map(|n| n.to_string()));

    FieldsetLayout::new(format!("{prefix}_num_container"), title)
        .with_width(1000)
        .with_child(InputField::new(format!("{prefix}_prefix"), "Prefisso").with_width(100))
        .with_child(InputField::new(format!("{prefix}_num"), "Numero"))
        .with_child(
            SelectField::new(format!("{prefix}_suffix"), "Suffisso")
                .with_width(100)
                .with_values(suffixes),
        )
}

/// Textual date, date type and note, with an optional name suffix
fn date_texts(suffix: &str) -> LocalizedFields {
    LocalizedFields::default()
        .with_child(InputField::new(format!("datetext{suffix}"), "Data (testuale)"))
        .with_child(InputField::new(format!("tipologia_data{suffix}"), "Tipologia data"))
        .with_child(TextareaField::new(format!("note_data{suffix}"), "Note alla data"))
}

fn dating() -> FieldsetLayout {
    let other_dates = BlockField::new("date_block", "Altre datazioni")
        .with_style("width:500px")
        .with_child(DateField::new("from_block", "Data (da)"))
        .with_child(DateField::new("to_block", "Data (a)"))
        .with_child(date_texts("_block"));

    FieldsetLayout::new("date", "Datazione")
        .with_width(500)
        .with_child(DateField::new("from", "Data (da)"))
        .with_child(DateField::new("to", "Data (a)"))
        .with_child(date_texts(""))
        .with_child(other_dates)
}

/// Cataloguer, official, action, date and note, with a name suffix
fn responsibility_fields(suffix: &str) -> Vec<Definition> {
    vec![
        InputField::new(format!("cataloguer{suffix}"), "Compilatore").into(),
        InputField::new(format!("funz_responsabile{suffix}"), "Funzionario responsabile").into(),
        SelectField::new(format!("action{suffix}"), "Azione")
            .with_values(ACTIONS)
            .into(),
        DateField::new(format!("responsibility_date{suffix}"), "Data").into(),
        TextareaField::new(format!("note_compilazione{suffix}"), "Note").into(),
    ]
}

fn control_panel() -> PanelLayout {
    let notes = LocalizedFields::default()
        .with_child(WysiwygField::new("notes", "Note"))
        .with_child(WysiwygField::new("archivist_notes", "Note dell'archivista"));

    let other = BlockField::new("other_responsibilities", "Altre responsabilità")
        .with_children(responsibility_fields("1"));

    let responsibilities = FieldsetLayout::new("responsibilities", "Responsabilità")
        .with_children(responsibility_fields(""))
        .with_child(other);

    PanelLayout::new("Controllo e note", "CONTROLLO E NOTE")
        .with_child(notes)
        .with_child(responsibilities)
        .with_child(
            SelectField::new("level_of_description", "Livello di catalogazione")
                .with_values(DESCRIPTION_LEVELS),
        )
}

fn media_panel() -> PanelLayout {
    let links = BlockField::new("link_esterni", "Link esterni")
        .with_style("margin:20px;width:300px")
        .with_child(LinkField::new("Link", "Link"));

    PanelLayout::new("Media", "MEDIA E COLLEGAMENTI")
        .with_child(ImageGalleryField::new("PhotoGallery", "Galleria fotografica").with_style("margin: 20px"))
        .with_child(VideoField::new("Video", "Video").with_style("margin: 20px"))
        .with_child(
            ManyToManyRelationField::new("PDF", "PDF")
                .with_style("margin:20px")
                .with_asset_types(["text", "document"]),
        )
        .with_child(
            ManyToManyRelationField::new("File_audio", "File audio")
                .with_style("margin:20px")
                .with_asset_types(["audio"]),
        )
        .with_child(
            ManyToManyRelationField::new("other_files", "Altri file")
                .with_style("margin:20px")
                .with_asset_types([
                    "unknown", "image", "archive", "audio", "document", "folder", "text", "video",
                ]),
        )
        .with_child(links)
}

fn summary_panel() -> PanelLayout {
    PanelLayout::new("Sommario", "SOMMARIO")
        .with_child(TextLayout::new("Sommario", "Sommario").with_rendering_class(SUMMARY_RENDERER))
}
