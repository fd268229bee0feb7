//! Layout/field definition tree
//!
//! Every node of a class layout is a [`Definition`], a closed sum type over
//! the Pimcore `fieldtype` tag. Data kinds share [`FieldCommon`], layout kinds
//! share [`LayoutCommon`]. Container-capable kinds own their children
//! directly, so the tree is strictly hierarchical.

use serde::{Deserialize, Serialize};

use super::fields::{
    BlockField, DateField, ImageGalleryField, InputField, LinkField, LocalizedFields,
    ManyToManyRelationField, SelectField, TextareaField, VideoField, WysiwygField,
};
use super::layouts::{FieldsetLayout, PanelLayout, TabPanelLayout, TextLayout};

/// Width/height hint: a pixel count or a free-text CSS value
///
/// The empty text value means "let the backend decide".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dimension {
    Pixels(u32),
    Text(String),
}

impl Dimension {
    /// The empty dimension (`""`)
    pub fn auto() -> Self {
        Dimension::Text(String::new())
    }

    pub fn is_auto(&self) -> bool {
        matches!(self, Dimension::Text(text) if text.is_empty())
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Dimension::auto()
    }
}

impl From<u32> for Dimension {
    fn from(px: u32) -> Self {
        Dimension::Pixels(px)
    }
}

impl From<&str> for Dimension {
    fn from(text: &str) -> Self {
        Dimension::Text(text.to_string())
    }
}

/// Value of the `datatype` attribute: data fields vs layout elements
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeCategory {
    #[default]
    Data,
    Layout,
}

/// Attributes shared by every data field kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldCommon {
    pub name: String,
    pub title: String,
    pub tooltip: String,
    pub mandatory: bool,
    pub noteditable: bool,
    pub index: bool,
    pub locked: bool,
    pub style: String,
    pub permissions: Option<String>,
    pub relation_type: bool,
    pub invisible: bool,
    pub visible_grid_view: bool,
    pub visible_search: bool,
    pub width: Dimension,
    pub datatype: NodeCategory,
}

impl Default for FieldCommon {
    fn default() -> Self {
        Self {
            name: String::new(),
            title: String::new(),
            tooltip: String::new(),
            mandatory: false,
            noteditable: false,
            index: false,
            locked: false,
            style: String::new(),
            permissions: None,
            relation_type: false,
            invisible: false,
            visible_grid_view: true,
            visible_search: true,
            width: Dimension::auto(),
            datatype: NodeCategory::Data,
        }
    }
}

impl FieldCommon {
    pub fn named(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    /// Same defaults, but not shown in grid and search listings
    pub(crate) fn unlisted() -> Self {
        Self {
            visible_grid_view: false,
            visible_search: false,
            ..Self::default()
        }
    }
}

/// Attributes shared by every layout kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutCommon {
    pub name: String,
    #[serde(rename = "type")]
    pub layout_type: Option<String>,
    pub region: Option<String>,
    pub title: Option<String>,
    pub width: Dimension,
    pub height: Dimension,
    pub collapsible: bool,
    pub collapsed: bool,
    pub body_style: Option<String>,
    pub datatype: NodeCategory,
    pub locked: bool,
    pub children: Vec<Definition>,
}

impl Default for LayoutCommon {
    fn default() -> Self {
        Self {
            name: String::new(),
            layout_type: None,
            region: None,
            title: Some(String::new()),
            width: Dimension::Pixels(0),
            height: Dimension::Pixels(0),
            collapsible: false,
            collapsed: false,
            body_style: Some(String::new()),
            datatype: NodeCategory::Layout,
            locked: false,
            children: Vec::new(),
        }
    }
}

/// One node of the class layout tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "fieldtype")]
pub enum Definition {
    #[serde(rename = "input")]
    Input(InputField),
    #[serde(rename = "textarea")]
    Textarea(TextareaField),
    #[serde(rename = "select")]
    Select(SelectField),
    #[serde(rename = "date")]
    Date(DateField),
    #[serde(rename = "localizedfields")]
    LocalizedFields(LocalizedFields),
    #[serde(rename = "block")]
    Block(BlockField),
    #[serde(rename = "wysiwyg")]
    Wysiwyg(WysiwygField),
    #[serde(rename = "imageGallery")]
    ImageGallery(ImageGalleryField),
    #[serde(rename = "video")]
    Video(VideoField),
    #[serde(rename = "manyToManyRelation")]
    ManyToManyRelation(ManyToManyRelationField),
    #[serde(rename = "link")]
    Link(LinkField),
    #[serde(rename = "panel")]
    Panel(PanelLayout),
    #[serde(rename = "fieldset")]
    Fieldset(FieldsetLayout),
    #[serde(rename = "tabpanel")]
    TabPanel(TabPanelLayout),
    #[serde(rename = "text")]
    Text(TextLayout),
}

macro_rules! with_node {
    ($def:expr, $node:ident => $body:expr) => {
        match $def {
            Definition::Input($node) => $body,
            Definition::Textarea($node) => $body,
            Definition::Select($node) => $body,
            Definition::Date($node) => $body,
            Definition::LocalizedFields($node) => $body,
            Definition::Block($node) => $body,
            Definition::Wysiwyg($node) => $body,
            Definition::ImageGallery($node) => $body,
            Definition::Video($node) => $body,
            Definition::ManyToManyRelation($node) => $body,
            Definition::Link($node) => $body,
            Definition::Panel($node) => $body,
            Definition::Fieldset($node) => $body,
            Definition::TabPanel($node) => $body,
            Definition::Text($node) => $body,
        }
    };
}

impl Definition {
    /// Technical name of the node
    pub fn name(&self) -> &str {
        with_node!(self, node => &node.common.name)
    }

    /// Display title (layout roots may have none)
    pub fn title(&self) -> Option<&str> {
        match self {
            Definition::Panel(node) => node.common.title.as_deref(),
            Definition::Fieldset(node) => node.common.title.as_deref(),
            Definition::TabPanel(node) => node.common.title.as_deref(),
            Definition::Text(node) => node.common.title.as_deref(),
            other => Some(other.field_title()),
        }
    }

    fn field_title(&self) -> &str {
        match self {
            Definition::Input(node) => &node.common.title,
            Definition::Textarea(node) => &node.common.title,
            Definition::Select(node) => &node.common.title,
            Definition::Date(node) => &node.common.title,
            Definition::LocalizedFields(node) => &node.common.title,
            Definition::Block(node) => &node.common.title,
            Definition::Wysiwyg(node) => &node.common.title,
            Definition::ImageGallery(node) => &node.common.title,
            Definition::Video(node) => &node.common.title,
            Definition::ManyToManyRelation(node) => &node.common.title,
            Definition::Link(node) => &node.common.title,
            Definition::Panel(_)
            | Definition::Fieldset(_)
            | Definition::TabPanel(_)
            | Definition::Text(_) => "",
        }
    }

    /// Pimcore `fieldtype` tag
    pub fn fieldtype(&self) -> &'static str {
        match self {
            Definition::Input(_) => "input",
            Definition::Textarea(_) => "textarea",
            Definition::Select(_) => "select",
            Definition::Date(_) => "date",
            Definition::LocalizedFields(_) => "localizedfields",
            Definition::Block(_) => "block",
            Definition::Wysiwyg(_) => "wysiwyg",
            Definition::ImageGallery(_) => "imageGallery",
            Definition::Video(_) => "video",
            Definition::ManyToManyRelation(_) => "manyToManyRelation",
            Definition::Link(_) => "link",
            Definition::Panel(_) => "panel",
            Definition::Fieldset(_) => "fieldset",
            Definition::TabPanel(_) => "tabpanel",
            Definition::Text(_) => "text",
        }
    }

    pub fn category(&self) -> NodeCategory {
        with_node!(self, node => node.common.datatype)
    }

    /// Children of a container-capable node, `None` for leaves
    pub fn children(&self) -> Option<&[Definition]> {
        match self {
            Definition::LocalizedFields(node) => Some(&node.children),
            Definition::Block(node) => Some(&node.children),
            Definition::Panel(node) => Some(&node.common.children),
            Definition::Fieldset(node) => Some(&node.common.children),
            Definition::TabPanel(node) => Some(&node.common.children),
            Definition::Text(node) => Some(&node.common.children),
            _ => None,
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<Definition>> {
        match self {
            Definition::LocalizedFields(node) => Some(&mut node.children),
            Definition::Block(node) => Some(&mut node.children),
            Definition::Panel(node) => Some(&mut node.common.children),
            Definition::Fieldset(node) => Some(&mut node.common.children),
            Definition::TabPanel(node) => Some(&mut node.common.children),
            Definition::Text(node) => Some(&mut node.common.children),
            _ => None,
        }
    }

    pub fn is_container(&self) -> bool {
        self.children().is_some()
    }

    /// Append a child if this node can hold one; gives the child back otherwise
    pub fn push_child(&mut self, child: Definition) -> Result<(), Definition> {
        match self.children_mut() {
            Some(children) => {
                children.push(child);
                Ok(())
            }
            None => Err(child),
        }
    }

    /// Number of nodes in this subtree, including `self`
    pub fn count_nodes(&self) -> usize {
        1 + self
            .children()
            .map(|children| children.iter().map(Definition::count_nodes).sum())
            .unwrap_or(0)
    }
}

macro_rules! impl_from_kind {
    ($($kind:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$kind> for Definition {
                fn from(node: $kind) -> Self {
                    Definition::$variant(node)
                }
            }
        )*
    };
}

impl_from_kind! {
    InputField => Input,
    TextareaField => Textarea,
    SelectField => Select,
    DateField => Date,
    LocalizedFields => LocalizedFields,
    BlockField => Block,
    WysiwygField => Wysiwyg,
    ImageGalleryField => ImageGallery,
    VideoField => Video,
    ManyToManyRelationField => ManyToManyRelation,
    LinkField => Link,
    PanelLayout => Panel,
    FieldsetLayout => Fieldset,
    TabPanelLayout => TabPanel,
    TextLayout => Text,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dimension_serialization() {
        assert_eq!(serde_json::to_value(Dimension::auto()).unwrap(), json!(""));
        assert_eq!(serde_json::to_value(Dimension::from(300)).unwrap(), json!(300));
        let parsed: Dimension = serde_json::from_value(json!(1000)).unwrap();
        assert_eq!(parsed, Dimension::Pixels(1000));
        let parsed: Dimension = serde_json::from_value(json!("50%")).unwrap();
        assert_eq!(parsed, Dimension::Text("50%".to_string()));
    }

    #[test]
    fn test_fieldtype_tag_is_emitted() {
        let def: Definition = InputField::new("dcType", "Livello di descrizione").into();
        let value = serde_json::to_value(&def).unwrap();
        assert_eq!(value["fieldtype"], "input");
        assert_eq!(value["name"], "dcType");
        assert_eq!(value["datatype"], "data");
        assert_eq!(value["visibleGridView"], true);
        assert_eq!(value["permissions"], serde_json::Value::Null);
        assert_eq!(def.fieldtype(), "input");
    }

    #[test]
    fn test_leaves_have_no_children() {
        let mut leaf: Definition = SelectField::new("action", "Azione").into();
        assert!(!leaf.is_container());
        let child: Definition = InputField::new("x", "X").into();
        let rejected = leaf.push_child(child.clone()).unwrap_err();
        assert_eq!(rejected, child);
    }

    #[test]
    fn test_push_child_appends_last() {
        let mut panel: Definition = PanelLayout::new("Media", "MEDIA").into();
        panel.push_child(InputField::new("a", "A").into()).unwrap();
        panel.push_child(InputField::new("b", "B").into()).unwrap();
        let names: Vec<&str> = panel.children().unwrap().iter().map(Definition::name).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(panel.count_nodes(), 3);
    }

    #[test]
    fn test_tree_round_trips_through_json() {
        let mut fieldset: Definition = FieldsetLayout::new("date", "Datazione").into();
        fieldset
            .push_child(DateField::new("from", "Data (da)").into())
            .unwrap();
        let mut panel: Definition = PanelLayout::new("Identificazione", "IDENTIFICAZIONE").into();
        panel.push_child(fieldset).unwrap();

        let json = serde_json::to_string(&panel).unwrap();
        let back: Definition = serde_json::from_str(&json).unwrap();
        assert_eq!(back, panel);
    }

    #[test]
    fn test_layout_title_may_be_null() {
        let tab: Definition = TabPanelLayout::default().into();
        assert_eq!(tab.title(), None);
        assert_eq!(tab.name(), "pimcore_root");
        assert_eq!(tab.category(), NodeCategory::Layout);
    }
}
