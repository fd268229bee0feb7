//! Data field kinds
//!
//! Each kind's `Default` is the complete record Pimcore expects for a fresh
//! field of that kind. `new(name, title)` starts from those defaults; the
//! `with_*` builders replace single attributes wholesale.

use serde::{Deserialize, Serialize};

use super::definition::{Definition, Dimension, FieldCommon};

/// Entry of a select field's option list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub key: String,
    pub value: String,
}

impl SelectOption {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Option whose key and label are the same text
    pub fn same(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            key: text.clone(),
            value: text,
        }
    }
}

/// Asset type accepted by a relation field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetTypeFilter {
    #[serde(rename = "assetTypes")]
    pub asset_types: String,
}

impl AssetTypeFilter {
    pub fn new(asset_type: impl Into<String>) -> Self {
        Self {
            asset_types: asset_type.into(),
        }
    }
}

/// Document type accepted by a relation field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentTypeFilter {
    #[serde(rename = "documentTypes")]
    pub document_types: String,
}

/// Object class accepted by a relation field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassFilter {
    pub classes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InputField {
    #[serde(flatten)]
    pub common: FieldCommon,
    pub default_value: Option<String>,
    pub column_length: u32,
    pub regex: String,
    pub regex_flags: Vec<String>,
    pub unique: bool,
    pub show_char_count: bool,
    pub default_value_generator: String,
}

impl Default for InputField {
    fn default() -> Self {
        Self {
            common: FieldCommon::default(),
            default_value: None,
            column_length: 190,
            regex: String::new(),
            regex_flags: Vec::new(),
            unique: false,
            show_char_count: false,
            default_value_generator: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextareaField {
    #[serde(flatten)]
    pub common: FieldCommon,
    pub max_length: Option<u32>,
    pub show_char_count: bool,
    pub exclude_from_search_index: bool,
    pub height: Dimension,
}

impl Default for TextareaField {
    fn default() -> Self {
        Self {
            common: FieldCommon::default(),
            max_length: None,
            show_char_count: false,
            exclude_from_search_index: false,
            height: Dimension::auto(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SelectField {
    #[serde(flatten)]
    pub common: FieldCommon,
    pub options: Vec<SelectOption>,
    pub default_value: String,
    pub column_length: u32,
    pub dynamic_options: bool,
    pub default_value_generator: String,
    pub options_provider_type: Option<String>,
    pub options_provider_class: String,
    pub options_provider_data: String,
}

impl Default for SelectField {
    fn default() -> Self {
        Self {
            common: FieldCommon::default(),
            options: Vec::new(),
            default_value: String::new(),
            column_length: 190,
            dynamic_options: false,
            default_value_generator: String::new(),
            options_provider_type: None,
            options_provider_class: String::new(),
            options_provider_data: String::new(),
        }
    }
}

impl SelectField {
    pub fn with_options(mut self, options: Vec<SelectOption>) -> Self {
        self.options = options;
        self
    }

    /// Options whose keys equal their labels, in the given order
    pub fn with_values<I, S>(self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with_options(values.into_iter().map(SelectOption::same).collect())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DateField {
    #[serde(flatten)]
    pub common: FieldCommon,
    pub default_value: Option<String>,
    pub use_current_date: bool,
    pub column_type: String,
    pub default_value_generator: String,
}

impl Default for DateField {
    fn default() -> Self {
        Self {
            common: FieldCommon::default(),
            default_value: None,
            use_current_date: false,
            column_type: "bigint(20)".to_string(),
            default_value_generator: String::new(),
        }
    }
}

/// Container whose children are the language-variant attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocalizedFields {
    #[serde(flatten)]
    pub common: FieldCommon,
    pub children: Vec<Definition>,
    pub region: Option<String>,
    pub layout: Option<String>,
    pub max_tabs: Option<u32>,
    pub border: bool,
    pub provide_split_view: bool,
    pub tab_position: String,
    pub hide_labels_when_tabs_reached: Option<u32>,
    pub permission_view: Option<String>,
    pub permission_edit: Option<String>,
    pub label_width: u32,
    pub label_align: String,
    pub height: Dimension,
}

impl Default for LocalizedFields {
    fn default() -> Self {
        Self {
            common: FieldCommon::named("localizedfields", ""),
            children: Vec::new(),
            region: None,
            layout: None,
            max_tabs: None,
            border: false,
            provide_split_view: false,
            tab_position: "top".to_string(),
            hide_labels_when_tabs_reached: None,
            permission_view: None,
            permission_edit: None,
            label_width: 0,
            label_align: "left".to_string(),
            height: Dimension::auto(),
        }
    }
}

impl LocalizedFields {
    pub fn with_border(mut self, border: bool) -> Self {
        self.border = border;
        self
    }
}

/// Repeatable group of fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlockField {
    #[serde(flatten)]
    pub common: FieldCommon,
    pub lazy_loading: bool,
    pub disallow_add_remove: bool,
    pub disallow_reorder: bool,
    pub collapsible: bool,
    pub collapsed: bool,
    pub max_items: Option<u32>,
    pub style_element: String,
    pub children: Vec<Definition>,
    pub layout: Option<String>,
}

impl Default for BlockField {
    fn default() -> Self {
        Self {
            common: FieldCommon::default(),
            lazy_loading: false,
            disallow_add_remove: false,
            disallow_reorder: false,
            collapsible: false,
            collapsed: false,
            max_items: None,
            style_element: String::new(),
            children: Vec::new(),
            layout: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WysiwygField {
    #[serde(flatten)]
    pub common: FieldCommon,
    pub toolbar_config: String,
    pub exclude_from_search_index: bool,
    pub max_characters: String,
    pub height: Dimension,
}

impl Default for WysiwygField {
    fn default() -> Self {
        Self {
            common: FieldCommon::unlisted(),
            toolbar_config: String::new(),
            exclude_from_search_index: false,
            max_characters: "0".to_string(),
            height: Dimension::auto(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageGalleryField {
    #[serde(flatten)]
    pub common: FieldCommon,
    pub upload_path: String,
    pub ratio_x: Option<u32>,
    pub ratio_y: Option<u32>,
    pub predefined_data_templates: String,
    pub height: Dimension,
}

impl Default for ImageGalleryField {
    fn default() -> Self {
        Self {
            common: FieldCommon::unlisted(),
            upload_path: String::new(),
            ratio_x: None,
            ratio_y: None,
            predefined_data_templates: String::new(),
            height: Dimension::auto(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VideoField {
    #[serde(flatten)]
    pub common: FieldCommon,
    pub upload_path: String,
    pub allowed_types: Option<Vec<String>>,
    pub supported_types: Vec<String>,
    pub height: Dimension,
}

impl Default for VideoField {
    fn default() -> Self {
        Self {
            common: FieldCommon {
                width: Dimension::Pixels(300),
                ..FieldCommon::unlisted()
            },
            upload_path: String::new(),
            allowed_types: None,
            supported_types: ["asset", "youtube", "vimeo", "dailymotion"]
                .into_iter()
                .map(String::from)
                .collect(),
            height: Dimension::Pixels(300),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ManyToManyRelationField {
    #[serde(flatten)]
    pub common: FieldCommon,
    pub classes: Vec<ClassFilter>,
    pub display_mode: Option<String>,
    pub path_formatter_class: String,
    pub max_items: Option<u32>,
    pub asset_inline_download_allowed: bool,
    pub asset_upload_path: String,
    pub allow_to_clear_relation: bool,
    pub objects_allowed: bool,
    pub assets_allowed: bool,
    pub asset_types: Vec<AssetTypeFilter>,
    pub documents_allowed: bool,
    pub document_types: Vec<DocumentTypeFilter>,
    pub enable_text_selection: bool,
    pub height: Dimension,
}

impl Default for ManyToManyRelationField {
    fn default() -> Self {
        Self {
            common: FieldCommon {
                relation_type: true,
                ..FieldCommon::default()
            },
            classes: Vec::new(),
            display_mode: None,
            path_formatter_class: String::new(),
            max_items: None,
            asset_inline_download_allowed: false,
            asset_upload_path: String::new(),
            allow_to_clear_relation: true,
            objects_allowed: false,
            assets_allowed: true,
            asset_types: Vec::new(),
            documents_allowed: false,
            document_types: Vec::new(),
            enable_text_selection: false,
            height: Dimension::auto(),
        }
    }
}

impl ManyToManyRelationField {
    /// Restrict the relation to the given asset types
    pub fn with_asset_types<I, S>(mut self, asset_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.asset_types = asset_types.into_iter().map(AssetTypeFilter::new).collect();
        self
    }
}

/// External link field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LinkField {
    #[serde(flatten)]
    pub common: FieldCommon,
    pub allowed_types: Option<Vec<String>>,
    pub allowed_targets: Option<Vec<String>>,
    pub disabled_fields: Option<Vec<String>>,
}

impl Default for LinkField {
    fn default() -> Self {
        Self {
            common: FieldCommon::unlisted(),
            allowed_types: None,
            allowed_targets: None,
            disabled_fields: None,
        }
    }
}

macro_rules! field_builders {
    ($($kind:ty),* $(,)?) => {
        $(
            impl $kind {
                /// Fresh field with the kind's defaults, named and titled
                pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
                    let mut field = Self::default();
                    field.common.name = name.into();
                    field.common.title = title.into();
                    field
                }

                pub fn with_style(mut self, style: impl Into<String>) -> Self {
                    self.common.style = style.into();
                    self
                }

                pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
                    self.common.tooltip = tooltip.into();
                    self
                }

                pub fn with_width(mut self, width: impl Into<Dimension>) -> Self {
                    self.common.width = width.into();
                    self
                }

                pub fn with_mandatory(mut self, mandatory: bool) -> Self {
                    self.common.mandatory = mandatory;
                    self
                }

                pub fn with_noteditable(mut self, noteditable: bool) -> Self {
                    self.common.noteditable = noteditable;
                    self
                }

                pub fn with_invisible(mut self, invisible: bool) -> Self {
                    self.common.invisible = invisible;
                    self
                }
            }
        )*
    };
}

field_builders!(
    InputField,
    TextareaField,
    SelectField,
    DateField,
    LocalizedFields,
    BlockField,
    WysiwygField,
    ImageGalleryField,
    VideoField,
    ManyToManyRelationField,
    LinkField,
);

macro_rules! height_builder {
    ($($kind:ty),* $(,)?) => {
        $(
            impl $kind {
                pub fn with_height(mut self, height: impl Into<Dimension>) -> Self {
                    self.height = height.into();
                    self
                }
            }
        )*
    };
}

height_builder!(
    TextareaField,
    LocalizedFields,
    WysiwygField,
    ImageGalleryField,
    VideoField,
    ManyToManyRelationField,
);

macro_rules! children_builder {
    ($($kind:ty),* $(,)?) => {
        $(
            impl $kind {
                pub fn with_children(mut self, children: Vec<Definition>) -> Self {
                    self.children = children;
                    self
                }

                pub fn with_child(mut self, child: impl Into<Definition>) -> Self {
                    self.children.push(child.into());
                    self
                }
            }
        )*
    };
}

children_builder!(LocalizedFields, BlockField);
