//! Layout kinds
//!
//! Layout elements only arrange fields; they never hold data. All of them
//! own a child sequence through [`LayoutCommon`].

use serde::{Deserialize, Serialize};

use super::definition::{Definition, Dimension, LayoutCommon};

/// Name Pimcore reserves for the layout root
pub const ROOT_LAYOUT_NAME: &str = "pimcore_root";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PanelLayout {
    #[serde(flatten)]
    pub common: LayoutCommon,
    pub layout: Option<String>,
    pub border: bool,
    pub icon: String,
    pub label_width: u32,
    pub label_align: String,
}

impl Default for PanelLayout {
    fn default() -> Self {
        Self {
            common: LayoutCommon::default(),
            layout: None,
            border: false,
            icon: String::new(),
            label_width: 100,
            label_align: "left".to_string(),
        }
    }
}

impl PanelLayout {
    /// The `pimcore_root` panel every class layout hangs from
    pub fn root() -> Self {
        Self {
            common: LayoutCommon {
                name: ROOT_LAYOUT_NAME.to_string(),
                title: None,
                body_style: None,
                ..LayoutCommon::default()
            },
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldsetLayout {
    #[serde(flatten)]
    pub common: LayoutCommon,
    pub label_width: u32,
    pub label_align: String,
}

impl Default for FieldsetLayout {
    fn default() -> Self {
        Self {
            common: LayoutCommon::default(),
            label_width: 100,
            label_align: "left".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TabPanelLayout {
    #[serde(flatten)]
    pub common: LayoutCommon,
    pub border: bool,
    pub tab_position: String,
}

impl Default for TabPanelLayout {
    fn default() -> Self {
        Self {
            common: LayoutCommon {
                name: ROOT_LAYOUT_NAME.to_string(),
                title: None,
                body_style: None,
                ..LayoutCommon::default()
            },
            border: false,
            tab_position: "top".to_string(),
        }
    }
}

/// Static text block, optionally rendered by a server-side class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextLayout {
    #[serde(flatten)]
    pub common: LayoutCommon,
    pub html: String,
    pub rendering_class: String,
    pub rendering_data: String,
    pub border: bool,
    pub label_width: u32,
    pub label_align: String,
}

impl Default for TextLayout {
    fn default() -> Self {
        Self {
            common: LayoutCommon::default(),
            html: String::new(),
            rendering_class: String::new(),
            rendering_data: String::new(),
            border: false,
            label_width: 100,
            label_align: "left".to_string(),
        }
    }
}

impl TextLayout {
    pub fn with_html(mut self, html: impl Into<String>) -> Self {
        self.html = html.into();
        self
    }

    pub fn with_rendering_class(mut self, class: impl Into<String>) -> Self {
        self.rendering_class = class.into();
        self
    }
}

macro_rules! layout_builders {
    ($($kind:ty),* $(,)?) => {
        $(
            impl $kind {
                /// Fresh layout element with the kind's defaults, named and titled
                pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
                    let mut layout = Self::default();
                    layout.common.name = name.into();
                    layout.common.title = Some(title.into());
                    layout
                }

                pub fn with_width(mut self, width: impl Into<Dimension>) -> Self {
                    self.common.width = width.into();
                    self
                }

                pub fn with_height(mut self, height: impl Into<Dimension>) -> Self {
                    self.common.height = height.into();
                    self
                }

                pub fn with_collapsible(mut self, collapsible: bool) -> Self {
                    self.common.collapsible = collapsible;
                    self
                }

                pub fn with_children(mut self, children: Vec<Definition>) -> Self {
                    self.common.children = children;
                    self
                }

                pub fn with_child(mut self, child: impl Into<Definition>) -> Self {
                    self.common.children.push(child.into());
                    self
                }
            }
        )*
    };
}

layout_builders!(PanelLayout, FieldsetLayout, TabPanelLayout, TextLayout);
