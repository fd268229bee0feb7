//! Models module for the SDK
//!
//! Defines the catalog row model (`FieldSpec`) and the class definition
//! tree that gets generated from it.

pub mod class_definition;
pub mod definition;
pub mod field_spec;
pub mod fields;
pub mod layouts;

pub use class_definition::{ClassDefinition, PropertyVisibility, SystemColumnVisibility};
pub use definition::{Definition, Dimension, FieldCommon, LayoutCommon, NodeCategory};
pub use field_spec::{Datatype, FieldSpec};
pub use fields::{
    AssetTypeFilter, BlockField, ClassFilter, DateField, DocumentTypeFilter, ImageGalleryField,
    InputField, LinkField, LocalizedFields, ManyToManyRelationField, SelectField, SelectOption,
    TextareaField, VideoField, WysiwygField,
};
pub use layouts::{FieldsetLayout, PanelLayout, ROOT_LAYOUT_NAME, TabPanelLayout, TextLayout};
