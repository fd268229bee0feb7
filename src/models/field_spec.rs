//! Field specification model
//!
//! A `FieldSpec` is one catalog row after normalization: the bundle key has
//! lost its prefix, compound keys are split, flag columns are booleans and
//! list values are a proper sequence.

use serde::{Deserialize, Serialize};

/// Data type declared by a catalog row
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Datatype {
    /// Free text, rendered as textarea or wysiwyg
    #[default]
    Text,
    /// Numeric value, rendered as a single-line input
    Numeric,
    /// Closed list of values, rendered as a select
    List,
    /// Any other declared type (kept verbatim, never rendered)
    Other(String),
}

impl Datatype {
    /// Parse the raw `Datatype` column. Matching is case-sensitive.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "Text" => Datatype::Text,
            "Numeric" => Datatype::Numeric,
            "List" => Datatype::List,
            other => Datatype::Other(other.to_string()),
        }
    }

    /// Label as it appears in the catalog
    pub fn as_str(&self) -> &str {
        match self {
            Datatype::Text => "Text",
            Datatype::Numeric => "Numeric",
            Datatype::List => "List",
            Datatype::Other(raw) => raw,
        }
    }

    /// Whether the placement pass knows how to render this type
    pub fn is_supported(&self) -> bool {
        !matches!(self, Datatype::Other(_))
    }
}

impl std::fmt::Display for Datatype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Datatype {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Datatype {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Datatype::parse(&raw))
    }
}

/// Normalized catalog row
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
    /// Logical screen the field belongs to
    pub screen_id: String,
    /// Bundle key exactly as read from the catalog
    pub bundle: String,
    pub datatype: Datatype,
    /// Local field name (prefix removed, compound key reduced)
    pub name: String,
    /// Display title, taken from the `Name` column
    pub title: String,
    pub is_container: bool,
    pub is_ripetibile: bool,
    pub wysiwyg: bool,
    /// Option values, empty unless the catalog provided some
    #[serde(default)]
    pub list_values: Vec<String>,
    /// Logical parent container, set only for compound bundle keys
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_key: Option<String>,
}

impl FieldSpec {
    /// Rows describing containers or repeatable groups are not rendered
    pub fn is_structural(&self) -> bool {
        self.is_container || self.is_ripetibile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_datatype_parse_is_case_sensitive() {
        assert_eq!(Datatype::parse("Text"), Datatype::Text);
        assert_eq!(Datatype::parse("Numeric"), Datatype::Numeric);
        assert_eq!(Datatype::parse("List"), Datatype::List);
        assert_eq!(Datatype::parse("text"), Datatype::Other("text".to_string()));
        assert!(!Datatype::parse("DateRange").is_supported());
    }

    #[test]
    fn test_datatype_serializes_as_label() {
        let json = serde_json::to_string(&Datatype::Other("Container".into())).unwrap();
        assert_eq!(json, "\"Container\"");
        let parsed: Datatype = serde_json::from_str("\"List\"").unwrap();
        assert_eq!(parsed, Datatype::List);
    }

    #[test]
    fn test_structural_rows() {
        let mut spec = FieldSpec::default();
        assert!(!spec.is_structural());
        spec.is_ripetibile = true;
        assert!(spec.is_structural());
    }
}
