//! Container resolution by name
//!
//! Containers are found by a depth-first, pre-order walk starting at the
//! children of the layout root. The first container whose own name matches
//! wins; the root itself is never a target. Lookups always go by name, so
//! the tree stays free to grow between calls.

use std::collections::BTreeMap;

use crate::models::Definition;

/// Append `node` as the last child of the first container named `container`
///
/// On a miss the tree is left untouched and the node is handed back.
pub fn try_place(root: &mut Definition, container: &str, node: Definition) -> Result<(), Definition> {
    match root.children_mut() {
        Some(children) => place_in(children, container, node),
        None => Err(node),
    }
}

/// Like [`try_place`], reporting only whether the node was inserted
pub fn place(root: &mut Definition, container: &str, node: Definition) -> bool {
    try_place(root, container, node).is_ok()
}

fn place_in(items: &mut [Definition], container: &str, mut node: Definition) -> Result<(), Definition> {
    for item in items.iter_mut() {
        let matches = item.name() == container;
        if let Some(children) = item.children_mut() {
            if matches {
                children.push(node);
                return Ok(());
            }
            match place_in(children, container, node) {
                Ok(()) => return Ok(()),
                Err(returned) => node = returned,
            }
        }
    }
    Err(node)
}

/// First container named `container`, in the same order [`place`] uses
pub fn find_container<'a>(root: &'a Definition, container: &str) -> Option<&'a Definition> {
    fn walk<'a>(items: &'a [Definition], container: &str) -> Option<&'a Definition> {
        for item in items {
            if let Some(children) = item.children() {
                if item.name() == container {
                    return Some(item);
                }
                if let Some(found) = walk(children, container) {
                    return Some(found);
                }
            }
        }
        None
    }
    root.children().and_then(|children| walk(children, container))
}

/// Names of all containers below the root, in pre-order
pub fn container_names(root: &Definition) -> Vec<&str> {
    fn walk<'a>(items: &'a [Definition], names: &mut Vec<&'a str>) {
        for item in items {
            if let Some(children) = item.children() {
                names.push(item.name());
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

/// Container names used more than once, with their occurrence counts
///
/// Only the first occurrence of such a name can ever receive fields.
pub fn duplicate_container_names(root: &Definition) -> BTreeMap<String, usize> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for name in container_names(root) {
        *counts.entry(name.to_string()).or_default() += 1;
    }
    counts.retain(|_, count| *count > 1);
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        BlockField, FieldsetLayout, InputField, LocalizedFields, PanelLayout, TabPanelLayout,
        TextareaField,
    };

    fn sample_tree() -> Definition {
        let identificazione = PanelLayout::new("Identificazione", "IDENTIFICAZIONE")
            .with_child(LocalizedFields::default().with_child(InputField::new("dcType", "Tipo")))
            .with_child(
                FieldsetLayout::new("date", "Datazione")
                    .with_child(LocalizedFields::default())
                    .with_child(BlockField::new("date_block", "Altre datazioni")),
            );
        let media = PanelLayout::new("Media", "MEDIA");
        let tab = TabPanelLayout::new("Scheda descrittiva", "Scheda descrittiva")
            .with_child(identificazione)
            .with_child(media);
        PanelLayout::root().with_child(tab).into()
    }

    fn child_names<'a>(node: &'a Definition) -> Vec<&'a str> {
        node.children()
            .unwrap_or_default()
            .iter()
            .map(Definition::name)
            .collect()
    }

    #[test]
    fn test_place_appends_last_child() {
        let mut tree = sample_tree();
        assert!(place(&mut tree, "Media", InputField::new("a", "A").into()));
        assert!(place(&mut tree, "Media", InputField::new("b", "B").into()));
        let media = find_container(&tree, "Media").unwrap();
        assert_eq!(child_names(media), vec!["a", "b"]);
    }

    #[test]
    fn test_place_into_nested_container() {
        let mut tree = sample_tree();
        assert!(place(&mut tree, "date_block", InputField::new("from_block", "Da").into()));
        let block = find_container(&tree, "date_block").unwrap();
        assert_eq!(child_names(block), vec!["from_block"]);
    }

    #[test]
    fn test_first_preorder_match_wins() {
        let mut tree = sample_tree();
        let node: Definition = TextareaField::new("note", "Note").into();
        assert!(place(&mut tree, "localizedfields", node));

        // The first localizedfields sits directly in Identificazione, before
        // the one nested inside the date fieldset.
        let first = find_container(&tree, "localizedfields").unwrap();
        assert_eq!(child_names(first), vec!["dcType", "note"]);
        let date = find_container(&tree, "date").unwrap();
        let nested = &date.children().unwrap()[0];
        assert!(nested.children().unwrap().is_empty());
    }

    #[test]
    fn test_miss_leaves_tree_unchanged() {
        let mut tree = sample_tree();
        let before = tree.clone();
        for _ in 0..3 {
            let node: Definition = InputField::new("x", "X").into();
            let returned = try_place(&mut tree, "Nowhere", node.clone()).unwrap_err();
            assert_eq!(returned, node);
            assert!(!place(&mut tree, "Nowhere", node));
        }
        assert_eq!(tree, before);
    }

    #[test]
    fn test_leaves_are_never_targets() {
        let mut tree = sample_tree();
        let before = tree.clone();
        assert!(!place(&mut tree, "dcType", InputField::new("x", "X").into()));
        assert_eq!(tree, before);
    }

    #[test]
    fn test_root_is_never_a_target() {
        let mut tree: Definition = PanelLayout::root().into();
        assert!(!place(&mut tree, "pimcore_root", InputField::new("x", "X").into()));
        assert_eq!(tree.children().unwrap().len(), 0);
    }

    #[test]
    fn test_container_names_preorder() {
        let tree = sample_tree();
        assert_eq!(
            container_names(&tree),
            vec![
                "Scheda descrittiva",
                "Identificazione",
                "localizedfields",
                "date",
                "localizedfields",
                "date_block",
                "Media",
            ]
        );
    }

    #[test]
    fn test_duplicate_container_names() {
        let duplicates = duplicate_container_names(&sample_tree());
        assert_eq!(duplicates.len(), 1);
        assert_eq!(duplicates.get("localizedfields"), Some(&2));
    }
}
