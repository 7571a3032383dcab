//! DocFX table of contents.
//!
//! One root node named after the root namespace. Every documented type hangs
//! directly off it; sub-namespaces are not nested.

use serde::Serialize;

/// The whole TOC file: a YAML sequence holding the single root node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TableOfContents(pub Vec<TocItem>);

impl TableOfContents {
    pub fn root(&self) -> Option<&TocItem> {
        self.0.first()
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct TocItem {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub uid: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<TocItem>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub status: String,
}

impl TocItem {
    /// The root node for `namespace`. It has no UID.
    pub fn root(namespace: &str) -> Self {
        TocItem {
            name: namespace.to_string(),
            ..Default::default()
        }
    }

    /// Entry for a type `uid`, named relative to `namespace`.
    ///
    /// `\Google\Cloud\Vision\Image` under `\Google\Cloud\Vision` → `\Image`
    pub fn entry(namespace: &str, uid: &str, status: &str) -> Self {
        TocItem {
            uid: uid.to_string(),
            name: uid.strip_prefix(namespace).unwrap_or(uid).to_string(),
            items: Vec::new(),
            status: status.to_string(),
        }
    }

    pub fn add_item(&mut self, item: TocItem) {
        self.items.push(item);
    }

    /// Order immediate children by UID. Grandchildren are left as they are.
    pub fn sort_items(&mut self) {
        self.items.sort_by(|a, b| a.uid.cmp(&b.uid));
    }
}
