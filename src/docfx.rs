//! Output model — DocFX UniversalReference pages.
//!
//! Field order and names follow the DocFX schema; empty values are omitted
//! from the YAML.

use serde::Serialize;

/// Languages every item is declared in.
pub const LANGS: &[&str] = &["php"];

/// One reference page. There is one page per class, interface or trait.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct Page {
    pub items: Vec<Item>,
}

impl Page {
    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }
}

/// `type` discriminator of an [`Item`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Class,
    Interface,
    Trait,
    Method,
    Constant,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct Syntax {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub content: String,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct Property {
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub type_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct Parameter {
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub type_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
}

/// A documentable unit: a type or one of its own members.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub uid: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub summary: String,
    /// Owning type's UID; empty for type-level items
    #[serde(skip_serializing_if = "String::is_empty")]
    pub parent: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub langs: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub syntax: Option<Syntax>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub status: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub implements: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub inherited_members: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<Property>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
}

impl Item {
    /// An item with only the identifying fields filled in.
    pub fn new(uid: &str, name: &str, item_type: ItemType) -> Self {
        Item {
            uid: uid.to_string(),
            name: name.to_string(),
            id: name.to_string(),
            summary: String::new(),
            parent: String::new(),
            item_type,
            langs: LANGS.iter().map(|l| l.to_string()).collect(),
            syntax: None,
            children: Vec::new(),
            status: String::new(),
            implements: Vec::new(),
            inherited_members: Vec::new(),
            properties: Vec::new(),
            parameters: Vec::new(),
        }
    }

    pub fn add_child(&mut self, uid: &str) {
        self.children.push(uid.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fields_are_omitted() {
        let item = Item::new("\\NS\\Foo", "Foo", ItemType::Class);
        let yaml = serde_yaml::to_string(&item).unwrap();
        assert!(yaml.contains("type: class"));
        assert!(yaml.contains("- php"));
        for absent in ["summary", "parent", "syntax", "children", "status", "inheritedMembers"] {
            assert!(!yaml.contains(absent), "{} should be omitted:\n{}", absent, yaml);
        }
    }

    #[test]
    fn inherited_members_key_is_camel_case() {
        let mut item = Item::new("\\NS\\Foo", "Foo", ItemType::Trait);
        item.inherited_members.push("\\NS\\Base::bar()".to_string());
        let value: serde_yaml::Value = serde_yaml::to_value(&item).unwrap();
        assert_eq!(value["inheritedMembers"][0].as_str(), Some("\\NS\\Base::bar()"));
        assert_eq!(value["type"].as_str(), Some("trait"));
    }

    #[test]
    fn page_serializes_items_key() {
        let mut page = Page::default();
        page.add_item(Item::new("\\NS\\Foo", "Foo", ItemType::Interface));
        let value: serde_yaml::Value = serde_yaml::to_value(&page).unwrap();
        let map = value.as_mapping().unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(value["items"].as_sequence().unwrap().len(), 1);
    }
}
