//! Input model — the phpDocumentor `structure.xml` tree.
//!
//! Only the parts the transform reads are declared; every other element and
//! attribute is skipped during deserialization.

use serde::Deserialize;

/// Root `<project>` element.
#[derive(Debug, Default, Deserialize)]
pub struct Project {
    #[serde(rename = "file", default)]
    pub files: Vec<File>,
}

/// A single `<file>` entry. In practice declares at most one type.
#[derive(Debug, Default, Deserialize)]
pub struct File {
    #[serde(rename = "@path", default)]
    pub path: String,
    #[serde(rename = "class")]
    pub class: Option<Class>,
    #[serde(rename = "interface")]
    pub interface: Option<Interface>,
    #[serde(rename = "trait")]
    pub trait_decl: Option<Trait>,
    /// Free constants (not documented)
    #[serde(rename = "constant", default)]
    pub constants: Vec<FreeSymbol>,
    /// Free functions (not documented)
    #[serde(rename = "function", default)]
    pub functions: Vec<FreeSymbol>,
}

/// A file-level constant or function. Only its name is kept for diagnostics.
#[derive(Debug, Default, Deserialize)]
pub struct FreeSymbol {
    #[serde(default)]
    pub full_name: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct Class {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub docblock: Docblock,
    #[serde(default)]
    pub implements: Vec<String>,
    #[serde(rename = "property", default)]
    pub properties: Vec<Property>,
    #[serde(rename = "method", default)]
    pub methods: Vec<Method>,
    #[serde(rename = "constant", default)]
    pub constants: Vec<Constant>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Interface {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub docblock: Docblock,
    #[serde(rename = "method", default)]
    pub methods: Vec<Method>,
    #[serde(rename = "constant", default)]
    pub constants: Vec<Constant>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Trait {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub docblock: Docblock,
    #[serde(rename = "property", default)]
    pub properties: Vec<Property>,
    #[serde(rename = "method", default)]
    pub methods: Vec<Method>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Property {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub docblock: Docblock,
    #[serde(default)]
    pub inherited_from: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct Method {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub docblock: Docblock,
    #[serde(rename = "argument", default)]
    pub arguments: Vec<Argument>,
    #[serde(default)]
    pub inherited_from: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct Argument {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub type_name: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct Constant {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub full_name: String,
    /// Literal source text of the value
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub docblock: Docblock,
    #[serde(default)]
    pub inherited_from: String,
}

impl Property {
    pub fn is_inherited(&self) -> bool {
        !self.inherited_from.is_empty()
    }
}

impl Method {
    pub fn is_inherited(&self) -> bool {
        !self.inherited_from.is_empty()
    }
}

impl Constant {
    pub fn is_inherited(&self) -> bool {
        !self.inherited_from.is_empty()
    }
}

/// A docblock. A missing `<docblock>` element deserializes to the empty one.
#[derive(Debug, Default, Deserialize)]
pub struct Docblock {
    #[serde(default)]
    pub description: String,
    /// Markdown, passed through unrendered
    #[serde(rename = "long-description", default)]
    pub long_description: String,
    #[serde(rename = "tag", default)]
    pub tags: Vec<Tag>,
}

/// A docblock `<tag>`; all fields come from attributes.
#[derive(Debug, Default, Deserialize)]
pub struct Tag {
    #[serde(rename = "@name", default)]
    pub name: String,
    #[serde(rename = "@description", default)]
    pub description: String,
    #[serde(rename = "@variable", default)]
    pub variable: String,
    #[serde(rename = "@type", default)]
    pub type_name: String,
}

impl Docblock {
    /// Short and long description joined by a blank line.
    pub fn summary(&self) -> String {
        let mut s = self.description.clone();
        if !self.long_description.is_empty() {
            if !self.description.is_empty() {
                s.push_str("\n\n");
            }
            s.push_str(&self.long_description);
        }
        s
    }

    /// `"deprecated"` when any `@deprecated` tag is present, empty otherwise.
    pub fn status(&self) -> &'static str {
        if self.tags.iter().any(|t| t.name == "deprecated") {
            "deprecated"
        } else {
            ""
        }
    }

    /// Description of the `@param` tag for `variable`, empty if none matches.
    pub fn param(&self, variable: &str) -> &str {
        self.tags
            .iter()
            .find(|t| t.name == "param" && t.variable == variable)
            .map(|t| t.description.as_str())
            .unwrap_or("")
    }

    pub fn first_tag(&self) -> Option<&Tag> {
        self.tags.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(name: &str, variable: &str, description: &str) -> Tag {
        Tag {
            name: name.to_string(),
            variable: variable.to_string(),
            description: description.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn summary_joins_descriptions() {
        let doc = Docblock {
            description: "Short.".to_string(),
            long_description: "Long text.".to_string(),
            tags: vec![],
        };
        assert_eq!(doc.summary(), "Short.\n\nLong text.");
    }

    #[test]
    fn summary_long_only_has_no_separator() {
        let doc = Docblock {
            long_description: "Long text.".to_string(),
            ..Default::default()
        };
        assert_eq!(doc.summary(), "Long text.");
    }

    #[test]
    fn empty_docblock() {
        let doc = Docblock::default();
        assert_eq!(doc.summary(), "");
        assert_eq!(doc.status(), "");
        assert_eq!(doc.param("$x"), "");
        assert!(doc.first_tag().is_none());
    }

    #[test]
    fn deprecated_status() {
        let doc = Docblock {
            tags: vec![tag("see", "", ""), tag("deprecated", "", "use bar")],
            ..Default::default()
        };
        assert_eq!(doc.status(), "deprecated");
    }

    #[test]
    fn param_matches_by_variable() {
        let doc = Docblock {
            tags: vec![
                tag("return", "", "nothing"),
                tag("param", "$a", "first"),
                tag("param", "$b", "second"),
                tag("param", "$b", "shadowed"),
            ],
            ..Default::default()
        };
        assert_eq!(doc.param("$a"), "first");
        assert_eq!(doc.param("$b"), "second");
        assert_eq!(doc.param("$c"), "");
    }
}
