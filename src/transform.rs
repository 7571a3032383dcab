//! Transform engine: structure.xml model → DocFX pages + table of contents.
//!
//! A single pass over the project, in file order. Every class, interface and
//! trait becomes one page; its own methods and constants become items on that
//! page, and inherited members are only listed by UID on the owning item.

use crate::docfx::{Item, ItemType, Page, Parameter, Property as DocfxProperty, Syntax};
use crate::error::TransformError;
use crate::model::{Class, Constant, Docblock, File, Interface, Method, Project, Property, Trait};
use crate::toc::{TableOfContents, TocItem};
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, warn};

/// Files under this path prefix are test fixtures and never documented.
const TEST_PREFIX: &str = "tests";

/// Pages keyed by UID.
pub type Pages = BTreeMap<String, Page>;

/// Transform `project` into pages and a TOC rooted at `namespace`.
///
/// Fails on the first symbol outside `namespace` or the first repeated UID;
/// nothing is returned in that case.
pub fn transform(
    project: &Project,
    namespace: &str,
) -> Result<(Pages, TableOfContents), TransformError> {
    let mut set = PageSet::new(namespace);

    for file in &project.files {
        if file.path.starts_with(TEST_PREFIX) {
            debug!(path = %file.path, "skipping test file");
            continue;
        }
        warn_unhandled(file);

        for decl in declared_types(file) {
            set.add_type(&decl)?;
        }
    }

    Ok(set.finish())
}

fn warn_unhandled(file: &File) {
    if !file.constants.is_empty() {
        let names: Vec<&str> = file.constants.iter().map(|c| c.full_name.as_str()).collect();
        warn!(path = %file.path, symbols = ?names, "found unhandled constants");
    }
    if !file.functions.is_empty() {
        let names: Vec<&str> = file.functions.iter().map(|f| f.full_name.as_str()).collect();
        warn!(path = %file.path, symbols = ?names, "found unhandled functions");
    }
}

// -- Type declarations --------------------------------------------------------

/// Which kind of type a page documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Class,
    Interface,
    Trait,
}

impl TypeKind {
    fn item_type(self) -> ItemType {
        match self {
            TypeKind::Class => ItemType::Class,
            TypeKind::Interface => ItemType::Interface,
            TypeKind::Trait => ItemType::Trait,
        }
    }
}

/// Borrowed view shared by classes, interfaces and traits.
///
/// Member kinds a type cannot declare are empty slices: interfaces have no
/// properties, traits have no constants.
#[derive(Debug)]
struct TypeDecl<'a> {
    kind: TypeKind,
    name: &'a str,
    full_name: &'a str,
    docblock: &'a Docblock,
    implements: &'a [String],
    properties: &'a [Property],
    methods: &'a [Method],
    constants: &'a [Constant],
}

impl<'a> From<&'a Class> for TypeDecl<'a> {
    fn from(c: &'a Class) -> Self {
        TypeDecl {
            kind: TypeKind::Class,
            name: &c.name,
            full_name: &c.full_name,
            docblock: &c.docblock,
            implements: &c.implements,
            properties: &c.properties,
            methods: &c.methods,
            constants: &c.constants,
        }
    }
}

impl<'a> From<&'a Interface> for TypeDecl<'a> {
    fn from(i: &'a Interface) -> Self {
        TypeDecl {
            kind: TypeKind::Interface,
            name: &i.name,
            full_name: &i.full_name,
            docblock: &i.docblock,
            implements: &[],
            properties: &[],
            methods: &i.methods,
            constants: &i.constants,
        }
    }
}

impl<'a> From<&'a Trait> for TypeDecl<'a> {
    fn from(t: &'a Trait) -> Self {
        TypeDecl {
            kind: TypeKind::Trait,
            name: &t.name,
            full_name: &t.full_name,
            docblock: &t.docblock,
            implements: &[],
            properties: &t.properties,
            methods: &t.methods,
            constants: &[],
        }
    }
}

/// Types declared in `file`: class, then trait, then interface.
fn declared_types(file: &File) -> impl Iterator<Item = TypeDecl<'_>> {
    let class = file.class.as_ref().map(TypeDecl::from);
    let trait_decl = file.trait_decl.as_ref().map(TypeDecl::from);
    let interface = file.interface.as_ref().map(TypeDecl::from);
    class.into_iter().chain(trait_decl).chain(interface)
}

// -- Output builder -----------------------------------------------------------

/// Accumulates pages and TOC entries for one transform pass.
struct PageSet<'ns> {
    namespace: &'ns str,
    pages: Pages,
    toc_root: TocItem,
    /// Every UID emitted as an item so far
    claimed: HashSet<String>,
}

impl<'ns> PageSet<'ns> {
    fn new(namespace: &'ns str) -> Self {
        PageSet {
            namespace,
            pages: Pages::new(),
            toc_root: TocItem::root(namespace),
            claimed: HashSet::new(),
        }
    }

    /// Reserve `uid` for an emitted item, enforcing scope and uniqueness.
    fn claim(&mut self, uid: &str) -> Result<(), TransformError> {
        if !uid.starts_with(self.namespace) {
            return Err(TransformError::OutOfScope {
                uid: uid.to_string(),
                namespace: self.namespace.to_string(),
            });
        }
        if !self.claimed.insert(uid.to_string()) {
            return Err(TransformError::DuplicateUid {
                uid: uid.to_string(),
            });
        }
        Ok(())
    }

    fn add_type(&mut self, decl: &TypeDecl<'_>) -> Result<(), TransformError> {
        let uid = decl.full_name;
        self.claim(uid)?;
        debug!(uid, kind = ?decl.kind, "adding page");

        let status = decl.docblock.status();
        self.toc_root
            .add_item(TocItem::entry(self.namespace, uid, status));

        let mut owner = Item::new(uid, decl.name, decl.kind.item_type());
        owner.summary = decl.docblock.summary();
        owner.status = status.to_string();
        owner.implements = decl.implements.to_vec();

        let mut members = Vec::new();

        for p in decl.properties {
            if p.is_inherited() {
                owner.inherited_members.push(p.full_name.clone());
                continue;
            }
            owner.properties.push(property(p));
        }

        for m in decl.methods {
            if m.is_inherited() {
                owner.inherited_members.push(m.full_name.clone());
                continue;
            }
            self.claim(&m.full_name)?;
            owner.add_child(&m.full_name);
            members.push(method_item(uid, m));
        }

        for c in decl.constants {
            if c.is_inherited() {
                owner.inherited_members.push(c.full_name.clone());
                continue;
            }
            self.claim(&c.full_name)?;
            owner.add_child(&c.full_name);
            members.push(constant_item(uid, c));
        }

        let mut page = Page::default();
        page.add_item(owner);
        for item in members {
            page.add_item(item);
        }
        self.pages.insert(uid.to_string(), page);
        Ok(())
    }

    fn finish(mut self) -> (Pages, TableOfContents) {
        self.toc_root.sort_items();
        (self.pages, TableOfContents(vec![self.toc_root]))
    }
}

// -- Members ------------------------------------------------------------------

fn property(p: &Property) -> DocfxProperty {
    // Only the first tag is consulted for the type; later @var tags are ignored.
    let type_name = match p.docblock.first_tag() {
        Some(tag) => {
            if !tag.description.is_empty() {
                debug!(uid = %p.full_name, "ignoring property tag description");
            }
            tag.type_name.clone()
        }
        None => String::new(),
    };
    DocfxProperty {
        type_name,
        name: p.name.clone(),
        description: p.docblock.summary(),
    }
}

fn method_item(parent: &str, m: &Method) -> Item {
    let mut item = Item::new(&m.full_name, &m.name, ItemType::Method);
    item.parent = parent.to_string();
    item.summary = m.docblock.summary();
    item.status = m.docblock.status().to_string();
    item.parameters = parameters(m);
    item
}

fn constant_item(parent: &str, c: &Constant) -> Item {
    let mut item = Item::new(&c.full_name, &c.name, ItemType::Constant);
    item.parent = parent.to_string();
    if !c.value.is_empty() {
        item.syntax = Some(Syntax {
            content: c.value.clone(),
        });
    }
    item.summary = c.docblock.summary();
    item.status = c.docblock.status().to_string();
    item
}

/// Arguments in declaration order, described by their matching `@param` tag.
fn parameters(m: &Method) -> Vec<Parameter> {
    m.arguments
        .iter()
        .map(|a| Parameter {
            type_name: a.type_name.clone(),
            name: a.name.clone(),
            description: m.docblock.param(&a.name).to_string(),
        })
        .collect()
}
