//! Rendering of output files: DocFX YAML and the docuploader metadata record.

use crate::docfx::Page;
use crate::toc::TableOfContents;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};

const PAGE_HEADER: &str = "### YamlMime:UniversalReference\n";
const TOC_HEADER: &str = "### YamlMime:TableOfContent\n";

pub const TOC_FILE: &str = "toc.yml";
pub const METADATA_FILE: &str = "docs.metadata";
const INDEX_FILE: &str = "index.yml";
const PAGE_EXTENSION: &str = "yml";

/// Render one page, prefixed with its YamlMime header.
pub fn render_page(page: &Page) -> Result<String> {
    let body = serde_yaml::to_string(page).context("failed to encode page")?;
    Ok(format!("{}{}", PAGE_HEADER, body))
}

pub fn render_toc(toc: &TableOfContents) -> Result<String> {
    let body = serde_yaml::to_string(toc).context("failed to encode table of contents")?;
    Ok(format!("{}{}", TOC_HEADER, body))
}

/// Render the `docs.metadata` record in protobuf text format.
///
/// ```text
/// update_time {
///   seconds: 1600048103
///   nanos: 183052000
/// }
/// name: "Google.Cloud.Vision"
/// version: "1.0.0"
/// language: "php"
/// ```
pub fn render_metadata(namespace: &str, version: &str, now: DateTime<Utc>) -> String {
    format!(
        "update_time {{\n  seconds: {}\n  nanos: {}\n}}\nname: {:?}\nversion: {:?}\nlanguage: \"php\"\n",
        now.timestamp(),
        now.timestamp_subsec_nanos(),
        dotted_name(namespace),
        version
    )
}

/// `\Google\Cloud\Vision` → `Google.Cloud.Vision`
fn dotted_name(namespace: &str) -> String {
    namespace
        .strip_prefix('\\')
        .unwrap_or(namespace)
        .replace('\\', ".")
}

/// File a page with `uid` is written to, relative to the output directory.
///
/// `\NS\Sub\Foo` under `\NS` → `Sub/Foo.yml`; `\NS` itself → `index.yml`.
/// Callers guarantee `uid` lies under `namespace`.
pub fn page_path(namespace: &str, uid: &str) -> PathBuf {
    if uid == namespace {
        return PathBuf::from(INDEX_FILE);
    }
    let relative = uid.strip_prefix(namespace).unwrap_or(uid);
    let relative = relative.strip_prefix('\\').unwrap_or(relative);
    let mut segments: Vec<&str> = relative.split('\\').collect();
    let file_name = format!("{}.{}", segments.pop().unwrap_or_default(), PAGE_EXTENSION);
    let mut path: PathBuf = segments.into_iter().collect();
    path.push(file_name);
    path
}

/// Join [`page_path`] onto `out_dir`.
pub fn page_file(out_dir: &Path, namespace: &str, uid: &str) -> PathBuf {
    out_dir.join(page_path(namespace, uid))
}
