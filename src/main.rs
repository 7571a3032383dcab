//! phpdocyaml — transform phpDocumentor `structure.xml` into DocFX YAML.
//!
//! Writes one UniversalReference page per class, interface and trait, a
//! single `toc.yml`, and a `docs.metadata` record for docuploader:
//!
//! `phpdocyaml --namespace '\Google\Cloud\Vision' --version 1.0.0 --structure structure.xml --outdir out`

mod docfx;
mod error;
mod extract;
mod logger;
mod model;
mod render;
mod toc;
mod transform;

use anyhow::{bail, Context, Result};
use clap::builder::NonEmptyStringValueParser;
use clap::Parser;
use regex::Regex;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::debug;

/// One or more `\Segment` groups.
static RE_NAMESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\\[^\\\s]+)+$").unwrap());

#[derive(Parser)]
#[command(
    name = "phpdocyaml",
    about = "Transform phpDocumentor structure.xml into DocFX YAML"
)]
struct Cli {
    /// Root namespace the docs are for. Will be the root of the TOC.
    /// Must not have a trailing \
    #[arg(long, value_parser = parse_namespace)]
    namespace: String,

    /// The library version the docs are for
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    version: String,

    /// Path to the structure.xml file
    #[arg(long)]
    structure: PathBuf,

    /// Where to write output
    #[arg(long)]
    outdir: PathBuf,

    /// Log debug detail to stderr
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Only log errors
    #[arg(short = 'q', long)]
    quiet: bool,
}

fn parse_namespace(s: &str) -> Result<String, String> {
    if s.ends_with('\\') {
        return Err("namespace must not end with \\".to_string());
    }
    if !RE_NAMESPACE.is_match(s) {
        return Err(format!("{:?} is not a namespace like \\Vendor\\Package", s));
    }
    Ok(s.to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init_logger(cli.verbose, cli.quiet);

    let project = extract::extract(&cli.structure).context("unable to parse")?;

    let (pages, toc) =
        transform::transform(&project, &cli.namespace).context("unable to transform")?;
    debug!(
        pages = pages.len(),
        toc_entries = toc.root().map_or(0, |r| r.items.len()),
        "transformed"
    );

    write(&cli.outdir, &pages, &toc, &cli.namespace, &cli.version).context("unable to write")?;

    println!(
        "Success! Wrote {} pages, 1 TOC, and 1 docs.metadata.",
        pages.len()
    );
    Ok(())
}

/// Write every page, the TOC and the metadata record under `out_dir`.
fn write(
    out_dir: &Path,
    pages: &transform::Pages,
    toc: &toc::TableOfContents,
    namespace: &str,
    version: &str,
) -> Result<()> {
    // Resolve every destination first so a clash leaves the directory untouched.
    let mut planned: BTreeMap<PathBuf, &str> = BTreeMap::new();
    for uid in pages.keys() {
        let path = render::page_file(out_dir, namespace, uid);
        if let Some(previous) = planned.insert(path.clone(), uid) {
            bail!(
                "{:?} and {:?} would both be written to {}",
                previous,
                uid,
                path.display()
            );
        }
    }

    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create output directory: {}", out_dir.display()))?;

    for (uid, page) in pages {
        let path = render::page_file(out_dir, namespace, uid);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory: {}", parent.display()))?;
        }
        fs::write(&path, render::render_page(page)?)
            .with_context(|| format!("failed to write {}", path.display()))?;
        debug!(uid = %uid, path = %path.display(), "wrote page");
    }

    let toc_path = out_dir.join(render::TOC_FILE);
    fs::write(&toc_path, render::render_toc(toc)?)
        .with_context(|| format!("failed to write {}", toc_path.display()))?;

    let metadata_path = out_dir.join(render::METADATA_FILE);
    let metadata = render::render_metadata(namespace, version, chrono::Utc::now());
    fs::write(&metadata_path, metadata)
        .with_context(|| format!("failed to write {}", metadata_path.display()))?;

    Ok(())
}
