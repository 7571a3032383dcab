//! Error types for decoding and transforming a structure file.

use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort the transform. No partial output survives either one.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransformError {
    /// A documented symbol lives outside the configured root namespace.
    #[error("found {uid:?} which does not belong to namespace {namespace:?}")]
    OutOfScope { uid: String, namespace: String },

    /// Two symbols resolve to the same UID.
    #[error("found duplicate UID: {uid:?}")]
    DuplicateUid { uid: String },
}

/// Failures reading or decoding `structure.xml`.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("unable to open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to decode {}: {source}", path.display())]
    Xml {
        path: PathBuf,
        #[source]
        source: quick_xml::DeError,
    },
}
