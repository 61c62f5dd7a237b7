use std::path::PathBuf;

/// Fatal errors: the whole read is abandoned and no mesh is produced.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("unable to open {path}: {source}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed JSON document: {0}")]
    MalformedDocument(String),
    #[error("root object matches no known GeoJSON shape (FeatureCollection, Feature or bare geometry)")]
    UnrecognizedRootShape,
}

/// Errors raised while extracting a single geometry node. Inside a feature
/// collection these are contained: the feature is skipped and the parse
/// continues. At root level they surface as `UnrecognizedRootShape`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeometryError {
    #[error("unsupported geometry type {0:?}")]
    UnsupportedType(String),
    #[error("{kind} coordinates do not match the expected nesting: {detail}")]
    ShapeMismatch {
        kind: &'static str,
        detail: String,
    },
}

/// One feature that was dropped from a collection instead of aborting the
/// whole document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skipped {
    /// Index into the root `features` array.
    pub feature: usize,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SkipReason {
    #[error("feature entry is not a JSON object")]
    NotAnObject,
    #[error("feature carries no recognizable geometry")]
    NoGeometry,
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}
