use thiserror::Error;

/// Failures surfaced at the pipeline boundary.
///
/// The leaf parsers never fail on malformed markup; they degrade to sentinel
/// values (`None`, empty sequences) and `compile` maps those here.
#[derive(Error, Debug)]
pub enum Error {
    #[error("table markup is malformed (missing separator or too few lines)")]
    MalformedTable,
    #[error("list markup produced no items")]
    EmptyList,
    #[error("unknown content kind: {0}")]
    UnknownKind(String),
}
