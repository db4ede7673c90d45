/// Failure reported by a [`DocumentHost`](crate::DocumentHost) operation.
///
/// None of these reach callers of the tracker or ring; they are logged and
/// the affected mutation is skipped.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    /// The document has no root container (e.g. `<body>` not parsed yet).
    #[error("document has no root container")]
    MissingRoot,

    /// The document has no head to insert a style element into.
    #[error("document has no head element")]
    MissingHead,

    /// A platform call threw.
    #[error("platform call failed: {0}")]
    Js(String),
}
