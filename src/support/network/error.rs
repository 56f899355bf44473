use thiserror::Error;

/// Errors that may occur when reading a network snapshot.
///
/// A read error aborts the sampling pass that encountered it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotReadError {
    /// A node index was outside the snapshot's node range.
    #[error("node index {index} out of range for {count} nodes")]
    NodeOutOfRange { index: usize, count: usize },

    /// The network has no phase-change device to read ice mass from.
    #[error("no phase-change device to read ice mass from")]
    PhaseChangeDeviceMissing,

    /// The data source could not supply a required value.
    #[error("value unavailable: {context}")]
    Unavailable { context: String },
}

impl SnapshotReadError {
    /// Creates a [`SnapshotReadError::Unavailable`] error with context.
    pub fn unavailable(context: impl Into<String>) -> Self {
        Self::Unavailable {
            context: context.into(),
        }
    }
}
