//! Error types for the table engine.

use std::fmt;

/// Which kind of record a schema error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    /// An entry of the `Rank` section.
    Rank,
    /// An entry of the `Effect` section.
    Effect,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rank => write!(f, "rank"),
            Self::Effect => write!(f, "effect"),
        }
    }
}

/// Broad classification of a [`TableError`], used by adapters to pick a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input document is malformed. Fatal at startup.
    Schema,
    /// A rank, effect, or color reference did not resolve.
    Lookup,
    /// A supplied roll lies outside the die's faces.
    Range,
    /// The random source failed to produce a value.
    Random,
}

/// Errors that can occur while building a catalog or resolving a roll.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// The document is not valid JSON.
    #[error("invalid table document: {0}")]
    InvalidDocument(#[from] serde_json::Error),

    /// The named table is not present in the document.
    #[error("table \"{0}\" not found in document")]
    MissingTable(String),

    /// The table lacks its `Rank` or `Effect` section.
    #[error("table \"{table}\" has no {section} section")]
    MissingSection {
        /// Name of the table.
        table: String,
        /// The missing section (`Rank` or `Effect`).
        section: &'static str,
    },

    /// A rank or effect record failed schema validation.
    #[error("invalid {kind} \"{key}\": {reason}")]
    InvalidRecord {
        /// Record kind.
        kind: RecordKind,
        /// Key of the offending entry in the document.
        key: String,
        /// What is wrong with it.
        reason: String,
    },

    /// Two entries share a name or abbreviation.
    #[error("duplicate key \"{0}\" across ranks and effects")]
    DuplicateKey(String),

    /// A rank's thresholds are not non-decreasing.
    #[error("rank \"{0}\" thresholds must satisfy green <= yellow <= red")]
    ThresholdOrder(String),

    /// The document defines no ranks.
    #[error("table defines no ranks")]
    EmptyRanks,

    /// A rank reference did not resolve.
    #[error("unknown rank: {0}")]
    UnknownRank(String),

    /// An effect reference did not resolve.
    #[error("unknown effect: {0}")]
    UnknownEffect(String),

    /// A color reference did not resolve.
    #[error("invalid color result: {0}")]
    UnknownColor(String),

    /// A supplied roll is outside `1..=sides`.
    #[error("roll {roll} is outside 1..={sides}")]
    RollOutOfRange {
        /// The offending value.
        roll: u32,
        /// Number of faces on the die.
        sides: u32,
    },

    /// The entropy source failed.
    #[error("random source failed: {0}")]
    Entropy(String),
}

impl TableError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidDocument(_)
            | Self::MissingTable(_)
            | Self::MissingSection { .. }
            | Self::InvalidRecord { .. }
            | Self::DuplicateKey(_)
            | Self::ThresholdOrder(_)
            | Self::EmptyRanks => ErrorKind::Schema,
            Self::UnknownRank(_)
            | Self::UnknownEffect(_)
            | Self::UnknownColor(_) => ErrorKind::Lookup,
            Self::RollOutOfRange { .. } => ErrorKind::Range,
            Self::Entropy(_) => ErrorKind::Random,
        }
    }
}

/// Convenience result type for table operations.
pub type TableResult<T> = Result<T, TableError>;
