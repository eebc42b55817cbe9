//! Error types for the spacing pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Failures of the morphological analyzer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("control character {ch:?} at byte {offset}")]
    ControlCharacter { ch: char, offset: usize },

    #[error("unknown part-of-speech tag: {0}")]
    UnknownTag(String),

    #[error("analysis failed: {0}")]
    Failed(String),
}

/// Failures while building a dictionary
#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("dictionary term is empty")]
    EmptyTerm,

    #[error("dictionary term {0:?} contains whitespace")]
    InvalidTerm(String),

    #[error("line {line}: unknown tag {tag:?}")]
    UnknownTag { line: usize, tag: String },

    #[error("line {line}: invalid priority {value:?}")]
    InvalidPriority { line: usize, value: String },

    #[error("line {line}: missing {field}")]
    MissingField { line: usize, field: &'static str },

    #[error("cannot read dictionary {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Top-level error returned by [`crate::SpacingFixer`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FixError {
    #[error("invalid input shape: {0}")]
    InvalidInputShape(String),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

/// Convenience Result alias for the fixer
pub type Result<T> = std::result::Result<T, FixError>;
