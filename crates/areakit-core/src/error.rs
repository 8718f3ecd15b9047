//! Error handling for AreaKit
//!
//! Provides the error types shared by every layer of the engine:
//! - Area errors (parsing, validation, store and session misuse)
//! - Document errors (a whole area description with no usable line)
//!
//! All error types use `thiserror` for ergonomic error handling.

use std::fmt;

use thiserror::Error;

use crate::constants::MAX_SURFACED_ERRORS;

/// Fieldless discriminant of [`AreaError`].
///
/// Lets callers branch on the failure class without inspecting messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AreaErrorKind {
    /// Blank input where content was required.
    EmptyInput,
    /// Fewer than two usable numbers in a coordinate expression.
    InvalidNumericFormat,
    /// No comma after the label of an area line.
    MissingSeparator,
    /// Nothing after the label separator.
    MissingPoints,
    /// Fewer valid coordinate pairs than a polygon needs.
    InsufficientPoints,
    /// Missing, non-finite or non-positive width/height.
    InvalidDimension,
    /// The referenced area is not in the store.
    AreaNotFound,
    /// The edit session was asked for a transition its state does not allow.
    InvalidStateTransition,
}

/// Area error type
///
/// Represents errors raised while parsing area descriptions, validating user
/// input, or mutating the area store. Every variant renders a user-facing
/// message.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AreaError {
    /// Input was blank
    #[error("Input is empty")]
    EmptyInput,

    /// Coordinate expression did not contain two finite numbers
    #[error("Invalid coordinate format: '{input}' (expected two numbers, e.g. (x,y))")]
    InvalidNumericFormat {
        /// The text that failed to parse.
        input: String,
    },

    /// Area line has no comma after its label
    #[error("Missing ',' after label")]
    MissingSeparator,

    /// Area line has nothing after its label
    #[error("No coordinates after label")]
    MissingPoints,

    /// Too few valid coordinate pairs
    #[error("At least {required} coordinate pairs required, found {found}")]
    InsufficientPoints {
        /// Number of valid pairs found.
        found: usize,
        /// Number of pairs required.
        required: usize,
    },

    /// Width or height is missing or not positive
    #[error("Invalid {dimension}: must be a number greater than 0")]
    InvalidDimension {
        /// The name of the offending dimension.
        dimension: String,
    },

    /// Area id is unknown
    #[error("Area {id} not found")]
    AreaNotFound {
        /// The id that was looked up.
        id: String,
    },

    /// Session transition not allowed from the current state
    #[error("Invalid state transition from {current} to {requested}")]
    InvalidStateTransition {
        /// The current state name.
        current: String,
        /// The requested transition.
        requested: String,
    },
}

impl AreaError {
    /// Creates an [`AreaError::InvalidNumericFormat`] for the given input.
    pub fn invalid_format(input: impl Into<String>) -> Self {
        AreaError::InvalidNumericFormat {
            input: input.into(),
        }
    }

    /// Creates an [`AreaError::InvalidDimension`] for the named dimension.
    pub fn invalid_dimension(dimension: impl Into<String>) -> Self {
        AreaError::InvalidDimension {
            dimension: dimension.into(),
        }
    }

    /// Creates an [`AreaError::AreaNotFound`] for the given id.
    pub fn not_found(id: impl fmt::Display) -> Self {
        AreaError::AreaNotFound { id: id.to_string() }
    }

    /// Returns the discriminant of this error.
    pub fn kind(&self) -> AreaErrorKind {
        match self {
            AreaError::EmptyInput => AreaErrorKind::EmptyInput,
            AreaError::InvalidNumericFormat { .. } => AreaErrorKind::InvalidNumericFormat,
            AreaError::MissingSeparator => AreaErrorKind::MissingSeparator,
            AreaError::MissingPoints => AreaErrorKind::MissingPoints,
            AreaError::InsufficientPoints { .. } => AreaErrorKind::InsufficientPoints,
            AreaError::InvalidDimension { .. } => AreaErrorKind::InvalidDimension,
            AreaError::AreaNotFound { .. } => AreaErrorKind::AreaNotFound,
            AreaError::InvalidStateTransition { .. } => AreaErrorKind::InvalidStateTransition,
        }
    }

    /// Check if this error came from user input rather than API misuse
    pub fn is_input_error(&self) -> bool {
        !matches!(
            self,
            AreaError::AreaNotFound { .. } | AreaError::InvalidStateTransition { .. }
        )
    }
}

/// A parse failure attached to a 1-based line of an area description.
#[derive(Debug, Clone, PartialEq)]
pub struct LineError {
    /// 1-based line number in the original text.
    pub line_number: usize,
    /// What went wrong on that line.
    pub error: AreaError,
}

impl LineError {
    /// Creates a new line error.
    pub fn new(line_number: usize, error: AreaError) -> Self {
        Self { line_number, error }
    }

    /// User-facing message, prefixed with the line number.
    pub fn message(&self) -> String {
        format!("Line {}: {}", self.line_number, self.error)
    }
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Document error type
///
/// Raised when an area description contains no line that parses. Keeps every
/// line error, but only the first [`MAX_SURFACED_ERRORS`] are surfaced.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{}", surfaced_messages(.line_errors).join("; "))]
pub struct DocumentError {
    /// All per-line failures, in line order.
    pub line_errors: Vec<LineError>,
}

impl DocumentError {
    /// Creates a document error from per-line failures.
    pub fn new(line_errors: Vec<LineError>) -> Self {
        Self { line_errors }
    }

    /// The surfaced messages, capped at [`MAX_SURFACED_ERRORS`].
    pub fn messages(&self) -> Vec<String> {
        surfaced_messages(&self.line_errors)
    }
}

fn surfaced_messages(line_errors: &[LineError]) -> Vec<String> {
    line_errors
        .iter()
        .take(MAX_SURFACED_ERRORS)
        .map(LineError::message)
        .collect()
}

/// Main error type for AreaKit
///
/// A unified error type that can represent any error from all layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Area error
    #[error(transparent)]
    Area(#[from] AreaError),

    /// Document error
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is an area error
    pub fn is_area_error(&self) -> bool {
        matches!(self, Error::Area(_))
    }

    /// Check if this is a document error
    pub fn is_document_error(&self) -> bool {
        matches!(self, Error::Document(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
