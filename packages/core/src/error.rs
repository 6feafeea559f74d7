/// A specialized `Result` type for classboard page logic.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can go wrong while reading page data.
///
/// None of these stop a page from loading: a bad due date degrades to an "unknown" label and a bad
/// configuration is reported once at launch.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The deadline element has no due date, or only whitespace.
    #[error("deadline element has no due date")]
    MissingDueDate,

    /// The due date is not in any of the accepted date-time layouts.
    #[error("unrecognized due date {raw:?}")]
    InvalidDueDate { raw: String },

    /// The page configuration could not be read.
    #[error("invalid page configuration: {0}")]
    Config(#[from] serde_json::Error),
}
