use thiserror::Error;

use crate::model::RowId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    #[error("The index '{index}' is out of range. Only '{count}' rows available.")]
    OutOfRange { index: usize, count: usize },

    #[error("Row not found: {0}")]
    RowNotFound(RowId),

    #[error("Table references missing section '{0}'")]
    MissingSection(RowId),

    #[error("Section '{section}' references missing subsection '{row_id}'")]
    MissingSubSection { section: String, row_id: RowId },

    #[error("No {field} configured for column '{key}'")]
    MissingColumnConfig { key: String, field: &'static str },

    #[error("Config error: {0}")]
    Config(String),
}
