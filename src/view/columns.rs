use serde::Serialize;
use tracing::debug;

use crate::config::{ViewConfig, FIXED_COLUMN_KEYS, TESTCASE_CONFIG_KEY};
use crate::error::ViewError;
use crate::model::DecisionTable;

/// Column as handed to the grid. Widths are looked up in the config directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    pub key: String,
    pub name: String,
}

/// The fixed descriptive columns followed by one column per testcase
pub fn build_column_index(table: &DecisionTable, config: &ViewConfig) -> Result<Vec<Column>, ViewError> {
    debug!(sheet = %table.name, testcases = table.testcase_order.len(), "reload the columns");

    let mut columns = Vec::with_capacity(FIXED_COLUMN_KEYS.len() + table.testcase_order.len());
    for key in FIXED_COLUMN_KEYS {
        columns.push(fixed_column(config, key)?);
    }
    for position in 1..=table.testcase_order.len() {
        columns.push(testcase_column(config, position)?);
    }

    Ok(columns)
}

pub fn fixed_column(config: &ViewConfig, key: &str) -> Result<Column, ViewError> {
    require_width(config, key)?;
    let name = config
        .name_for(key)
        .filter(|n| !n.is_empty())
        .ok_or_else(|| missing(key, "name"))?;

    Ok(Column { key: key.to_string(), name: name.to_string() })
}

/// `position` is 1-based. The configured `tc` name is a prefix and may be empty.
pub fn testcase_column(config: &ViewConfig, position: usize) -> Result<Column, ViewError> {
    require_width(config, TESTCASE_CONFIG_KEY)?;
    let prefix = config
        .name_for(TESTCASE_CONFIG_KEY)
        .ok_or_else(|| missing(TESTCASE_CONFIG_KEY, "name"))?;

    Ok(Column {
        key: config.testcase_key(position),
        name: format!("{}{}", prefix, position),
    })
}

fn require_width(config: &ViewConfig, key: &str) -> Result<u32, ViewError> {
    config
        .width_for(key)
        .filter(|&w| w > 0)
        .ok_or_else(|| missing(key, "width"))
}

fn missing(key: &str, field: &'static str) -> ViewError {
    ViewError::MissingColumnConfig { key: key.to_string(), field }
}
