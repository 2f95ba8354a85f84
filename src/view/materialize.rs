use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::ViewConfig;
use crate::error::ViewError;
use crate::model::{CellValue, DecisionTable, RowId, RowType, Section};

use super::rowindex::{RowDescriptor, RowIndex};

/// One display row. Keys without a cell render empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowView {
    pub id: RowId,
    #[serde(flatten)]
    pub cells: BTreeMap<String, CellValue>,
}

impl RowView {
    pub fn new(id: &str) -> Self {
        Self { id: id.to_string(), cells: BTreeMap::new() }
    }

    pub fn get(&self, key: &str) -> Option<&CellValue> {
        self.cells.get(key)
    }

    /// Text of a cell, or "" when absent
    pub fn text(&self, key: &str) -> String {
        self.cells.get(key).map(|v| v.to_string()).unwrap_or_default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<CellValue>) {
        self.cells.insert(key.into(), value.into());
    }

    fn set_labels(&mut self, labels: &[&str]) {
        for (i, label) in labels.iter().enumerate() {
            self.set(format!("c{}", i + 1), *label);
        }
    }

    /// Empty values are treated as missing
    fn set_if_present(&mut self, key: &str, value: Option<&String>) {
        if let Some(v) = value.filter(|v| !v.is_empty()) {
            self.set(key, v.as_str());
        }
    }
}

/// Builds the view row for `row_id`. Not cached; every call scans all testcases.
pub fn materialize_row(
    index: &RowIndex<'_>,
    table: &DecisionTable,
    config: &ViewConfig,
    row_id: &str,
) -> Result<RowView, ViewError> {
    let descriptor = index
        .get(row_id)
        .ok_or_else(|| ViewError::RowNotFound(row_id.to_string()))?;

    let mut row = RowView::new(row_id);
    row.set_labels(&header_labels(descriptor, config));
    add_testcase_data(&mut row, table, config);

    match descriptor.section {
        None if descriptor.row_type == RowType::DataRow => {
            add_data_row_details(&mut row, index, descriptor)?;
        }
        Some(Section::SummarySection(summary)) => {
            if let Some(total) = summary.total.as_ref().filter(|v| v.is_truthy()) {
                row.set("c2", format!("{} Total testcases", total));
            }
            if let Some(done) = summary.done.as_ref().filter(|v| v.is_truthy()) {
                row.set("c3", format!("{} Done testcases", done));
            }
            if let Some(percent) = summary.percent.as_ref().filter(|v| v.is_truthy()) {
                row.set("c4", format!("{}%", percent));
            }
        }
        _ => {}
    }

    Ok(row)
}

fn header_labels<'c>(descriptor: &RowDescriptor<'c>, config: &'c ViewConfig) -> Vec<&'c str> {
    let captions = &config.captions;

    match descriptor.section {
        Some(Section::FieldSection(s)) => name_then(s.name.as_str(), captions.field.as_slice()),
        Some(Section::FieldSubSection(s)) => vec![s.name.as_str()],
        Some(Section::MultiRowSection(s)) => name_then(s.name.as_str(), captions.multi_row.as_slice()),
        // summaries show their captions instead of the section name
        Some(Section::SummarySection(_)) => captions.summary.iter().map(String::as_str).collect(),
        None => Vec::new(),
    }
}

fn name_then<'c>(name: &'c str, captions: &'c [String]) -> Vec<&'c str> {
    std::iter::once(name)
        .chain(captions.iter().map(String::as_str))
        .collect()
}

fn add_testcase_data(row: &mut RowView, table: &DecisionTable, config: &ViewConfig) {
    for (position, testcase) in table.numbered_testcases() {
        if let Some(value) = testcase.data.get(&row.id) {
            row.set(config.testcase_key(position), value.clone());
        }
    }
}

/// Data rows take c2..c4 from the auxiliary maps of their parent section
fn add_data_row_details(
    row: &mut RowView,
    index: &RowIndex<'_>,
    descriptor: &RowDescriptor<'_>,
) -> Result<(), ViewError> {
    let parent_id = descriptor
        .parent_row_id
        .as_ref()
        .ok_or_else(|| ViewError::RowNotFound(descriptor.row_id.clone()))?;
    let parent = index
        .get(parent_id)
        .ok_or_else(|| ViewError::RowNotFound(parent_id.clone()))?;

    let row_id = &descriptor.row_id;
    match parent.section {
        Some(Section::FieldSubSection(sub)) => {
            row.set_if_present("c2", sub.equivalence_classes.get(row_id));
            row.set_if_present("c3", sub.tdgs.get(row_id));
            row.set_if_present("c4", sub.comments.get(row_id));
        }
        Some(Section::MultiRowSection(multi)) => {
            row.set_if_present("c2", multi.keys.get(row_id));
            row.set_if_present("c3", multi.others.get(row_id));
            row.set_if_present("c4", multi.comments.get(row_id));
        }
        _ => {}
    }

    Ok(())
}
