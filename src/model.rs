pub mod section;
pub mod value;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub use section::{FieldSection, FieldSubSection, MultiRowSection, RowType, Section, SummarySection};
pub use value::CellValue;

pub type RowId = String;

/// A named scenario; its data assigns values to row ids
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testcase {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub data: HashMap<RowId, CellValue>,
}

impl Testcase {
    pub fn new(name: &str) -> Self {
        Self { name: name.to_string(), data: HashMap::new() }
    }

    pub fn with(mut self, row_id: &str, value: impl Into<CellValue>) -> Self {
        self.data.insert(row_id.to_string(), value.into());
        self
    }
}

/// In-memory decision table as handed over by the model layer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionTable {
    #[serde(default)]
    pub name: String,
    pub section_order: Vec<RowId>,
    pub sections: HashMap<RowId, Section>,
    #[serde(default)]
    pub testcase_order: Vec<String>,
    #[serde(default)]
    pub testcases: HashMap<String, Testcase>,
}

impl DecisionTable {
    pub fn new(name: &str) -> Self {
        Self { name: name.to_string(), ..Default::default() }
    }

    /// Appends a top level section, keyed by its header row
    pub fn push_section(&mut self, section: Section) {
        let id = section.header_row().clone();
        self.section_order.push(id.clone());
        self.sections.insert(id, section);
    }

    pub fn push_testcase(&mut self, id: &str, testcase: Testcase) {
        self.testcase_order.push(id.to_string());
        self.testcases.insert(id.to_string(), testcase);
    }

    /// Testcases in column order with their 1-based position.
    /// Ids without an entry are skipped but still occupy their position.
    pub fn numbered_testcases(&self) -> impl Iterator<Item = (usize, &Testcase)> + '_ {
        self.testcase_order
            .iter()
            .enumerate()
            .filter_map(|(i, id)| self.testcases.get(id).map(|tc| (i + 1, tc)))
    }
}
