use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::value::CellValue;
use super::RowId;

/// What a display row represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RowType {
    FieldSection,
    FieldSubSection,
    MultiRowSection,
    SummarySection,
    DataRow,
}

impl fmt::Display for RowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RowType::FieldSection => "FieldSection",
            RowType::FieldSubSection => "FieldSubSection",
            RowType::MultiRowSection => "MultiRowSection",
            RowType::SummarySection => "SummarySection",
            RowType::DataRow => "DataRow",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "sectionType")]
pub enum Section {
    FieldSection(FieldSection),
    FieldSubSection(FieldSubSection),
    MultiRowSection(MultiRowSection),
    SummarySection(SummarySection),
}

impl Section {
    pub fn name(&self) -> &str {
        match self {
            Section::FieldSection(s) => &s.name,
            Section::FieldSubSection(s) => &s.name,
            Section::MultiRowSection(s) => &s.name,
            Section::SummarySection(s) => &s.name,
        }
    }

    pub fn header_row(&self) -> &RowId {
        match self {
            Section::FieldSection(s) => &s.header_row,
            Section::FieldSubSection(s) => &s.header_row,
            Section::MultiRowSection(s) => &s.header_row,
            Section::SummarySection(s) => &s.header_row,
        }
    }

    pub fn row_type(&self) -> RowType {
        match self {
            Section::FieldSection(_) => RowType::FieldSection,
            Section::FieldSubSection(_) => RowType::FieldSubSection,
            Section::MultiRowSection(_) => RowType::MultiRowSection,
            Section::SummarySection(_) => RowType::SummarySection,
        }
    }
}

/// Groups several field subsections under one header
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSection {
    pub name: String,
    pub header_row: RowId,
    /// Ids of the subsections, in display order
    #[serde(default)]
    pub data_rows: Vec<RowId>,
    #[serde(default)]
    pub sub_sections: HashMap<RowId, Section>,
}

/// One field with its equivalence classes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSubSection {
    pub name: String,
    pub header_row: RowId,
    #[serde(default)]
    pub data_rows: Vec<RowId>,
    #[serde(default)]
    pub equivalence_classes: HashMap<RowId, String>,
    /// Test data generator references
    #[serde(default)]
    pub tdgs: HashMap<RowId, String>,
    #[serde(default)]
    pub comments: HashMap<RowId, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiRowSection {
    pub name: String,
    pub header_row: RowId,
    #[serde(default)]
    pub data_rows: Vec<RowId>,
    #[serde(default)]
    pub keys: HashMap<RowId, String>,
    #[serde(default)]
    pub others: HashMap<RowId, String>,
    #[serde(default)]
    pub comments: HashMap<RowId, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarySection {
    pub name: String,
    pub header_row: RowId,
    #[serde(default)]
    pub total: Option<CellValue>,
    #[serde(default)]
    pub done: Option<CellValue>,
    #[serde(default)]
    pub percent: Option<CellValue>,
}

impl FieldSection {
    pub fn new(name: &str, header_row: &str) -> Self {
        Self {
            name: name.to_string(),
            header_row: header_row.to_string(),
            ..Default::default()
        }
    }

    /// Appends a subsection, keyed by its header row
    pub fn push_sub_section(&mut self, section: Section) {
        let id = section.header_row().clone();
        self.data_rows.push(id.clone());
        self.sub_sections.insert(id, section);
    }
}

impl FieldSubSection {
    pub fn new(name: &str, header_row: &str) -> Self {
        Self {
            name: name.to_string(),
            header_row: header_row.to_string(),
            ..Default::default()
        }
    }

    pub fn push_row(&mut self, row_id: &str, equivalence_class: &str, tdg: &str, comment: &str) {
        let id = row_id.to_string();
        self.data_rows.push(id.clone());
        self.equivalence_classes.insert(id.clone(), equivalence_class.to_string());
        self.tdgs.insert(id.clone(), tdg.to_string());
        self.comments.insert(id, comment.to_string());
    }
}

impl MultiRowSection {
    pub fn new(name: &str, header_row: &str) -> Self {
        Self {
            name: name.to_string(),
            header_row: header_row.to_string(),
            ..Default::default()
        }
    }

    pub fn push_row(&mut self, row_id: &str, key: &str, other: &str, comment: &str) {
        let id = row_id.to_string();
        self.data_rows.push(id.clone());
        self.keys.insert(id.clone(), key.to_string());
        self.others.insert(id.clone(), other.to_string());
        self.comments.insert(id, comment.to_string());
    }
}

impl SummarySection {
    pub fn new(name: &str, header_row: &str) -> Self {
        Self {
            name: name.to_string(),
            header_row: header_row.to_string(),
            ..Default::default()
        }
    }
}
