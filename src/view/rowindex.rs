use std::collections::HashMap;

use tracing::debug;

use crate::error::ViewError;
use crate::model::{DecisionTable, RowId, RowType, Section};

/// Where a display row comes from. The row itself is created on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct RowDescriptor<'a> {
    pub row_id: RowId,
    pub row_type: RowType,
    pub parent_row_id: Option<RowId>,
    /// Set for section header rows
    pub section: Option<&'a Section>,
    /// Position of a data row within its section
    pub row_num: Option<usize>,
}

/// The flattened section tree: header rows followed by their children, depth first
#[derive(Debug, Clone, Default)]
pub struct RowIndex<'a> {
    order: Vec<RowId>,
    rows: HashMap<RowId, RowDescriptor<'a>>,
    has_summary_section: bool,
}

impl<'a> RowIndex<'a> {
    pub fn build(table: &'a DecisionTable) -> Result<Self, ViewError> {
        let mut index = Self::default();

        for section_id in &table.section_order {
            let section = table
                .sections
                .get(section_id)
                .ok_or_else(|| ViewError::MissingSection(section_id.clone()))?;
            index.push_section(table, section, None)?;
        }

        Ok(index)
    }

    fn push_section(
        &mut self,
        table: &DecisionTable,
        section: &'a Section,
        parent_row_id: Option<&RowId>,
    ) -> Result<(), ViewError> {
        let row_id = section.header_row();
        let row_type = section.row_type();

        debug!(
            section = section.name(),
            section_type = %row_type,
            sheet = %table.name,
            "work on section"
        );

        self.push(RowDescriptor {
            row_id: row_id.clone(),
            row_type,
            parent_row_id: parent_row_id.cloned(),
            section: Some(section),
            row_num: None,
        });

        match section {
            Section::FieldSection(field) => {
                for sub_id in &field.data_rows {
                    let sub_section = field.sub_sections.get(sub_id).ok_or_else(|| {
                        ViewError::MissingSubSection {
                            section: field.name.clone(),
                            row_id: sub_id.clone(),
                        }
                    })?;
                    self.push_section(table, sub_section, Some(row_id))?;
                }
            }
            Section::FieldSubSection(sub) => self.push_data_rows(row_id, &sub.data_rows),
            Section::MultiRowSection(multi) => self.push_data_rows(row_id, &multi.data_rows),
            Section::SummarySection(_) => self.has_summary_section = true,
        }

        Ok(())
    }

    fn push_data_rows(&mut self, parent_row_id: &RowId, data_rows: &[RowId]) {
        for (row_num, row_id) in data_rows.iter().enumerate() {
            self.push(RowDescriptor {
                row_id: row_id.clone(),
                row_type: RowType::DataRow,
                parent_row_id: Some(parent_row_id.clone()),
                section: None,
                row_num: Some(row_num),
            });
        }
    }

    // duplicate ids keep both positions but the later descriptor wins
    fn push(&mut self, descriptor: RowDescriptor<'a>) {
        self.order.push(descriptor.row_id.clone());
        self.rows.insert(descriptor.row_id.clone(), descriptor);
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn order(&self) -> &[RowId] {
        &self.order
    }

    pub fn get(&self, row_id: &str) -> Option<&RowDescriptor<'a>> {
        self.rows.get(row_id)
    }

    pub fn has_summary_section(&self) -> bool {
        self.has_summary_section
    }

    pub fn row_id_at(&self, number: usize) -> Result<&RowId, ViewError> {
        self.order.get(number).ok_or(ViewError::OutOfRange {
            index: number,
            count: self.order.len(),
        })
    }

    pub fn descriptor_at(&self, number: usize) -> Result<&RowDescriptor<'a>, ViewError> {
        let row_id = self.row_id_at(number)?;
        self.get(row_id)
            .ok_or_else(|| ViewError::RowNotFound(row_id.clone()))
    }

    /// The parent's row type for data rows, the row's own type otherwise
    pub fn section_type_at(&self, number: usize) -> Result<RowType, ViewError> {
        let descriptor = self.descriptor_at(number)?;
        if descriptor.row_type != RowType::DataRow {
            return Ok(descriptor.row_type);
        }

        let parent_id = descriptor
            .parent_row_id
            .as_ref()
            .ok_or_else(|| ViewError::RowNotFound(descriptor.row_id.clone()))?;
        self.get(parent_id)
            .map(|parent| parent.row_type)
            .ok_or_else(|| ViewError::RowNotFound(parent_id.clone()))
    }
}
