pub mod columns;
pub mod materialize;
pub mod rowindex;

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::{ViewConfig, FIXED_COLUMN_KEYS, TESTCASE_CONFIG_KEY};
use crate::error::ViewError;
use crate::model::{DecisionTable, RowType};

use columns::{build_column_index, Column};
use materialize::{materialize_row, RowView};
use rowindex::RowIndex;

pub type RowGetter<'s> = Box<dyn Fn(usize) -> Result<RowView, ViewError> + 's>;
pub type RowTypeGetter<'s> = Box<dyn Fn(usize) -> Result<RowType, ViewError> + 's>;

/// Presents a decision table as a flat grid of rows and columns.
///
/// The row index and the columns are built on first access and cached.
/// Rows themselves are created on demand and never cached.
pub struct ViewProjector<'a> {
    table: &'a DecisionTable,
    config: ViewConfig,
    rows: RefCell<Option<Rc<RowIndex<'a>>>>,
    columns: RefCell<Option<Rc<[Column]>>>,
}

impl<'a> ViewProjector<'a> {
    pub fn new(table: &'a DecisionTable) -> Self {
        Self::with_config(table, ViewConfig::default())
    }

    pub fn with_config(table: &'a DecisionTable, config: ViewConfig) -> Self {
        Self {
            table,
            config,
            rows: RefCell::new(None),
            columns: RefCell::new(None),
        }
    }

    pub fn table(&self) -> &'a DecisionTable {
        self.table
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// Recreates the row index from the table
    pub fn rebuild_rows(&self) -> Result<Rc<RowIndex<'a>>, ViewError> {
        let index = Rc::new(RowIndex::build(self.table)?);
        *self.rows.borrow_mut() = Some(Rc::clone(&index));
        Ok(index)
    }

    pub fn row_index(&self) -> Result<Rc<RowIndex<'a>>, ViewError> {
        let cached = self.rows.borrow().clone();
        match cached {
            Some(index) => Ok(index),
            None => self.rebuild_rows(),
        }
    }

    /// Drops both cached indices; the next access rebuilds them
    pub fn invalidate(&self) {
        self.rows.borrow_mut().take();
        self.columns.borrow_mut().take();
    }

    /// Header rows count as normal rows
    pub fn row_count(&self) -> Result<usize, ViewError> {
        Ok(self.row_index()?.len())
    }

    /// Only known once the row index has been built
    pub fn has_summary_section(&self) -> bool {
        self.rows
            .borrow()
            .as_ref()
            .map_or(false, |index| index.has_summary_section())
    }

    pub fn row_for(&self, number: usize) -> Result<RowView, ViewError> {
        let index = self.row_index()?;
        let row_id = index.row_id_at(number)?;
        materialize_row(&index, self.table, &self.config, row_id)
    }

    pub fn row_by_id(&self, row_id: &str) -> Result<RowView, ViewError> {
        let index = self.row_index()?;
        materialize_row(&index, self.table, &self.config, row_id)
    }

    pub fn row_type_for(&self, number: usize) -> Result<RowType, ViewError> {
        Ok(self.row_index()?.descriptor_at(number)?.row_type)
    }

    /// For data rows this is the type of the owning section
    pub fn section_type_for(&self, number: usize) -> Result<RowType, ViewError> {
        self.row_index()?.section_type_at(number)
    }

    /// Cached columns; `force_reload` recreates them from the table
    pub fn columns(&self, force_reload: bool) -> Result<Rc<[Column]>, ViewError> {
        if !force_reload {
            if let Some(columns) = self.columns.borrow().as_ref() {
                return Ok(Rc::clone(columns));
            }
        }

        let columns: Rc<[Column]> = build_column_index(self.table, &self.config)?.into();
        *self.columns.borrow_mut() = Some(Rc::clone(&columns));
        Ok(columns)
    }

    /// Width of a column as configured; testcase columns share the `tc` width
    pub fn column_width(&self, key: &str) -> Option<u32> {
        if FIXED_COLUMN_KEYS.contains(&key) {
            self.config.width_for(key)
        } else {
            self.config.width_for(TESTCASE_CONFIG_KEY)
        }
    }

    pub fn row_getter(&self) -> RowGetter<'_> {
        Box::new(move |number| self.row_for(number))
    }

    pub fn row_type_getter(&self) -> RowTypeGetter<'_> {
        Box::new(move |number| self.row_type_for(number))
    }

    pub fn section_type_getter(&self) -> RowTypeGetter<'_> {
        Box::new(move |number| self.section_type_for(number))
    }

    pub fn summary_predicate(&self) -> Box<dyn Fn() -> bool + '_> {
        Box::new(move || self.has_summary_section())
    }
}
