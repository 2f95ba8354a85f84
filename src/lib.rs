//! Flattens decision tables (sections, subsections, testcases) into the
//! row/column shape a spreadsheet-like grid widget consumes.

pub mod config;
pub mod error;
pub mod model;
pub mod view;

pub use config::ViewConfig;
pub use error::ViewError;
pub use model::{CellValue, DecisionTable, RowId, RowType, Section, Testcase};
pub use view::columns::Column;
pub use view::materialize::RowView;
pub use view::rowindex::{RowDescriptor, RowIndex};
pub use view::ViewProjector;
