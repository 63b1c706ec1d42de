use std::path::Path;

use rust_xlsxwriter::{Format, Workbook};
use tracing::{debug, instrument};

use crate::error::Result;
use crate::schema::{REQUIRED_SHEETS, columns_for};

/// A single cell to be written.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Empty,
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

/// A table that will be materialised as an Excel sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetTable {
    pub sheet_name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl SheetTable {
    pub fn new(sheet_name: impl Into<String>, columns: Vec<String>) -> Self {
        Self {
            sheet_name: sheet_name.into(),
            columns,
            rows: Vec::new(),
        }
    }
}

/// Represents all tables required to materialise the Excel workbook.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WorkbookData {
    pub tables: Vec<SheetTable>,
}

/// Blank planning workbook: every required sheet with its header row.
pub fn template_workbook() -> WorkbookData {
    let tables = REQUIRED_SHEETS
        .iter()
        .map(|sheet| SheetTable::new(*sheet, columns_for(sheet).unwrap_or_default()))
        .collect();
    WorkbookData { tables }
}

/// Writes the provided workbook data to the given path.
#[instrument(level = "debug", skip(workbook), fields(output = %path.display()))]
pub fn write_workbook(path: &Path, workbook: &WorkbookData) -> Result<()> {
    let mut workbook_writer = Workbook::new();
    let header_format = Format::new().set_bold();

    for table in &workbook.tables {
        let worksheet = workbook_writer.add_worksheet();
        worksheet.set_name(&table.sheet_name)?;

        for (col_idx, header) in table.columns.iter().enumerate() {
            worksheet.write_string_with_format(0, col_idx as u16, header, &header_format)?;
        }

        for (row_idx, row) in table.rows.iter().enumerate() {
            let excel_row = (row_idx + 1) as u32;
            for (col_idx, cell) in row.iter().enumerate() {
                match cell {
                    CellValue::Text(value) => {
                        worksheet.write_string(excel_row, col_idx as u16, value)?;
                    }
                    CellValue::Number(value) => {
                        worksheet.write_number(excel_row, col_idx as u16, *value)?;
                    }
                    CellValue::Empty => {}
                }
            }
        }

        worksheet.set_freeze_panes(1, 0)?;
        debug!(sheet = %table.sheet_name, rows = table.rows.len(), "sheet written");
    }

    workbook_writer.save(path)?;
    Ok(())
}
