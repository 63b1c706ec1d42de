use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use calamine::{DataType, Reader, Xlsx, open_workbook};
use tracing::{debug, info, instrument, warn};

use crate::coerce::{is_blank, to_text};
use crate::error::{Result, ToolError};
use crate::schema::{
    BUDGET_SHEET, COMBO_SHEET, HISTORY_SHEET, ROI_SHEET, STAFF_SHEET, STATE_COLUMN,
    TYPE_ACTION_SHEET, VOLUNTEER_SHEET, VOTER_SHEET, WEEKLY_SHEET,
};

/// Column header → raw cell for one data row.
pub type WorkbookRow = HashMap<String, DataType>;

/// Rows of a single sheet keyed by state name.
///
/// Keys are unique. When a sheet lists the same state twice the later row
/// replaces the earlier one and the state is remembered in
/// [`SheetIndex::duplicates`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetIndex {
    sheet: String,
    rows: BTreeMap<String, WorkbookRow>,
    duplicates: Vec<String>,
}

impl SheetIndex {
    /// Indexes `rows`, the first of which is the header row.
    ///
    /// Rows whose first cell is blank are skipped, as are rows without a state
    /// name. A sheet with data but no `State` header cannot be keyed and is
    /// rejected.
    pub fn from_rows<'a, I>(sheet: &str, rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a [DataType]>,
    {
        let mut index = SheetIndex {
            sheet: sheet.to_string(),
            ..SheetIndex::default()
        };

        let mut rows = rows.into_iter();
        let headers: Vec<String> = match rows.next() {
            Some(first_row) => first_row
                .iter()
                .map(|cell| to_text(Some(cell), "").trim().to_string())
                .collect(),
            None => return Ok(index),
        };

        let mut data_rows = rows.filter(|row| !is_blank(row.first())).peekable();
        if data_rows.peek().is_none() {
            return Ok(index);
        }

        let state_col = headers
            .iter()
            .position(|header| header == STATE_COLUMN)
            .ok_or_else(|| ToolError::MissingColumn {
                sheet: sheet.to_string(),
                column: STATE_COLUMN.to_string(),
            })?;

        for row in data_rows {
            let state = to_text(row.get(state_col), "").trim().to_string();
            if state.is_empty() {
                debug!(sheet, "skipping row without a state name");
                continue;
            }

            let record: WorkbookRow = headers
                .iter()
                .zip(row.iter())
                .filter(|(header, _)| !header.is_empty())
                .map(|(header, cell)| (header.clone(), cell.clone()))
                .collect();

            if index.rows.insert(state.clone(), record).is_some() {
                warn!(sheet, state = %state, "duplicate state row; keeping the later one");
                index.duplicates.push(state);
            }
        }

        Ok(index)
    }

    /// Name of the sheet the rows came from.
    pub fn sheet(&self) -> &str {
        &self.sheet
    }

    pub fn get(&self, state: &str) -> Option<&WorkbookRow> {
        self.rows.get(state)
    }

    /// State names in ascending order.
    pub fn states(&self) -> impl Iterator<Item = &str> {
        self.rows.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// States whose row appeared more than once, in the order the repeats were met.
    pub fn duplicates(&self) -> &[String] {
        &self.duplicates
    }
}

/// All indexed sheets a conversion draws from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkbookSheets {
    pub type_action: SheetIndex,
    /// Canonical list of states, plus pacing, abbreviation, electoral votes and tier.
    pub weekly: SheetIndex,
    pub roi: SheetIndex,
    pub history: SheetIndex,
    pub voter: SheetIndex,
    pub staff: SheetIndex,
    pub volunteers: SheetIndex,
    pub budget: SheetIndex,
    pub combo: SheetIndex,
}

/// Opens the workbook at `path` and indexes every required sheet.
#[instrument(level = "info", skip_all, fields(input = %path.display()))]
pub fn load_workbook(path: &Path) -> Result<WorkbookSheets> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;

    let sheets = WorkbookSheets {
        type_action: read_sheet_index(&mut workbook, TYPE_ACTION_SHEET)?,
        weekly: read_sheet_index(&mut workbook, WEEKLY_SHEET)?,
        roi: read_sheet_index(&mut workbook, ROI_SHEET)?,
        history: read_sheet_index(&mut workbook, HISTORY_SHEET)?,
        voter: read_sheet_index(&mut workbook, VOTER_SHEET)?,
        staff: read_sheet_index(&mut workbook, STAFF_SHEET)?,
        volunteers: read_sheet_index(&mut workbook, VOLUNTEER_SHEET)?,
        budget: read_sheet_index(&mut workbook, BUDGET_SHEET)?,
        combo: read_sheet_index(&mut workbook, COMBO_SHEET)?,
    };
    info!(states = sheets.weekly.len(), "indexed campaign workbook");
    Ok(sheets)
}

/// Reads `name` from `workbook` and indexes its rows by state.
pub fn read_sheet_index<R: std::io::Read + std::io::Seek>(
    workbook: &mut Xlsx<R>,
    name: &str,
) -> Result<SheetIndex> {
    let range = read_required_sheet(workbook, name)?;
    let index = SheetIndex::from_rows(name, range.rows())?;
    debug!(sheet = name, rows = index.len(), "indexed sheet");
    Ok(index)
}

fn read_required_sheet<R: std::io::Read + std::io::Seek>(
    workbook: &mut Xlsx<R>,
    name: &str,
) -> Result<calamine::Range<DataType>> {
    let range_result = workbook
        .worksheet_range(name)
        .ok_or_else(|| ToolError::MissingSheet(name.to_string()))?;
    let range = range_result.map_err(ToolError::from)?;
    Ok(range)
}
