#![allow(dead_code)]

use std::path::Path;

use campaign_data::io::excel_write::{self, CellValue, SheetTable, WorkbookData};
use campaign_data::schema::{
    self, BUDGET_SHEET, HISTORY_SHEET, STAFF_SHEET, TYPE_ACTION_SHEET,
    WEEKLY_SHEET,
};

/// Starts a workbook containing every required sheet with headers only.
pub fn blank_workbook() -> WorkbookData {
    excel_write::template_workbook()
}

/// Appends a row to `sheet`, placing each `(column, value)` under its header.
pub fn push_row(workbook: &mut WorkbookData, sheet: &str, cells: &[(&str, CellValue)]) {
    let table = table_mut(workbook, sheet);
    let mut row = vec![CellValue::Empty; table.columns.len()];
    for (column, value) in cells {
        let position = table
            .columns
            .iter()
            .position(|header| header == column)
            .unwrap_or_else(|| panic!("column {column} not on sheet {sheet}"));
        row[position] = value.clone();
    }
    table.rows.push(row);
}

pub fn drop_sheet(workbook: &mut WorkbookData, sheet: &str) {
    workbook.tables.retain(|table| table.sheet_name != sheet);
}

fn table_mut<'a>(workbook: &'a mut WorkbookData, sheet: &str) -> &'a mut SheetTable {
    workbook
        .tables
        .iter_mut()
        .find(|table| table.sheet_name == sheet)
        .unwrap_or_else(|| panic!("sheet {sheet} not in workbook"))
}

/// Pacing cells rising linearly from 5 staff in `Wk20` to 50 in `Wk1`, with
/// the budget column set to the source week number.
pub fn pacing_cells() -> Vec<(String, CellValue)> {
    let mut cells = Vec::new();
    for source_week in 1..=schema::PACING_WEEKS {
        let staff = 50.0 - (source_week as f64 - 1.0) * 45.0 / 19.0;
        cells.push((schema::staff_column(source_week), CellValue::Number(staff.round())));
        cells.push((
            schema::volunteer_column(source_week),
            CellValue::Number(staff.round() * 10.0),
        ));
        cells.push((schema::budget_column(source_week), CellValue::Number(source_week as f64)));
    }
    cells
}

/// Three canonical states (Ohio, Alaska, Alabama) plus Texas, which only
/// appears on the history sheet.
///
/// Ohio is fully described except for its Total_Staff cell, Alaska takes its
/// electoral votes from the history sheet, and Alabama appears nowhere but the
/// weekly sheet.
pub fn campaign_workbook() -> WorkbookData {
    let mut workbook = blank_workbook();

    let mut ohio: Vec<(String, CellValue)> = vec![
        ("State".into(), "Ohio".into()),
        ("Abbreviation".into(), "OH".into()),
        ("Electoral_Votes".into(), 17.0.into()),
        ("Tier".into(), 2.0.into()),
    ];
    ohio.extend(pacing_cells());
    let ohio: Vec<(&str, CellValue)> = ohio
        .iter()
        .map(|(column, value)| (column.as_str(), value.clone()))
        .collect();
    push_row(&mut workbook, WEEKLY_SHEET, &ohio);
    push_row(
        &mut workbook,
        WEEKLY_SHEET,
        &[("State", "Alaska".into()), ("Abbreviation", "AK".into())],
    );
    push_row(
        &mut workbook,
        WEEKLY_SHEET,
        &[
            ("State", "Alabama".into()),
            ("Abbreviation", "AL".into()),
            ("Electoral_Votes", 9.0.into()),
        ],
    );

    push_row(
        &mut workbook,
        TYPE_ACTION_SHEET,
        &[
            ("State", "Ohio".into()),
            ("Region", "Midwest".into()),
            ("Rallies", 3.0.into()),
            ("Debate Prep", "n/a".into()),
        ],
    );

    push_row(
        &mut workbook,
        HISTORY_SHEET,
        &[
            ("State", "Ohio".into()),
            ("Electoral_Votes_2024", 18.0.into()),
            ("Winner_2020", "R".into()),
            ("Margin_2020_Pct", 8.0.into()),
            ("Margin_2016_Pct", 8.1.into()),
        ],
    );
    push_row(
        &mut workbook,
        HISTORY_SHEET,
        &[("State", "Alaska".into()), ("Electoral_Votes_2024", 3.0.into())],
    );
    push_row(
        &mut workbook,
        HISTORY_SHEET,
        &[("State", "Texas".into()), ("Electoral_Votes_2024", 40.0.into())],
    );

    push_row(
        &mut workbook,
        STAFF_SHEET,
        &[("State", "Ohio".into()), ("Field_Organizers", 42.0.into())],
    );

    push_row(
        &mut workbook,
        BUDGET_SHEET,
        &[
            ("State", "Ohio".into()),
            ("Total_State_Budget_Millions", 12.345.into()),
            ("Media_Market_Cost_Index", 1.3.into()),
        ],
    );
    push_row(
        &mut workbook,
        BUDGET_SHEET,
        &[("State", "Alaska".into()), ("Total_State_Budget_Millions", 3.111.into())],
    );

    workbook
}

pub fn write(path: &Path, workbook: &WorkbookData) {
    excel_write::write_workbook(path, workbook).expect("fixture workbook written");
}
