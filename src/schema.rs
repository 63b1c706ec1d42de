//! Names of the sheets and columns making up a campaign planning workbook.

/// Column every sheet is keyed by.
pub const STATE_COLUMN: &str = "State";

/// Number of weeks covered by the pacing plan.
pub const PACING_WEEKS: u32 = 20;

pub const TYPE_ACTION_SHEET: &str = "Type Action";
/// Canonical sheet: its rows define which states end up in the output.
pub const WEEKLY_SHEET: &str = "Wk last 20";
pub const ROI_SHEET: &str = "ROI Investment";
pub const HISTORY_SHEET: &str = "Hist dat";
pub const VOTER_SHEET: &str = "Voter Data";
pub const STAFF_SHEET: &str = "Staff Type";
pub const VOLUNTEER_SHEET: &str = "Volunteers";
// Spelling matches the planning workbook.
pub const BUDGET_SHEET: &str = "budget Alllocations";
pub const COMBO_SHEET: &str = "Combo1";

/// Every sheet a conversion needs, in the order they are loaded.
pub const REQUIRED_SHEETS: [&str; 9] = [
    TYPE_ACTION_SHEET,
    WEEKLY_SHEET,
    ROI_SHEET,
    HISTORY_SHEET,
    VOTER_SHEET,
    STAFF_SHEET,
    VOLUNTEER_SHEET,
    BUDGET_SHEET,
    COMBO_SHEET,
];

const TYPE_ACTION_COLUMNS: &[&str] = &[
    STATE_COLUMN,
    "Region",
    "Competitiveness Tier",
    "Town Halls",
    "Ad Campaigns",
    "Debate Prep",
    "Rallies",
    "Opposition Research",
    "Grassroots",
    "Fundraising",
];

const ROI_COLUMNS: &[&str] = &[
    STATE_COLUMN,
    "Swing_Potential_Score",
    "ROI_Rating",
    "Spend_Efficiency_Rating",
    "Cost_Per_EV_M",
    "Total_Spend_2020_M",
];

const HISTORY_COLUMNS: &[&str] = &[
    STATE_COLUMN,
    "Electoral_Votes_2024",
    "Winner_2020",
    "Winner_2016",
    "Winner_2012",
    "Winner_2008",
    "Margin_2020_Pct",
    "Margin_2016_Pct",
    "Margin_2012_Pct",
    "Margin_2008_Pct",
    "Trend_2008_2020",
    "Turnout_2020_Pct",
    "Turnout_2016_Pct",
];

const VOTER_COLUMNS: &[&str] = &[STATE_COLUMN, "Estimated_Registered_Voters", "Regional_Offices"];

const STAFF_COLUMNS: &[&str] = &[
    STATE_COLUMN,
    "Total_Staff",
    "State_Leadership",
    "Field_Organizers",
    "Communications_Staff",
];

const VOLUNTEER_COLUMNS: &[&str] = &[
    STATE_COLUMN,
    "Active_Volunteers_Peak",
    "Volunteer_Shifts_Final_Month",
    "Registered_Voters",
];

const BUDGET_COLUMNS: &[&str] = &[
    STATE_COLUMN,
    "Total_State_Budget_Millions",
    "Staff_Payroll_Millions",
    "TV_Advertising_Millions",
    "Digital_Advertising_Millions",
    "GOTV_Operations_Millions",
    "Early_Vote_Investment_Pct",
    "Media_Market_Cost_Index",
];

const COMBO_COLUMNS: &[&str] = &[STATE_COLUMN, "Region", "Regional_Offices"];

/// Staff head-count column for a source week (`Wk20` is the oldest).
pub fn staff_column(source_week: u32) -> String {
    format!("Staff_Wk{source_week}")
}

/// Volunteer count column for a source week.
pub fn volunteer_column(source_week: u32) -> String {
    format!("Vol_Wk{source_week}")
}

/// Budget (thousands) column for a source week.
pub fn budget_column(source_week: u32) -> String {
    format!("Budget_Wk{source_week}_K")
}

/// Header row the converter reads from the named sheet, or `None` for sheets
/// it does not know about.
pub fn columns_for(sheet: &str) -> Option<Vec<String>> {
    let fixed: &[&str] = match sheet {
        WEEKLY_SHEET => return Some(weekly_columns()),
        TYPE_ACTION_SHEET => TYPE_ACTION_COLUMNS,
        ROI_SHEET => ROI_COLUMNS,
        HISTORY_SHEET => HISTORY_COLUMNS,
        VOTER_SHEET => VOTER_COLUMNS,
        STAFF_SHEET => STAFF_COLUMNS,
        VOLUNTEER_SHEET => VOLUNTEER_COLUMNS,
        BUDGET_SHEET => BUDGET_COLUMNS,
        COMBO_SHEET => COMBO_COLUMNS,
        _ => return None,
    };
    Some(fixed.iter().map(|column| column.to_string()).collect())
}

fn weekly_columns() -> Vec<String> {
    let mut columns: Vec<String> = [STATE_COLUMN, "Abbreviation", "Electoral_Votes", "Tier"]
        .iter()
        .map(|column| column.to_string())
        .collect();
    let source_weeks = (1..=PACING_WEEKS).rev();
    columns.extend(source_weeks.clone().map(staff_column));
    columns.extend(source_weeks.clone().map(volunteer_column));
    columns.extend(source_weeks.map(budget_column));
    columns
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_required_sheet_has_a_keyed_header() {
        for sheet in REQUIRED_SHEETS {
            let columns = columns_for(sheet).expect("known sheet");
            assert_eq!(columns.first().map(String::as_str), Some(STATE_COLUMN));
        }
    }

    #[test]
    fn weekly_header_lists_oldest_week_first() {
        let columns = columns_for(WEEKLY_SHEET).expect("weekly sheet");
        assert_eq!(columns.len(), 4 + 3 * PACING_WEEKS as usize);
        assert_eq!(columns[4], "Staff_Wk20");
        assert_eq!(columns[23], "Staff_Wk1");
        assert_eq!(columns.last().map(String::as_str), Some("Budget_Wk1_K"));
    }
}
