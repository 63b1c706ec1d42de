//! Joins the indexed sheets into one record per state.
//!
//! The weekly sheet is canonical: a state appears in the output exactly when it
//! has a row there. Every other sheet is optional per state; when a state has
//! no row in a sheet, each field drawn from it takes its default.

use calamine::DataType;
use tracing::{debug, info, instrument, warn};

use crate::coerce::{is_blank, to_float, to_int, to_text};
use crate::io::excel_read::{SheetIndex, WorkbookRow, WorkbookSheets};
use crate::model::{
    ActionEffectiveness, BudgetAllocation, CampaignDocument, HistoricalResults, RoiMetrics,
    StateRecord, Staffing, WeeklyPacing,
};
use crate::schema::{PACING_WEEKS, budget_column, staff_column, volunteer_column};

/// Rows describing one state, one per sheet. Sheets without a row for the
/// state contribute an empty row.
#[derive(Debug, Clone, Copy)]
pub struct StateRows<'a> {
    pub weekly: &'a WorkbookRow,
    pub type_action: &'a WorkbookRow,
    pub roi: &'a WorkbookRow,
    pub history: &'a WorkbookRow,
    pub voter: &'a WorkbookRow,
    pub staff: &'a WorkbookRow,
    pub volunteers: &'a WorkbookRow,
    pub budget: &'a WorkbookRow,
    pub combo: &'a WorkbookRow,
}

/// Builds the complete document, metadata included.
#[instrument(level = "info", skip_all)]
pub fn build_document(sheets: &WorkbookSheets) -> CampaignDocument {
    let document = CampaignDocument::from_states(build_states(sheets));
    info!(
        states = document.metadata.state_count,
        electoral_votes = document.metadata.total_electoral_votes,
        "campaign document assembled"
    );
    document
}

/// One record per canonical state, ordered by name.
pub fn build_states(sheets: &WorkbookSheets) -> Vec<StateRecord> {
    report_non_canonical(sheets);

    let empty = WorkbookRow::new();
    sheets
        .weekly
        .states()
        .map(|name| {
            let rows = StateRows {
                weekly: row_or_empty(&sheets.weekly, name, &empty),
                type_action: row_or_empty(&sheets.type_action, name, &empty),
                roi: row_or_empty(&sheets.roi, name, &empty),
                history: row_or_empty(&sheets.history, name, &empty),
                voter: row_or_empty(&sheets.voter, name, &empty),
                staff: row_or_empty(&sheets.staff, name, &empty),
                volunteers: row_or_empty(&sheets.volunteers, name, &empty),
                budget: row_or_empty(&sheets.budget, name, &empty),
                combo: row_or_empty(&sheets.combo, name, &empty),
            };
            build_state(name, &rows)
        })
        .collect()
}

/// Resolves every field of a single state.
pub fn build_state(name: &str, rows: &StateRows<'_>) -> StateRecord {
    let electoral_votes = to_int(
        first_present(&[
            cell(rows.weekly, "Electoral_Votes"),
            cell(rows.history, "Electoral_Votes_2024"),
        ]),
        0,
    );
    let competitiveness_tier = to_int(
        first_present(&[
            cell(rows.weekly, "Tier"),
            cell(rows.type_action, "Competitiveness Tier"),
        ]),
        4,
    );
    let region = to_text(
        first_present(&[cell(rows.type_action, "Region"), cell(rows.combo, "Region")]),
        "Unknown",
    );

    StateRecord {
        name: name.to_string(),
        abbreviation: to_text(cell(rows.weekly, "Abbreviation"), ""),
        electoral_votes,
        region,
        competitiveness_tier,
        historical: historical(rows.history),
        action_effectiveness: action_effectiveness(rows.type_action),
        roi: roi(rows.roi, rows.budget),
        staffing: staffing(rows),
        budget: budget(rows.budget),
        weekly_pacing: weekly_pacing(rows.weekly),
    }
}

/// Forward-chronological pacing. Output week `i` reads source column `21 - i`,
/// because the sheet numbers weeks backwards from election day.
pub fn weekly_pacing(row: &WorkbookRow) -> Vec<WeeklyPacing> {
    (1..=PACING_WEEKS)
        .map(|week| {
            let source_week = PACING_WEEKS + 1 - week;
            WeeklyPacing {
                week,
                staff: to_int(cell(row, &staff_column(source_week)), 0),
                volunteers: to_int(cell(row, &volunteer_column(source_week)), 0),
                budget_k: to_float(cell(row, &budget_column(source_week)), 0.0),
            }
        })
        .collect()
}

fn historical(row: &WorkbookRow) -> HistoricalResults {
    HistoricalResults {
        winner_2020: to_text(cell(row, "Winner_2020"), ""),
        winner_2016: to_text(cell(row, "Winner_2016"), ""),
        winner_2012: to_text(cell(row, "Winner_2012"), ""),
        winner_2008: to_text(cell(row, "Winner_2008"), ""),
        margin_2020: to_float(cell(row, "Margin_2020_Pct"), 0.0),
        margin_2016: to_float(cell(row, "Margin_2016_Pct"), 0.0),
        margin_2012: to_float(cell(row, "Margin_2012_Pct"), 0.0),
        margin_2008: to_float(cell(row, "Margin_2008_Pct"), 0.0),
        trend: to_text(cell(row, "Trend_2008_2020"), ""),
        turnout_2020: to_float(cell(row, "Turnout_2020_Pct"), 0.0),
        turnout_2016: to_float(cell(row, "Turnout_2016_Pct"), 0.0),
    }
}

fn action_effectiveness(row: &WorkbookRow) -> ActionEffectiveness {
    ActionEffectiveness {
        town_hall: to_int(cell(row, "Town Halls"), 2),
        ad_campaign: to_int(cell(row, "Ad Campaigns"), 2),
        debate: to_int(cell(row, "Debate Prep"), 1),
        rally: to_int(cell(row, "Rallies"), 2),
        opposition: to_int(cell(row, "Opposition Research"), 1),
        grassroots: to_int(cell(row, "Grassroots"), 2),
        fundraiser: to_int(cell(row, "Fundraising"), 2),
    }
}

// The media cost index lives on the budget sheet.
fn roi(row: &WorkbookRow, budget: &WorkbookRow) -> RoiMetrics {
    RoiMetrics {
        swing_potential_score: to_int(cell(row, "Swing_Potential_Score"), 15),
        roi_rating: to_text(cell(row, "ROI_Rating"), "Low"),
        spend_efficiency_rating: to_text(cell(row, "Spend_Efficiency_Rating"), "Low"),
        cost_per_ev: to_float(cell(row, "Cost_Per_EV_M"), 0.0),
        total_spend_2020_m: to_float(cell(row, "Total_Spend_2020_M"), 0.0),
        media_market_cost_index: to_float(cell(budget, "Media_Market_Cost_Index"), 1.0),
    }
}

fn staffing(rows: &StateRows<'_>) -> Staffing {
    let staff = rows.staff;
    let volunteers = rows.volunteers;
    Staffing {
        total_staff: to_int(cell(staff, "Total_Staff"), 10),
        state_leadership: to_int(cell(staff, "State_Leadership"), 1),
        field_organizers: to_int(cell(staff, "Field_Organizers"), 3),
        communications_staff: to_int(cell(staff, "Communications_Staff"), 1),
        regional_offices: to_int(
            first_present(&[
                cell(rows.voter, "Regional_Offices"),
                cell(rows.combo, "Regional_Offices"),
            ]),
            1,
        ),
        active_volunteers_peak: to_int(cell(volunteers, "Active_Volunteers_Peak"), 1000),
        volunteer_shifts_final_month: to_int(cell(volunteers, "Volunteer_Shifts_Final_Month"), 3000),
        registered_voters: to_int(
            first_present(&[
                cell(rows.voter, "Estimated_Registered_Voters"),
                cell(volunteers, "Registered_Voters"),
            ]),
            0,
        ),
    }
}

fn budget(row: &WorkbookRow) -> BudgetAllocation {
    BudgetAllocation {
        total_budget_m: to_float(cell(row, "Total_State_Budget_Millions"), 1.0),
        staff_payroll_m: to_float(cell(row, "Staff_Payroll_Millions"), 0.1),
        tv_advertising_m: to_float(cell(row, "TV_Advertising_Millions"), 0.1),
        digital_advertising_m: to_float(cell(row, "Digital_Advertising_Millions"), 0.05),
        gotv_operations_m: to_float(cell(row, "GOTV_Operations_Millions"), 0.05),
        early_vote_investment_pct: to_float(cell(row, "Early_Vote_Investment_Pct"), 20.0),
    }
}

fn row_or_empty<'a>(index: &'a SheetIndex, state: &str, empty: &'a WorkbookRow) -> &'a WorkbookRow {
    index.get(state).unwrap_or_else(|| {
        debug!(state, sheet = index.sheet(), "no row; using defaults");
        empty
    })
}

fn cell<'a>(row: &'a WorkbookRow, column: &str) -> Option<&'a DataType> {
    row.get(column)
}

/// First candidate holding a non-blank cell.
fn first_present<'a>(candidates: &[Option<&'a DataType>]) -> Option<&'a DataType> {
    candidates
        .iter()
        .copied()
        .find(|candidate| !is_blank(*candidate))
        .flatten()
}

fn report_non_canonical(sheets: &WorkbookSheets) {
    let others = [
        &sheets.type_action,
        &sheets.roi,
        &sheets.history,
        &sheets.voter,
        &sheets.staff,
        &sheets.volunteers,
        &sheets.budget,
        &sheets.combo,
    ];
    for index in others {
        for state in index.states() {
            if sheets.weekly.get(state).is_none() {
                warn!(
                    sheet = index.sheet(),
                    state,
                    "state is missing from the canonical sheet and will be dropped"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[(&str, DataType)]) -> WorkbookRow {
        cells
            .iter()
            .map(|(column, value)| (column.to_string(), value.clone()))
            .collect()
    }

    fn rows_with<'a>(empty: &'a WorkbookRow) -> StateRows<'a> {
        StateRows {
            weekly: empty,
            type_action: empty,
            roi: empty,
            history: empty,
            voter: empty,
            staff: empty,
            volunteers: empty,
            budget: empty,
            combo: empty,
        }
    }

    #[test]
    fn pacing_reverses_the_source_week_numbering() {
        let mut weekly = WorkbookRow::new();
        for source_week in 1..=PACING_WEEKS {
            // Staff_Wk20 = 5 ... Staff_Wk1 = 50
            let staff = 50.0 - (source_week as f64 - 1.0) * 45.0 / 19.0;
            weekly.insert(staff_column(source_week), DataType::Float(staff.round()));
            weekly.insert(budget_column(source_week), DataType::Float(source_week as f64));
        }

        let pacing = weekly_pacing(&weekly);

        assert_eq!(pacing.len(), 20);
        assert_eq!(pacing[0].week, 1);
        assert_eq!(pacing[0].staff, 5);
        assert_eq!(pacing[0].budget_k, 20.0);
        assert_eq!(pacing[19].week, 20);
        assert_eq!(pacing[19].staff, 50);
        assert_eq!(pacing[19].budget_k, 1.0);
        assert!(pacing.iter().all(|entry| entry.volunteers == 0));
    }

    #[test]
    fn empty_rows_produce_documented_defaults() {
        let empty = WorkbookRow::new();
        let record = build_state("Nowhere", &rows_with(&empty));

        assert_eq!(record.electoral_votes, 0);
        assert_eq!(record.competitiveness_tier, 4);
        assert_eq!(record.region, "Unknown");
        assert_eq!(record.abbreviation, "");
        assert_eq!(record.roi.swing_potential_score, 15);
        assert_eq!(record.roi.roi_rating, "Low");
        assert_eq!(record.roi.media_market_cost_index, 1.0);
        assert_eq!(record.staffing.total_staff, 10);
        assert_eq!(record.staffing.field_organizers, 3);
        assert_eq!(record.staffing.regional_offices, 1);
        assert_eq!(record.staffing.active_volunteers_peak, 1000);
        assert_eq!(record.staffing.volunteer_shifts_final_month, 3000);
        assert_eq!(record.budget.total_budget_m, 1.0);
        assert_eq!(record.budget.early_vote_investment_pct, 20.0);
        assert_eq!(record.action_effectiveness.debate, 1);
        assert_eq!(record.action_effectiveness.rally, 2);
        assert_eq!(record.weekly_pacing.len(), 20);
    }

    #[test]
    fn fallback_chains_prefer_the_first_source() {
        let weekly = row(&[("Electoral_Votes", DataType::Float(17.0))]);
        let history = row(&[("Electoral_Votes_2024", DataType::Float(18.0))]);
        let type_action = row(&[("Region", DataType::String("Midwest".into()))]);
        let combo = row(&[("Region", DataType::String("Great Lakes".into()))]);
        let empty = WorkbookRow::new();
        let rows = StateRows {
            weekly: &weekly,
            history: &history,
            type_action: &type_action,
            combo: &combo,
            ..rows_with(&empty)
        };

        let record = build_state("Ohio", &rows);
        assert_eq!(record.electoral_votes, 17);
        assert_eq!(record.region, "Midwest");
    }

    #[test]
    fn fallback_chains_skip_absent_and_blank_cells() {
        let weekly = row(&[("Electoral_Votes", DataType::Empty)]);
        let history = row(&[("Electoral_Votes_2024", DataType::Float(18.0))]);
        let combo = row(&[
            ("Region", DataType::String("Great Lakes".into())),
            ("Regional_Offices", DataType::Float(6.0)),
        ]);
        let volunteers = row(&[("Registered_Voters", DataType::Float(8_000_000.0))]);
        let empty = WorkbookRow::new();
        let rows = StateRows {
            weekly: &weekly,
            history: &history,
            combo: &combo,
            volunteers: &volunteers,
            ..rows_with(&empty)
        };

        let record = build_state("Ohio", &rows);
        assert_eq!(record.electoral_votes, 18);
        assert_eq!(record.region, "Great Lakes");
        assert_eq!(record.staffing.regional_offices, 6);
        assert_eq!(record.staffing.registered_voters, 8_000_000);
    }

    #[test]
    fn missing_total_staff_cell_defaults_to_ten() {
        let staff = row(&[("Field_Organizers", DataType::Float(40.0))]);
        let empty = WorkbookRow::new();
        let rows = StateRows {
            staff: &staff,
            ..rows_with(&empty)
        };

        let record = build_state("Iowa", &rows);
        assert_eq!(record.staffing.total_staff, 10);
        assert_eq!(record.staffing.field_organizers, 40);
    }
}
