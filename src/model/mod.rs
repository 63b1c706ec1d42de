use serde::{Deserialize, Serialize};

/// The generated document consumed by the campaign simulator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignDocument {
    pub metadata: CampaignMetadata,
    /// One record per canonical state, ordered by name.
    pub states: Vec<StateRecord>,
}

/// Totals derived from the state records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignMetadata {
    pub total_electoral_votes: i64,
    /// Sum of every state's total budget in millions, rounded to cents.
    pub total_budget_all_states_m: f64,
    pub state_count: usize,
}

/// Everything known about a single state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateRecord {
    pub name: String,
    pub abbreviation: String,
    pub electoral_votes: i64,
    pub region: String,
    pub competitiveness_tier: i64,
    pub historical: HistoricalResults,
    pub action_effectiveness: ActionEffectiveness,
    pub roi: RoiMetrics,
    pub staffing: Staffing,
    pub budget: BudgetAllocation,
    /// Week 1 is the furthest from election day, week 20 the closest.
    pub weekly_pacing: Vec<WeeklyPacing>,
}

/// Past presidential results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalResults {
    pub winner_2020: String,
    pub winner_2016: String,
    pub winner_2012: String,
    pub winner_2008: String,
    pub margin_2020: f64,
    pub margin_2016: f64,
    pub margin_2012: f64,
    pub margin_2008: f64,
    pub trend: String,
    pub turnout_2020: f64,
    pub turnout_2016: f64,
}

/// How well each campaign action plays in the state, scored 1 to 3.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionEffectiveness {
    pub town_hall: i64,
    pub ad_campaign: i64,
    pub debate: i64,
    pub rally: i64,
    pub opposition: i64,
    pub grassroots: i64,
    pub fundraiser: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiMetrics {
    pub swing_potential_score: i64,
    pub roi_rating: String,
    pub spend_efficiency_rating: String,
    #[serde(rename = "costPerEV")]
    pub cost_per_ev: f64,
    pub total_spend_2020_m: f64,
    pub media_market_cost_index: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Staffing {
    pub total_staff: i64,
    pub state_leadership: i64,
    pub field_organizers: i64,
    pub communications_staff: i64,
    pub regional_offices: i64,
    pub active_volunteers_peak: i64,
    pub volunteer_shifts_final_month: i64,
    pub registered_voters: i64,
}

/// Planned spend, in millions unless the field says otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetAllocation {
    pub total_budget_m: f64,
    pub staff_payroll_m: f64,
    pub tv_advertising_m: f64,
    pub digital_advertising_m: f64,
    pub gotv_operations_m: f64,
    pub early_vote_investment_pct: f64,
}

/// Target resources for one week of the run-up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyPacing {
    pub week: u32,
    pub staff: i64,
    pub volunteers: i64,
    pub budget_k: f64,
}

impl CampaignMetadata {
    /// Aggregates totals over `states`. The budget sum is rounded once, after
    /// adding every term.
    pub fn summarize(states: &[StateRecord]) -> Self {
        let total_electoral_votes = states.iter().map(|state| state.electoral_votes).sum();
        let total_budget: f64 = states.iter().map(|state| state.budget.total_budget_m).sum();
        Self {
            total_electoral_votes,
            total_budget_all_states_m: round_to_cents(total_budget),
            state_count: states.len(),
        }
    }
}

impl CampaignDocument {
    /// Wraps `states` with freshly computed metadata.
    pub fn from_states(states: Vec<StateRecord>) -> Self {
        Self {
            metadata: CampaignMetadata::summarize(&states),
            states,
        }
    }
}

/// Rounds on the exact decimal expansion, ties to even, so 16.125 becomes
/// 16.12 and 1.115 (stored just below) becomes 1.11.
fn round_to_cents(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}
