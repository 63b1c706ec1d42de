//! Lookups over a generated document, as used by the simulator.

use crate::model::{
    BudgetAllocation, CampaignDocument, HistoricalResults, StateRecord, Staffing, WeeklyPacing,
};
use crate::schema::PACING_WEEKS;

/// Share of the combined state budgets handed to the two campaigns.
const STARTING_FUNDS_SHARE: f64 = 0.20;
const INCUMBENT_SPLIT: f64 = 0.55;
const CHALLENGER_SPLIT: f64 = 0.45;

/// Support is clamped to this band at the start of a game.
const MIN_SUPPORT: f64 = 25.0;
const MAX_SUPPORT: f64 = 75.0;

/// Opening war chests, in dollars.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StartingFunds {
    pub incumbent: f64,
    pub challenger: f64,
}

impl StartingFunds {
    /// Used when no generated document is available.
    pub const FALLBACK: StartingFunds = StartingFunds {
        incumbent: 220_000_000.0,
        challenger: 150_000_000.0,
    };
}

impl CampaignDocument {
    pub fn state(&self, name: &str) -> Option<&StateRecord> {
        self.states.iter().find(|state| state.name == name)
    }

    /// Pacing target for `week`, counted 1..=20 from the start of the run-up.
    pub fn weekly_target(&self, name: &str, week: u32) -> Option<&WeeklyPacing> {
        if !(1..=PACING_WEEKS).contains(&week) {
            return None;
        }
        self.state(name)?
            .weekly_pacing
            .iter()
            .find(|entry| entry.week == week)
    }

    pub fn staffing(&self, name: &str) -> Option<&Staffing> {
        self.state(name).map(|state| &state.staffing)
    }

    pub fn budget(&self, name: &str) -> Option<&BudgetAllocation> {
        self.state(name).map(|state| &state.budget)
    }

    /// A fifth of the combined state budgets, split 55/45 between incumbent
    /// and challenger.
    pub fn recommended_starting_funds(&self) -> StartingFunds {
        let total_dollars = self.metadata.total_budget_all_states_m * 1_000_000.0;
        let pool = total_dollars * STARTING_FUNDS_SHARE;
        StartingFunds {
            incumbent: pool * INCUMBENT_SPLIT,
            challenger: pool * CHALLENGER_SPLIT,
        }
    }
}

impl HistoricalResults {
    /// Recent elections weigh more: 40/30/20/10 from 2020 back to 2008.
    pub fn weighted_margin(&self) -> f64 {
        self.margin_2020 * 0.4 + self.margin_2016 * 0.3 + self.margin_2012 * 0.2 + self.margin_2008 * 0.1
    }
}

impl StateRecord {
    /// Opening `(incumbent, challenger)` support percentages.
    ///
    /// Both sides start level and move apart by half of the weighted margin
    /// plus `noise`; the 2020 winner's side gains. States won by "D" favour the
    /// incumbent.
    pub fn initial_support(&self, noise: f64) -> (f64, f64) {
        let half_margin = (self.historical.weighted_margin() + noise) / 2.0;
        let leading = (50.0 + half_margin).clamp(MIN_SUPPORT, MAX_SUPPORT);
        let trailing = (50.0 - half_margin).clamp(MIN_SUPPORT, MAX_SUPPORT);
        if self.historical.winner_2020 == "D" {
            (leading, trailing)
        } else {
            (trailing, leading)
        }
    }
}
