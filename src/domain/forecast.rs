// ============================================================
// CASH FLOW TYPES
// ============================================================

use serde::{Deserialize, Serialize};

/// One month of bookkeeping, as entered in the cash-flow panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyFinancial {
    /// Month key, e.g. "2024-01". Records are expected in
    /// chronological order.
    pub month: String,
    pub income: f64,
    pub expenses: f64,
    pub profit: f64,
}

impl MonthlyFinancial {
    pub fn new(month: impl Into<String>, income: f64, expenses: f64) -> Self {
        Self {
            month: month.into(),
            income,
            expenses,
            profit: income - expenses,
        }
    }
}

/// Next-month projection derived from the last two records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlowForecast {
    pub income: f64,
    pub expenses: f64,
    pub profit: f64,
    /// Month-over-month growth rates, in percent.
    pub income_growth_pct: f64,
    pub expense_growth_pct: f64,
    /// Month key the projection extends from.
    pub last_month: String,
    pub data_points: usize,
}
