//! Cash-flow projection.
//!
//! Simple trend extrapolation from the last two months of bookkeeping:
//! apply each line's month-over-month growth rate one more time. Also
//! produces the rule-based insight sentence shown under the prediction
//! cards.

use crate::domain::error::{EngineError, Result};
use crate::domain::forecast::{CashFlowForecast, MonthlyFinancial};

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Project next month from chronologically ordered records.
///
/// Needs at least two months of history; a zero base month contributes
/// zero growth rather than dividing by it.
pub fn predict_next_month(history: &[MonthlyFinancial]) -> Result<CashFlowForecast> {
    if history.len() < 2 {
        return Err(EngineError::ValidationError(
            "Need at least 2 months of data for prediction".to_string(),
        ));
    }

    let last = &history[history.len() - 1];
    let prev = &history[history.len() - 2];

    let income_growth = if prev.income != 0.0 {
        (last.income - prev.income) / prev.income
    } else {
        0.0
    };
    let expense_growth = if prev.expenses != 0.0 {
        (last.expenses - prev.expenses) / prev.expenses
    } else {
        0.0
    };

    let income = round2(last.income * (1.0 + income_growth));
    let expenses = round2(last.expenses * (1.0 + expense_growth));

    Ok(CashFlowForecast {
        income,
        expenses,
        profit: round2(income - expenses),
        income_growth_pct: round2(income_growth * 100.0),
        expense_growth_pct: round2(expense_growth * 100.0),
        last_month: last.month.clone(),
        data_points: history.len(),
    })
}

/// One-sentence takeaway for the prediction panel.
pub fn financial_insight(forecast: &CashFlowForecast) -> String {
    let income_growth = forecast.income_growth_pct;
    let expense_growth = forecast.expense_growth_pct;

    if income_growth > expense_growth {
        format!(
            "Your business shows healthy growth with revenue increasing faster than expenses by {:.1}%. Maintain this trend for improved profitability.",
            income_growth - expense_growth
        )
    } else if expense_growth > income_growth {
        format!(
            "Expenses are growing {:.1}% faster than revenue. Consider cost control measures to protect profit margins.",
            expense_growth - income_growth
        )
    } else {
        "Revenue and expenses are growing at similar rates. Focus on increasing revenue while maintaining current expense levels for better cash flow.".to_string()
    }
}
