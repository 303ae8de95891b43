// 📋 Submission Models
// The common shape both pipeline snapshots reduce to, plus the per-role and
// per-category breakdowns shown in the summary report.
//
// Everything here is derived and read-only: built once per run, never mutated.

use serde::{Deserialize, Serialize};

// ============================================================================
// ROLES
// ============================================================================

/// The two household roles a Financial Status Report covers. Exactly one
/// income entry per role is expected in the submission object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Veteran,
    Spouse,
}

impl Role {
    /// Human-readable name for display
    pub fn name(&self) -> &str {
        match self {
            Role::Veteran => "Veteran",
            Role::Spouse => "Spouse",
        }
    }

    /// Key used by the normalized submission object (exact case, no fallback)
    pub fn submission_key(&self) -> &str {
        match self {
            Role::Veteran => "VETERAN",
            Role::Spouse => "SPOUSE",
        }
    }

    /// Key used by the pre-submit form data
    pub fn form_key(&self) -> &str {
        match self {
            Role::Veteran => "veteran",
            Role::Spouse => "spouse",
        }
    }
}

// ============================================================================
// AGGREGATED RESULT
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IncomeTotals {
    pub veteran: f64,
    pub spouse: f64,
    pub total: f64,
}

/// The comparable shape: both the pre-submit form and the submission object
/// reduce to this, so the comparator never needs to know which source it is
/// looking at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AggregatedResult {
    pub income: IncomeTotals,
    pub expenses: f64,
    pub discretionary_income: f64,
}

impl AggregatedResult {
    pub fn summary(&self) -> String {
        format!(
            "income ${:.2} (veteran ${:.2}, spouse ${:.2}), expenses ${:.2}, discretionary ${:.2}",
            self.income.total,
            self.income.veteran,
            self.income.spouse,
            self.expenses,
            self.discretionary_income
        )
    }
}

// ============================================================================
// REPORT BREAKDOWNS (display-only, from the submission object)
// ============================================================================

/// Per-role income lines for the summary report. The itemized fields are
/// optional in the source; absent ones render as "None".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IncomeDetail {
    pub gross_salary: Option<f64>,
    pub total_deductions: Option<f64>,
    pub net_take_home: Option<f64>,
    pub other_income: Option<f64>,
    pub net_income: f64,
}

/// Expense category lines for the summary report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExpenseDetail {
    pub rent_or_mortgage: Option<f64>,
    pub food: Option<f64>,
    pub utilities: Option<f64>,
    pub other_living_expenses: Option<f64>,
    pub installment_contracts_and_debts: Option<f64>,
    pub total: f64,
}
