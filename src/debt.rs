// 💳 Debt-Capacity Checker
// Validates the asserted "amount that can be paid toward debt" against the
// amount the discretionary-income figures imply. Under this policy debt
// capacity only exists as a deficit: a positive discretionary income means no
// extra debt payment is expected, so the expected amount is zero.
//
// Committed-amount sources, in priority order:
//   1. structured field discretionaryIncome.amountCanBePaidTowardDebt
//   2. fallback scan of free text (pre-extracted from the generated PDF)
// A document with neither is not a failure; the report shows "None".

use crate::compare::DEFAULT_TOLERANCE;
use crate::extract::{self, AuditError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// CHECK RESULT
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DebtStatus {
    /// Committed amount is consistent with the derived capacity
    Matches,

    /// Committed amount is larger than the derived capacity
    ExceedsBudget,

    /// Declared discretionary income is negative; the committed amount
    /// cannot be validated against a negative budget. Manual review.
    NegativeIncomeWarning,
}

impl DebtStatus {
    pub fn name(&self) -> &str {
        match self {
            DebtStatus::Matches => "Matches",
            DebtStatus::ExceedsBudget => "ExceedsBudget",
            DebtStatus::NegativeIncomeWarning => "NegativeIncomeWarning",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DebtCapacityCheck {
    /// Derived capacity: the computed discretionary income when negative,
    /// zero otherwise
    pub expected: f64,

    /// Asserted amount, when either source produced one
    pub committed: Option<f64>,

    pub status: DebtStatus,
}

// ============================================================================
// CHECK
// ============================================================================

/// Classify the committed amount against the derived capacity.
///
/// `computed_discretionary` is income-less-expenses from our own aggregation;
/// `declared_discretionary` is the submitter's asserted figure, when one was
/// provided.
pub fn check_debt_capacity(
    computed_discretionary: f64,
    declared_discretionary: Option<f64>,
    committed: Option<f64>,
) -> DebtCapacityCheck {
    let expected = if computed_discretionary < 0.0 {
        computed_discretionary
    } else {
        0.0
    };

    let status = if declared_discretionary.map(|d| d < 0.0).unwrap_or(false) {
        DebtStatus::NegativeIncomeWarning
    } else if committed.map(|c| c > expected + DEFAULT_TOLERANCE).unwrap_or(false) {
        DebtStatus::ExceedsBudget
    } else {
        DebtStatus::Matches
    };

    DebtCapacityCheck {
        expected,
        committed,
        status,
    }
}

// ============================================================================
// COMMITTED-AMOUNT SOURCES
// ============================================================================

/// Primary source: the structured field on the submission object. Absent is
/// None, not an error.
pub fn committed_from_submission(root: &Value) -> Result<Option<f64>, AuditError> {
    let section = extract::section(root, &["discretionaryIncome"])?;
    extract::optional_amount(section, "amountCanBePaidTowardDebt")
}

/// Fallback source: scan free text for the literal phrase the generated
/// document carries. No match is None (pattern-not-found is non-fatal).
pub fn committed_from_text(text: &str) -> Option<f64> {
    let pattern = Regex::new(r"Amount that can be paid toward debt: \$(\d+\.\d+)").unwrap();
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_expected_is_zero_when_discretionary_non_negative() {
        let check = check_debt_capacity(1200.0, None, Some(9999.0));
        assert_eq!(check.expected, 0.0);

        let check = check_debt_capacity(0.0, None, None);
        assert_eq!(check.expected, 0.0);
    }

    #[test]
    fn test_expected_is_deficit_when_discretionary_negative() {
        let check = check_debt_capacity(-500.0, None, None);
        assert_eq!(check.expected, -500.0);
    }

    #[test]
    fn test_committed_over_budget() {
        // veteran 3000 + spouse 1500 - expenses 5000 => -500 deficit
        let check = check_debt_capacity(-500.0, None, Some(600.0));

        assert_eq!(check.expected, -500.0);
        assert_eq!(check.committed, Some(600.0));
        assert_eq!(check.status, DebtStatus::ExceedsBudget);
    }

    #[test]
    fn test_committed_within_budget_matches() {
        let check = check_debt_capacity(-500.0, None, Some(-500.0));
        assert_eq!(check.status, DebtStatus::Matches);
    }

    #[test]
    fn test_missing_committed_amount_matches() {
        let check = check_debt_capacity(-500.0, None, None);
        assert_eq!(check.status, DebtStatus::Matches);
        assert_eq!(check.committed, None);
    }

    #[test]
    fn test_negative_declared_income_warns() {
        let check = check_debt_capacity(-500.0, Some(-500.0), Some(600.0));
        assert_eq!(check.status, DebtStatus::NegativeIncomeWarning);
    }

    #[test]
    fn test_positive_declared_income_does_not_warn() {
        let check = check_debt_capacity(100.0, Some(100.0), Some(600.0));
        assert_eq!(check.status, DebtStatus::ExceedsBudget);
    }

    #[test]
    fn test_committed_from_text_match() {
        let text = "Financial Status Report\nAmount that can be paid toward debt: $250.00\n";
        assert_eq!(committed_from_text(text), Some(250.0));
    }

    #[test]
    fn test_committed_from_text_no_match() {
        assert_eq!(committed_from_text("no amounts here"), None);
        // Missing cents: pattern requires a decimal amount
        assert_eq!(
            committed_from_text("Amount that can be paid toward debt: $250"),
            None
        );
    }

    #[test]
    fn test_committed_from_submission() {
        let root = json!({
            "discretionaryIncome": {"amountCanBePaidTowardDebt": "250.00"}
        });
        assert_eq!(committed_from_submission(&root).unwrap(), Some(250.0));

        let absent = json!({"discretionaryIncome": {}});
        assert_eq!(committed_from_submission(&absent).unwrap(), None);
    }

    #[test]
    fn test_committed_from_submission_missing_section() {
        let err = committed_from_submission(&json!({})).unwrap_err();
        assert_eq!(err, AuditError::missing("discretionaryIncome"));
    }
}
