// ⚖️ Discrepancy Comparator - Reconcile the two pipeline snapshots
// Compares the pre-submit aggregation against the submission-object
// aggregation field by field. A mismatch is data for the report, never an
// error: the run always continues.
//
// Comparison is tolerance-based, not exact float equality: the pre-submit
// total accumulates many small summations, so sub-cent drift must not count
// as a discrepancy.

use crate::model::AggregatedResult;
use serde::{Deserialize, Serialize};

/// Differences smaller than half a cent are treated as equal.
pub const DEFAULT_TOLERANCE: f64 = 0.005;

// ============================================================================
// COMPARISON FIELDS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComparisonField {
    Income,
    Expenses,
    DiscretionaryIncome,
}

impl ComparisonField {
    /// Field key as it appears in the comparison report
    pub fn name(&self) -> &str {
        match self {
            ComparisonField::Income => "income",
            ComparisonField::Expenses => "expenses",
            ComparisonField::DiscretionaryIncome => "discretionaryIncome",
        }
    }
}

// ============================================================================
// COMPARISON REPORT
// ============================================================================

/// One mismatched field, with the value each source produced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldDiff {
    pub field: ComparisonField,
    pub pre_submit: f64,
    pub submission: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub discrepancies: Vec<FieldDiff>,
    pub compared_at: chrono::DateTime<chrono::Utc>,
}

impl ComparisonReport {
    /// True when the two snapshots agree on every field
    pub fn is_consistent(&self) -> bool {
        self.discrepancies.is_empty()
    }

    pub fn summary(&self) -> String {
        if self.is_consistent() {
            "Snapshots agree on income, expenses and discretionary income".to_string()
        } else {
            format!(
                "{} discrepancies: {}",
                self.discrepancies.len(),
                self.discrepancies
                    .iter()
                    .map(|d| d.field.name())
                    .collect::<Vec<_>>()
                    .join(", ")
            )
        }
    }
}

// ============================================================================
// COMPARATOR
// ============================================================================

pub struct Comparator {
    /// Absolute difference below which two values count as equal
    pub tolerance: f64,
}

impl Comparator {
    pub fn new() -> Self {
        Comparator {
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    pub fn with_tolerance(tolerance: f64) -> Self {
        Comparator { tolerance }
    }

    /// Compare two aggregations. Only fields whose values differ beyond the
    /// tolerance appear in the result; an empty report means the sources
    /// agree.
    pub fn compare(&self, pre: &AggregatedResult, sub: &AggregatedResult) -> ComparisonReport {
        let checks = [
            (ComparisonField::Income, pre.income.total, sub.income.total),
            (ComparisonField::Expenses, pre.expenses, sub.expenses),
            (
                ComparisonField::DiscretionaryIncome,
                pre.discretionary_income,
                sub.discretionary_income,
            ),
        ];

        let discrepancies = checks
            .iter()
            .filter(|(_, a, b)| (a - b).abs() >= self.tolerance)
            .map(|&(field, pre_submit, submission)| FieldDiff {
                field,
                pre_submit,
                submission,
            })
            .collect();

        ComparisonReport {
            discrepancies,
            compared_at: chrono::Utc::now(),
        }
    }
}

impl Default for Comparator {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::IncomeTotals;

    fn result(veteran: f64, spouse: f64, expenses: f64, discretionary: f64) -> AggregatedResult {
        AggregatedResult {
            income: IncomeTotals {
                veteran,
                spouse,
                total: veteran + spouse,
            },
            expenses,
            discretionary_income: discretionary,
        }
    }

    #[test]
    fn test_compare_identical_is_empty() {
        let a = result(3000.0, 1500.0, 5000.0, -500.0);
        let report = Comparator::new().compare(&a, &a);

        assert!(report.is_consistent());
        assert!(report.discrepancies.is_empty());
    }

    #[test]
    fn test_compare_reports_only_differing_fields() {
        let pre = result(3000.0, 1500.0, 5000.0, -500.0);
        let sub = result(3000.0, 1500.0, 4800.0, -500.0);

        let report = Comparator::new().compare(&pre, &sub);

        assert_eq!(report.discrepancies.len(), 1);
        let diff = report.discrepancies[0];
        assert_eq!(diff.field, ComparisonField::Expenses);
        assert_eq!(diff.pre_submit, 5000.0);
        assert_eq!(diff.submission, 4800.0);
    }

    #[test]
    fn test_compare_all_fields_differ() {
        let pre = result(3000.0, 1500.0, 5000.0, -500.0);
        let sub = result(2000.0, 1500.0, 4000.0, -500.5);

        let report = Comparator::new().compare(&pre, &sub);
        assert_eq!(report.discrepancies.len(), 3);
        assert_eq!(report.discrepancies[0].field, ComparisonField::Income);
        assert_eq!(report.discrepancies[1].field, ComparisonField::Expenses);
        assert_eq!(
            report.discrepancies[2].field,
            ComparisonField::DiscretionaryIncome
        );
    }

    #[test]
    fn test_sub_cent_drift_is_not_a_discrepancy() {
        let pre = result(3000.0, 1500.0, 5000.0, -500.0);
        let sub = result(3000.0, 1500.0, 5000.004, -500.0);

        let report = Comparator::new().compare(&pre, &sub);
        assert!(report.is_consistent());
    }

    #[test]
    fn test_one_cent_difference_is_reported() {
        let pre = result(3000.0, 1500.0, 5000.0, -500.0);
        let sub = result(3000.0, 1500.0, 5000.01, -500.0);

        let report = Comparator::new().compare(&pre, &sub);
        assert_eq!(report.discrepancies.len(), 1);
    }

    #[test]
    fn test_custom_tolerance() {
        let pre = result(3000.0, 1500.0, 5000.0, -500.0);
        let sub = result(3000.0, 1500.0, 5004.0, -500.0);

        let loose = Comparator::with_tolerance(5.0);
        assert!(loose.compare(&pre, &sub).is_consistent());

        let strict = Comparator::with_tolerance(1.0);
        assert!(!strict.compare(&pre, &sub).is_consistent());
    }

    #[test]
    fn test_summary_names_fields() {
        let pre = result(3000.0, 1500.0, 5000.0, -500.0);
        let sub = result(3000.0, 1400.0, 5000.0, -500.0);

        let report = Comparator::new().compare(&pre, &sub);
        assert!(report.summary().contains("income"));
    }
}
