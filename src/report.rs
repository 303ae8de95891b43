// 📝 Report Renderer - Fixed-structure Markdown output
// Pure formatting: every figure is computed upstream and passed in. Currency
// always renders with two decimals; values no source produced render as the
// literal "None".

use crate::compare::ComparisonReport;
use crate::debt::{DebtCapacityCheck, DebtStatus};
use crate::model::{AggregatedResult, ExpenseDetail, IncomeDetail, Role};

// ============================================================================
// CURRENCY FORMATTING
// ============================================================================

pub fn format_money(amount: f64) -> String {
    format!("${:.2}", amount)
}

pub fn format_optional_money(amount: Option<f64>) -> String {
    match amount {
        Some(value) => format_money(value),
        None => "None".to_string(),
    }
}

// ============================================================================
// FINANCIAL SUMMARY
// ============================================================================

/// Render the summary report. `declared_discretionary` is the submitter's
/// asserted figure, `actual_discretionary` the income-less-expenses figure
/// computed upstream; `computed` carries what our own aggregation produced.
/// No figure is derived here.
pub fn render_summary(
    veteran: &IncomeDetail,
    spouse: &IncomeDetail,
    expenses: &ExpenseDetail,
    computed: &AggregatedResult,
    declared_discretionary: f64,
    actual_discretionary: f64,
    check: &DebtCapacityCheck,
) -> String {
    let mut out = String::new();

    out.push_str("# Financial Summary\n\n");

    out.push_str("## Income\n\n");
    render_income_detail(&mut out, Role::Veteran, veteran);
    render_income_detail(&mut out, Role::Spouse, spouse);

    out.push_str("## Expenses\n\n");
    out.push_str(&format!(
        "- Rent or mortgage: {}\n",
        format_optional_money(expenses.rent_or_mortgage)
    ));
    out.push_str(&format!("- Food: {}\n", format_optional_money(expenses.food)));
    out.push_str(&format!(
        "- Utilities: {}\n",
        format_optional_money(expenses.utilities)
    ));
    out.push_str(&format!(
        "- Other living expenses: {}\n",
        format_optional_money(expenses.other_living_expenses)
    ));
    out.push_str(&format!(
        "- Installment contracts and other debts: {}\n",
        format_optional_money(expenses.installment_contracts_and_debts)
    ));
    out.push_str(&format!(
        "- Total monthly expenses: {}\n\n",
        format_money(expenses.total)
    ));

    out.push_str("## Discretionary Income\n\n");
    out.push_str(&format!(
        "- Expected discretionary income: {}\n",
        format_money(declared_discretionary)
    ));
    out.push_str(&format!(
        "- Actual discretionary income: {}\n\n",
        format_money(actual_discretionary)
    ));

    out.push_str("## Amount Payable Toward Debt\n\n");
    out.push_str(&format!(
        "- Expected amount: {}\n",
        format_money(check.expected)
    ));
    out.push_str(&format!(
        "- Committed amount: {}\n",
        format_optional_money(check.committed)
    ));
    out.push_str(&format!("- Status: {}\n\n", status_line(check)));

    out.push_str("## Calculations\n\n");
    out.push_str(&format!(
        "- Total monthly net income: {}\n",
        format_money(computed.income.total)
    ));
    out.push_str(&format!(
        "- Total monthly expenses: {}\n",
        format_money(computed.expenses)
    ));
    out.push_str(&format!(
        "- Discretionary income: {}\n",
        format_money(actual_discretionary)
    ));

    out
}

fn render_income_detail(out: &mut String, role: Role, detail: &IncomeDetail) {
    out.push_str(&format!("### {}\n\n", role.name()));
    out.push_str(&format!(
        "- Monthly gross salary: {}\n",
        format_optional_money(detail.gross_salary)
    ));
    out.push_str(&format!(
        "- Total deductions: {}\n",
        format_optional_money(detail.total_deductions)
    ));
    out.push_str(&format!(
        "- Net take home pay: {}\n",
        format_optional_money(detail.net_take_home)
    ));
    out.push_str(&format!(
        "- Other income: {}\n",
        format_optional_money(detail.other_income)
    ));
    out.push_str(&format!(
        "- Total monthly net income: {}\n\n",
        format_money(detail.net_income)
    ));
}

fn status_line(check: &DebtCapacityCheck) -> String {
    match check.status {
        DebtStatus::Matches => "consistent with the expected amount".to_string(),
        DebtStatus::ExceedsBudget => format!(
            "committed amount exceeds the available budget (expected {}, committed {})",
            format_money(check.expected),
            format_optional_money(check.committed)
        ),
        DebtStatus::NegativeIncomeWarning => {
            "declared discretionary income is negative; flagged for manual review".to_string()
        }
    }
}

// ============================================================================
// COMPARISON REPORT
// ============================================================================

/// Render the snapshot comparison. Only mismatched fields get a section; a
/// consistent comparison says so instead of producing an empty file.
pub fn render_comparison(report: &ComparisonReport) -> String {
    let mut out = String::new();

    out.push_str("# Comparison Report\n\n");
    out.push_str(&format!(
        "Generated: {}\n\n",
        report.compared_at.format("%Y-%m-%d %H:%M UTC")
    ));

    if report.is_consistent() {
        out.push_str("No discrepancies found between the pre-submit form and the submission object.\n");
        return out;
    }

    for diff in &report.discrepancies {
        out.push_str(&format!("## {}\n\n", diff.field.name()));
        out.push_str(&format!("- Pre-submit: {}\n", format_money(diff.pre_submit)));
        out.push_str(&format!(
            "- Submission object: {}\n\n",
            format_money(diff.submission)
        ));
    }

    out
}

// ============================================================================
// TESTS
// ============================================================================
