// ➕ Income/Expense Aggregator
// Reduces both pipeline snapshots to the same AggregatedResult so the
// comparator can work shape-agnostically.
//
// Two input shapes for the same real-world snapshot:
//   - pre-submit form data: itemized employment records, deductions, benefit
//     values, five expense categories. Totals are computed here.
//   - submission object: already normalized by the intake pipeline. Totals
//     are read as asserted, never recomputed.

use crate::extract::{self, AuditError};
use crate::model::{AggregatedResult, ExpenseDetail, IncomeDetail, IncomeTotals, Role};
use serde_json::Value;

// ============================================================================
// PRE-SUBMIT FORM DATA
// ============================================================================

/// Aggregate the raw pre-submit form. Sums are pure and order-independent;
/// a negative leaf amount anywhere is fatal.
pub fn aggregate_form_data(root: &Value) -> Result<AggregatedResult, AuditError> {
    let form = extract::required(root, "formData")?;

    let veteran = employment_income(form, Role::Veteran)?;
    let spouse_employment = employment_income(form, Role::Spouse)?;
    let spouse_additional = sum_amounts(
        extract::section_list(form, &["additionalIncome", "spouse", "spAddlIncome"])?,
        "amount",
    )?;
    let spouse_benefits = benefit_total(form)?;
    let spouse = spouse_employment + spouse_additional + spouse_benefits;

    let expenses = sum_amounts(
        extract::section_list(form, &["expenses", "expenseRecords"])?,
        "amount",
    )? + sum_amounts(
        extract::section_list(form, &["expenses", "creditCardBills"])?,
        "amountDueMonthly",
    )? + sum_amounts(extract::section_list(form, &["utilityRecords"])?, "amount")?
        + sum_amounts(
            extract::section_list(form, &["installmentContracts"])?,
            "amountDueMonthly",
        )?
        + sum_amounts(extract::section_list(form, &["otherExpenses"])?, "amount")?;

    let total = veteran + spouse;
    Ok(AggregatedResult {
        income: IncomeTotals {
            veteran,
            spouse,
            total,
        },
        expenses,
        discretionary_income: total - expenses,
    })
}

/// Net employment income for one role: gross minus that record's deductions,
/// summed across all employment records. The net of a single record may go
/// negative when deductions exceed gross; only leaf amounts are sign-checked.
fn employment_income(form: &Value, role: Role) -> Result<f64, AuditError> {
    let records = extract::section_list(
        form,
        &[
            "personalData",
            "employmentHistory",
            role.form_key(),
            "employmentRecords",
        ],
    )?;

    let mut total = 0.0;
    for record in records {
        let gross = extract::amount(record, "grossMonthlyIncome")?;
        let deductions = match record.get("deductions") {
            None | Some(Value::Null) => 0.0,
            Some(list) => sum_amounts(
                list.as_array()
                    .ok_or_else(|| AuditError::invalid("deductions", "expected a list"))?,
                "amount",
            )?,
        };
        total += gross - deductions;
    }
    Ok(total)
}

/// Spouse benefit values: every value of the benefits.spouseBenefits object.
fn benefit_total(form: &Value) -> Result<f64, AuditError> {
    let benefits = extract::section(form, &["benefits", "spouseBenefits"])?;
    let map = benefits
        .as_object()
        .ok_or_else(|| AuditError::invalid("benefits.spouseBenefits", "expected an object"))?;

    let mut total = 0.0;
    for key in map.keys() {
        total += extract::amount(benefits, key)?;
    }
    Ok(total)
}

fn sum_amounts(records: &[Value], field: &str) -> Result<f64, AuditError> {
    let mut total = 0.0;
    for record in records {
        total += extract::amount(record, field)?;
    }
    Ok(total)
}

// ============================================================================
// SUBMISSION OBJECT
// ============================================================================

/// Aggregate the normalized submission object. Asserted totals are read,
/// not recomputed: discretionary income here is what the submitter declared.
pub fn aggregate_submission(root: &Value) -> Result<AggregatedResult, AuditError> {
    let veteran = extract::required_amount(role_entry(root, Role::Veteran)?, "totalMonthlyNetIncome")?;
    let spouse = extract::required_amount(role_entry(root, Role::Spouse)?, "totalMonthlyNetIncome")?;

    let expenses =
        extract::required_amount(extract::section(root, &["expenses"])?, "totalMonthlyExpenses")?;

    let discretionary_income = extract::required_amount_allow_negative(
        extract::section(root, &["discretionaryIncome"])?,
        "netMonthlyIncomeLessExpenses",
    )?;

    Ok(AggregatedResult {
        income: IncomeTotals {
            veteran,
            spouse,
            total: veteran + spouse,
        },
        expenses,
        discretionary_income,
    })
}

/// Locate the income entry for a role. Exact-case match on veteranOrSpouse;
/// an absent role is fatal, with no fallback.
fn role_entry(root: &Value, role: Role) -> Result<&Value, AuditError> {
    let entries = extract::section_list(root, &["income"])?;
    entries
        .iter()
        .find(|entry| {
            entry
                .get("veteranOrSpouse")
                .and_then(Value::as_str)
                .map(|key| key == role.submission_key())
                .unwrap_or(false)
        })
        .ok_or_else(|| AuditError::missing(format!("income[{}]", role.submission_key())))
}

// ============================================================================
// REPORT BREAKDOWNS
// ============================================================================

/// Per-role income breakdown for the summary report.
pub fn submission_income_detail(root: &Value, role: Role) -> Result<IncomeDetail, AuditError> {
    let entry = role_entry(root, role)?;
    Ok(IncomeDetail {
        gross_salary: extract::optional_amount(entry, "monthlyGrossSalary")?,
        total_deductions: extract::optional_amount(entry, "totalDeductions")?,
        net_take_home: extract::optional_amount(entry, "netTakeHomePay")?,
        other_income: extract::optional_amount(entry, "otherIncome")?,
        net_income: extract::required_amount(entry, "totalMonthlyNetIncome")?,
    })
}

/// Expense category breakdown for the summary report.
pub fn submission_expense_detail(root: &Value) -> Result<ExpenseDetail, AuditError> {
    let expenses = extract::section(root, &["expenses"])?;
    Ok(ExpenseDetail {
        rent_or_mortgage: extract::optional_amount(expenses, "rentOrMortgage")?,
        food: extract::optional_amount(expenses, "food")?,
        utilities: extract::optional_amount(expenses, "utilities")?,
        other_living_expenses: extract::optional_amount(expenses, "otherLivingExpenses")?,
        installment_contracts_and_debts: extract::optional_amount(
            expenses,
            "expensesInstallmentContractsAndOtherDebts",
        )?,
        total: extract::required_amount(expenses, "totalMonthlyExpenses")?,
    })
}

// ============================================================================
// TESTS
// ============================================================================
