// Financial Status Report Audit - Core Library
// Exposes all modules for use in the CLI and tests

pub mod extract;
pub mod model;
pub mod aggregate;
pub mod compare;
pub mod debt;
pub mod report;
pub mod input;

// Re-export commonly used types
pub use extract::AuditError;
pub use model::{
    AggregatedResult, ExpenseDetail, IncomeDetail, IncomeTotals, Role,
};
pub use aggregate::{
    aggregate_form_data, aggregate_submission,
    submission_expense_detail, submission_income_detail,
};
pub use compare::{
    Comparator, ComparisonField, ComparisonReport, FieldDiff, DEFAULT_TOLERANCE,
};
pub use debt::{
    check_debt_capacity, committed_from_submission, committed_from_text,
    DebtCapacityCheck, DebtStatus,
};
pub use report::{
    format_money, format_optional_money, render_comparison, render_summary,
};
pub use input::{load_json, load_text};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
