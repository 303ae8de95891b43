use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::process;

// Use library instead of local modules
use fsr_audit::{
    aggregate_form_data, aggregate_submission, check_debt_capacity, committed_from_submission,
    committed_from_text, format_money, format_optional_money, load_json, load_text,
    render_comparison, render_summary,
    submission_expense_detail, submission_income_detail, Comparator, Role,
};

fn main() {
    // Fatal validation errors identify the offending field and exit non-zero.
    if let Err(e) = run() {
        eprintln!("❌ {:#}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let data_dir = PathBuf::from(args.get(1).map(String::as_str).unwrap_or("./data"));
    let results_dir = PathBuf::from(args.get(2).map(String::as_str).unwrap_or("./results"));

    println!("📋 FSR Audit - Financial Status Report validation");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    // 1. Load both snapshots
    println!("\n📂 Loading snapshots from {}...", data_dir.display());
    let pre_submit = load_json(&data_dir.join("pre-submit.json"))?;
    let submission = load_json(&data_dir.join("submission-object.json"))?;

    // 2. Aggregate both shapes to the comparable result
    println!("\n➕ Aggregating...");
    let pre = aggregate_form_data(&pre_submit)?;
    let sub = aggregate_submission(&submission)?;
    println!("✓ Pre-submit:  {}", pre.summary());
    println!("✓ Submission:  {}", sub.summary());

    // 3. Reconcile the two snapshots
    println!("\n⚖️  Comparing snapshots...");
    let comparison = Comparator::new().compare(&pre, &sub);
    println!("Discrepancies found: {}", comparison.discrepancies.len());
    for diff in &comparison.discrepancies {
        println!(
            "- {}: pre-submit {}, submission {}",
            diff.field.name(),
            format_money(diff.pre_submit),
            format_money(diff.submission)
        );
    }

    // 4. Debt-capacity check. Structured field first, text scan as fallback.
    println!("\n💳 Checking debt capacity...");
    let committed = match committed_from_submission(&submission)? {
        Some(amount) => Some(amount),
        None => load_text(&data_dir.join("generated-pdf.txt"))?
            .as_deref()
            .and_then(committed_from_text),
    };
    let computed_discretionary = sub.income.total - sub.expenses;
    let check = check_debt_capacity(
        computed_discretionary,
        Some(sub.discretionary_income),
        committed,
    );
    println!(
        "✓ Status: {} (expected {}, committed {})",
        check.status.name(),
        format_money(check.expected),
        format_optional_money(check.committed)
    );

    // 5. Render and write the reports
    let veteran = submission_income_detail(&submission, Role::Veteran)?;
    let spouse = submission_income_detail(&submission, Role::Spouse)?;
    let expenses = submission_expense_detail(&submission)?;

    let summary = render_summary(
        &veteran,
        &spouse,
        &expenses,
        &sub,
        sub.discretionary_income,
        computed_discretionary,
        &check,
    );
    let comparison_md = render_comparison(&comparison);

    fs::create_dir_all(&results_dir)
        .with_context(|| format!("failed to create {}", results_dir.display()))?;
    let summary_path = results_dir.join("summary.md");
    let comparison_path = results_dir.join("comparison_report.md");
    fs::write(&summary_path, &summary)
        .with_context(|| format!("failed to write {}", summary_path.display()))?;
    fs::write(&comparison_path, &comparison_md)
        .with_context(|| format!("failed to write {}", comparison_path.display()))?;

    println!("\n{}", summary);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!(
        "✅ Audit complete: {} and {}",
        summary_path.display(),
        comparison_path.display()
    );

    Ok(())
}
