//! Report formatting utilities for terminal output
//!
//! Renders summaries and budget warnings, plus small text helpers shared by
//! the other display modules.

use crate::config::Settings;
use crate::reports::{BudgetWarning, SummaryReport};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Full English name of a month (1-12)
pub fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|i| MONTH_NAMES.get(i as usize))
        .copied()
        .unwrap_or("Unknown")
}

/// Heading line for a summary
pub fn summary_title(report: &SummaryReport) -> String {
    let mut title = match report.month {
        Some(month) => format!("Summary for {}", month_name(month)),
        None => "Summary (all time)".to_string(),
    };
    if let Some(category) = &report.category {
        title.push_str(&format!(" - Category: {}", category));
    }
    title
}

/// Format a summary report
pub fn format_summary(report: &SummaryReport, settings: &Settings) -> String {
    let symbol = &settings.currency_symbol;
    let title = summary_title(report);

    let mut output = String::new();
    output.push_str(&title);
    output.push('\n');
    output.push_str(&separator(title.chars().count()));
    output.push('\n');
    output.push_str(&format!(
        "Total: {}\n",
        report.total.format_with_symbol(symbol)
    ));
    output.push_str(&format!("Expenses: {}\n", report.count));

    if !report.breakdown.is_empty() {
        output.push_str("\nBy category:\n");
        for entry in &report.breakdown {
            output.push_str(&format!(
                "  {}: {}\n",
                entry.category,
                entry.total.format_with_symbol(symbol)
            ));
        }
    }

    output
}

/// Format a budget warning
pub fn format_budget_warning(warning: &BudgetWarning, settings: &Settings) -> String {
    let symbol = &settings.currency_symbol;
    format!(
        "Warning: total spending for {} is {}, which exceeds your budget of {} by {}.",
        month_name(warning.month),
        warning.total.format_with_symbol(symbol),
        warning.budget.format_with_symbol(symbol),
        warning.overage().format_with_symbol(symbol)
    )
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate a string to a maximum length with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}
