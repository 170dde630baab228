//! Terminal rendering for suggestion cards, rule table, and toasts
//!
//! All render functions return plain `String`s so they stay testable;
//! printing is left to the call sites.

use console::style;
use flowmind_common::{Notify, Priority, SuggestedAction, Toast, ToastVariant, RULES};
use owo_colors::OwoColorize;
use std::fmt::Write;

fn priority_badge(priority: Priority) -> String {
    match priority {
        Priority::High => format!("{}", "high".red().bold()),
        Priority::Medium => format!("{}", "medium".yellow()),
        Priority::Low => format!("{}", "low".dimmed()),
    }
}

/// Render the top `limit` suggestion cards, numbered for selection.
pub fn render_suggestions(actions: &[SuggestedAction], limit: usize) -> String {
    if actions.is_empty() {
        return String::new();
    }

    let shown = actions.len().min(limit);
    let mut out = String::new();
    for (index, action) in actions.iter().take(shown).enumerate() {
        writeln!(
            out,
            "  {}. {} [{}]",
            index + 1,
            action.title.bold(),
            priority_badge(action.priority)
        )
        .ok();
        writeln!(out, "     {}", style(&action.description).dim()).ok();
    }
    if actions.len() > shown {
        writeln!(out, "  {}", style(format!("(+{} more)", actions.len() - shown)).dim()).ok();
    }
    out
}

/// Render the static rule table, one line per rule.
pub fn render_rules() -> String {
    let mut out = String::new();
    for rule in RULES {
        writeln!(
            out,
            "{}  {}  [{}]",
            rule.id.bold(),
            rule.category,
            priority_badge(rule.priority)
        )
        .ok();
        writeln!(out, "    keywords: {}", rule.keywords.join(", ")).ok();
    }
    out
}

/// Render one toast line.
pub fn render_toast(toast: &Toast) -> String {
    let symbol = match toast.variant {
        ToastVariant::Info => format!("{}", "ℹ".cyan()),
        ToastVariant::Success => format!("{}", "✓".green()),
        ToastVariant::Error => format!("{}", "✗".red()),
    };
    format!("{} {} — {}", symbol, toast.title.bold(), toast.description)
}

/// Notification surface that prints toast lines to the terminal.
#[derive(Debug, Default)]
pub struct TerminalNotify;

impl Notify for TerminalNotify {
    fn notify(&mut self, toast: Toast) {
        println!("{}", render_toast(&toast));
    }
}
