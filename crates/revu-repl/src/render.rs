//! Colored terminal rendering of session state.
//!
//! Everything here prints to stdout; logging goes to stderr so the two never
//! interleave on the interactive surface.

use colored::Colorize;

use revu_application::{PersonalizeState, ReviewState};
use revu_core::ledger::QueryLedger;
use revu_core::ratings::RatingsChart;
use revu_core::session::Session;

/// Width of a full five-star bar, in cells.
const BAR_WIDTH: usize = 20;

pub fn banner(base_url: &str) {
    println!("{}", "=== Revu ===".bright_magenta().bold());
    println!(
        "{}",
        format!("Backend: {base_url}").bright_black()
    );
    println!(
        "{}",
        "Type a product name to look it up, '/help' for commands, or '/quit' to exit."
            .bright_black()
    );
    println!();
}

/// The product card: name, price, summary, and the lookup error when the
/// lookup settled without one.
pub fn summary_card(session: &Session) {
    if let Some(error) = &session.error {
        println!("{}", error.red());
        return;
    }

    println!("{}", session.display_name.bold());
    if let Some(price) = &session.price {
        println!("{}", price.green());
    }
    if let Some(summary) = &session.summary {
        println!();
        for line in summary.lines() {
            println!("{}", line.bright_blue());
        }
    }
    if let Some(image_url) = &session.image_url {
        println!("{}", format!("Image: {image_url}").bright_black());
    }
}

/// A horizontal text bar chart of the component ratings plus the overall
/// gauge.
pub fn ratings_chart(chart: &RatingsChart) {
    if chart.is_empty() {
        println!("{}", "No component ratings available.".bright_black());
        return;
    }

    let label_width = chart
        .bars
        .iter()
        .map(|bar| bar.label.len())
        .max()
        .unwrap_or(0);

    for bar in &chart.bars {
        let filled = bar_cells(bar.fraction, BAR_WIDTH);
        let bar_text = format!(
            "{}{}",
            "█".repeat(filled),
            "░".repeat(BAR_WIDTH - filled)
        );
        println!(
            "{:label_width$}  {}  {}",
            bar.label,
            bar_text.cyan(),
            bar.caption.bright_black()
        );
    }

    if let Some(overall) = &chart.overall {
        // Pad before coloring: escape codes would throw the width off.
        let label = format!("{:label_width$}", "Overall");
        println!("{}  {}", label.bold(), overall.caption.bright_yellow());
    }
}

/// The question history: earlier exchanges dimmed, the latest in full color,
/// each stamped with the time its answer arrived.
pub fn history(ledger: &QueryLedger) {
    if ledger.is_empty() {
        println!("{}", "No questions asked yet.".bright_black());
        return;
    }

    for record in ledger.earlier_than_latest() {
        println!(
            "{}",
            format!("[{}] Q: {}", clock_time(&record.asked_at), record.question).bright_black()
        );
        println!("{}", format!("A: {}", record.answer).bright_black());
        println!();
    }

    if let Some(latest) = ledger.latest() {
        println!(
            "{} {}",
            format!("[{}]", clock_time(&latest.asked_at)).bright_black(),
            format!("Q: {}", latest.question).bright_magenta()
        );
        for line in latest.answer.lines() {
            println!("{}", format!("A: {line}").bright_blue());
        }
    }
}

/// A freshly received answer, outside the history view.
pub fn answer(text: &str) {
    for line in text.lines() {
        println!("{}", line.bright_blue());
    }
}

pub fn review_state(state: &ReviewState) {
    if state.draft.is_empty() {
        println!("{}", "No draft yet. Type on the review tab or use '/draft <text>'.".bright_black());
    } else {
        println!("{}", "Draft:".bold());
        for line in state.draft.lines() {
            println!("  {line}");
        }
    }
    if let Some(feedback) = &state.feedback {
        println!("{}", "Feedback:".bold());
        for line in feedback.lines() {
            println!("{}", format!("  {line}").bright_blue());
        }
    }
    if let Some(error) = &state.error {
        println!("{}", error.red());
    }
}

pub fn personalize_state(state: &PersonalizeState) {
    let preferences = &state.preferences;
    println!(
        "{}",
        format!(
            "Preferences: style={} length={} focus={}",
            or_unset(&preferences.writing_style),
            or_unset(&preferences.preferred_length),
            if preferences.focus_areas.is_empty() {
                "(unset)".to_string()
            } else {
                preferences.focus_areas.join(", ")
            }
        )
        .bright_black()
    );
    if let Some(suggestion) = &state.style_suggestion {
        println!("{}", "Style suggestion:".bold());
        for line in suggestion.lines() {
            println!("{}", format!("  {line}").bright_blue());
        }
    }
    if let Some(template) = &state.template {
        println!("{}", "Template:".bold());
        for line in template.lines() {
            println!("{}", format!("  {line}").bright_blue());
        }
    }
    if let Some(error) = &state.error {
        println!("{}", error.red());
    }
}

pub fn notice(message: &str) {
    println!("{}", message.yellow());
}

pub fn error(message: &str) {
    println!("{}", message.red());
}

pub fn hint(message: &str) {
    println!("{}", message.bright_black());
}

pub fn help() {
    println!("{}", "Commands".bold());
    let entries = [
        ("/lookup <product>", "look up a product by name or URL"),
        ("/ask <question>", "ask about the loaded product"),
        ("/draft <text>", "replace the review draft"),
        ("/feedback", "get feedback on the draft"),
        ("/complete", "complete the draft (replaces it)"),
        ("/style <style>", "set the preferred writing style"),
        ("/length <length>", "set the preferred review length"),
        ("/focus <a, b, ...>", "set the focus areas"),
        ("/suggest", "get a personalized style suggestion"),
        ("/template", "generate a review template"),
        ("/tab <ask|review|personalize>", "switch the active tab"),
        ("/ratings", "show the component ratings chart"),
        ("/history", "show the question history"),
        ("/show", "show the session overview"),
        ("/new", "start over with a new product"),
        ("/help", "show this help"),
        ("/quit", "exit"),
    ];
    for (command, description) in entries {
        // Pad before coloring so the columns line up.
        println!("  {}{}", format!("{command:32}").bright_cyan(), description);
    }
    println!();
    println!(
        "{}",
        "Bare input looks up a product, then goes to the active tab.".bright_black()
    );
}

fn or_unset(value: &str) -> &str {
    if value.is_empty() { "(unset)" } else { value }
}

/// Number of filled cells for a bar of `width` cells. Geometry only: the
/// result always fits the bar, whatever the fraction.
fn bar_cells(fraction: f64, width: usize) -> usize {
    ((fraction * width as f64).round() as usize).min(width)
}

/// HH:MM slice of an RFC 3339 timestamp; anything shorter is shown as is.
fn clock_time(timestamp: &str) -> &str {
    timestamp.get(11..16).unwrap_or(timestamp)
}
