//! Input parsing for the interactive prompt.
//!
//! Slash commands work from any state; bare input is contextual, meaning
//! "look this product up" before a product is loaded and "act on the active
//! tab" afterwards.

use std::str::FromStr;

use revu_core::session::SessionMode;
use revu_core::tabs::ActiveTab;

/// One parsed line of user input.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Look up a product by name or product-page URL.
    Lookup(String),
    /// Ask a follow-up question about the loaded product.
    Ask(String),
    /// Replace the review draft.
    Draft(String),
    /// Request feedback on the current draft.
    Feedback,
    /// Complete the current draft.
    Complete,
    /// Set the preferred writing style.
    Style(String),
    /// Set the preferred review length.
    Length(String),
    /// Set the focus areas, comma separated.
    Focus(Vec<String>),
    /// Request a style suggestion for the stored preferences.
    Suggest,
    /// Generate a review template for the loaded product.
    Template,
    /// Switch the active tab.
    Tab(ActiveTab),
    /// Show the component ratings chart.
    Ratings,
    /// Show the question history.
    History,
    /// Re-render the session overview.
    Show,
    /// Start over with a new product.
    New,
    Help,
    Quit,
    /// Anything that did not parse.
    Unknown(String),
}

/// Parses one trimmed, non-empty input line.
///
/// `mode` and `tab` only affect bare (non-slash) input: before a product is
/// loaded it is a lookup, afterwards it goes to the active tab (a question,
/// a draft, or a writing style).
pub fn parse(line: &str, mode: SessionMode, tab: ActiveTab) -> Command {
    if let Some(rest) = line.strip_prefix('/') {
        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (rest, ""),
        };
        return parse_slash(line, name, arg);
    }

    match (line, mode, tab) {
        ("quit" | "exit", _, _) => Command::Quit,
        (_, SessionMode::Input, _) => Command::Lookup(line.to_string()),
        (_, SessionMode::Results, ActiveTab::Ask) => Command::Ask(line.to_string()),
        (_, SessionMode::Results, ActiveTab::Review) => Command::Draft(line.to_string()),
        (_, SessionMode::Results, ActiveTab::Personalize) => Command::Style(line.to_string()),
    }
}

fn parse_slash(line: &str, name: &str, arg: &str) -> Command {
    match name {
        "lookup" | "product" => Command::Lookup(arg.to_string()),
        "ask" => Command::Ask(arg.to_string()),
        "draft" => Command::Draft(arg.to_string()),
        "feedback" => Command::Feedback,
        "complete" => Command::Complete,
        "style" => Command::Style(arg.to_string()),
        "length" => Command::Length(arg.to_string()),
        "focus" => Command::Focus(split_focus_areas(arg)),
        "suggest" => Command::Suggest,
        "template" => Command::Template,
        "tab" => match ActiveTab::from_str(arg) {
            Ok(tab) => Command::Tab(tab),
            Err(_) => Command::Unknown(line.to_string()),
        },
        "ratings" => Command::Ratings,
        "history" => Command::History,
        "show" => Command::Show,
        "new" | "reset" => Command::New,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => Command::Unknown(line.to_string()),
    }
}

fn split_focus_areas(arg: &str) -> Vec<String> {
    arg.split(',')
        .map(str::trim)
        .filter(|area| !area.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_idle(line: &str) -> Command {
        parse(line, SessionMode::Input, ActiveTab::Ask)
    }

    #[test]
    fn test_bare_input_is_a_lookup_before_a_product_loads() {
        assert_eq!(
            parse_idle("iPhone 12"),
            Command::Lookup("iPhone 12".to_string())
        );
    }

    #[test]
    fn test_bare_input_follows_the_active_tab_after_load() {
        assert_eq!(
            parse("How is the battery?", SessionMode::Results, ActiveTab::Ask),
            Command::Ask("How is the battery?".to_string())
        );
        assert_eq!(
            parse("Battery is amazing.", SessionMode::Results, ActiveTab::Review),
            Command::Draft("Battery is amazing.".to_string())
        );
        assert_eq!(
            parse("casual", SessionMode::Results, ActiveTab::Personalize),
            Command::Style("casual".to_string())
        );
    }

    #[test]
    fn test_slash_commands_ignore_mode() {
        assert_eq!(
            parse("/lookup Pixel 8", SessionMode::Results, ActiveTab::Review),
            Command::Lookup("Pixel 8".to_string())
        );
        assert_eq!(
            parse("/ask Is it loud?", SessionMode::Input, ActiveTab::Ask),
            Command::Ask("Is it loud?".to_string())
        );
    }

    #[test]
    fn test_tab_names_parse_lowercase() {
        assert_eq!(
            parse_idle("/tab review"),
            Command::Tab(ActiveTab::Review)
        );
        assert_eq!(
            parse_idle("/tab settings"),
            Command::Unknown("/tab settings".to_string())
        );
    }

    #[test]
    fn test_focus_areas_split_on_commas() {
        assert_eq!(
            parse_idle("/focus battery, camera , , screen"),
            Command::Focus(vec![
                "battery".to_string(),
                "camera".to_string(),
                "screen".to_string(),
            ])
        );
    }

    #[test]
    fn test_quit_aliases() {
        assert_eq!(parse_idle("quit"), Command::Quit);
        assert_eq!(parse_idle("exit"), Command::Quit);
        assert_eq!(parse_idle("/quit"), Command::Quit);
    }

    #[test]
    fn test_unknown_command_is_preserved_verbatim() {
        assert_eq!(
            parse_idle("/frobnicate now"),
            Command::Unknown("/frobnicate now".to_string())
        );
    }
}
