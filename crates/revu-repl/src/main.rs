use std::borrow::Cow::{self, Borrowed, Owned};
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};

use revu_application::SessionOrchestrator;
use revu_backend::{Dispatcher, HttpBackend};
use revu_core::config;
use revu_core::ratings;
use revu_core::session::SessionMode;
use revu_core::tabs::ActiveTab;

mod commands;
mod render;

use commands::Command;

/// Interactive product review assistant.
#[derive(Parser)]
#[command(name = "revu")]
#[command(about = "Revu - interactive product review assistant", long_about = None)]
struct Cli {
    /// Backend base URL, e.g. http://localhost:8000
    #[arg(long)]
    backend_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Report failed component-ratings fetches instead of leaving the chart
    /// silently empty
    #[arg(long)]
    surface_ratings_errors: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// CLI helper for rustyline that provides completion, highlighting, and hints
/// for the slash commands.
#[derive(Clone)]
struct CliHelper {
    commands: Vec<String>,
}

impl CliHelper {
    fn new() -> Self {
        let commands = [
            "/lookup", "/ask", "/draft", "/feedback", "/complete", "/style", "/length",
            "/focus", "/suggest", "/template", "/tab", "/ratings", "/history", "/show",
            "/new", "/help", "/quit",
        ];
        Self {
            commands: commands.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if line.starts_with('/') {
            let candidates: Vec<Pair> = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(|cmd| Pair {
                    display: cmd.clone(),
                    replacement: cmd.clone(),
                })
                .collect();
            Ok((0, candidates))
        } else {
            Ok((0, vec![]))
        }
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if line.starts_with('/') && !line.contains(' ') {
            self.commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for CliHelper {}

fn init_tracing(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.to_string());
    // Events go to stderr so they never corrupt the interactive surface.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Config file and environment first, command-line flags on top.
    let mut config = config::load()?;
    if let Some(url) = cli.backend_url {
        config = config.with_base_url(url);
    }
    if let Some(secs) = cli.timeout_secs {
        config = config.with_request_timeout_secs(secs);
    }
    if cli.surface_ratings_errors {
        config = config.with_surface_ratings_errors(true);
    }

    let backend = HttpBackend::from_config(&config)?;
    let orchestrator = SessionOrchestrator::new(Dispatcher::new(Arc::new(backend)), &config);

    let mut rl = Editor::new()?;
    rl.set_helper(Some(CliHelper::new()));

    render::banner(&config.base_url);

    loop {
        let prompt = prompt_for(&orchestrator).await;
        let readline = rl.readline(&prompt);

        match readline {
            Ok(line) => {
                let trimmed = line.trim();

                if trimmed.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(&line);

                let mode = orchestrator.mode().await;
                let tab = orchestrator.active_tab().await;
                match commands::parse(trimmed, mode, tab) {
                    Command::Quit => {
                        println!("{}", "Goodbye!".bright_green());
                        break;
                    }
                    command => execute(&orchestrator, command).await,
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type '/quit' to exit.".yellow());
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("{}", "Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {err:?}").red());
                break;
            }
        }
    }

    Ok(())
}

/// The prompt reflects where bare input will go.
async fn prompt_for(orchestrator: &SessionOrchestrator) -> String {
    let snapshot = orchestrator.snapshot().await;
    if snapshot.session.is_awaiting_input() {
        "revu> ".to_string()
    } else {
        format!("revu:{}> ", snapshot.active_tab)
    }
}

/// True for commands that act on a loaded product.
fn needs_product(command: &Command) -> bool {
    matches!(
        command,
        Command::Ask(_)
            | Command::Draft(_)
            | Command::Feedback
            | Command::Complete
            | Command::Style(_)
            | Command::Length(_)
            | Command::Focus(_)
            | Command::Suggest
            | Command::Template
            | Command::Ratings
            | Command::History
            | Command::Show
    )
}

async fn execute(orchestrator: &SessionOrchestrator, command: Command) {
    if needs_product(&command) && orchestrator.mode().await == SessionMode::Input {
        render::hint("No product loaded. Type a product name to look it up.");
        return;
    }

    match command {
        Command::Lookup(query) => {
            let query = query.trim();
            if query.is_empty() {
                render::hint("Usage: /lookup <product name or URL>");
                return;
            }
            render::hint(&format!("Looking up \"{query}\"..."));
            orchestrator.lookup_product(query).await;

            let snapshot = orchestrator.snapshot().await;
            render::summary_card(&snapshot.session);
            if !snapshot.ratings.is_empty() {
                println!();
                render::ratings_chart(&ratings::project(&snapshot.ratings));
            }
            if let Some(notice) = orchestrator.take_notice().await {
                render::notice(&notice);
            }
        }
        Command::Ask(question) => {
            orchestrator.ask_question(&question).await;
            let snapshot = orchestrator.snapshot().await;
            match &snapshot.ask.error {
                Some(error) => render::error(error),
                None => {
                    if let Some(latest) = snapshot.ledger.latest() {
                        render::answer(&latest.answer);
                    }
                }
            }
        }
        Command::Draft(text) => {
            orchestrator.set_draft(text).await;
            let snapshot = orchestrator.snapshot().await;
            render::hint(&format!(
                "Draft updated ({} characters). '/feedback' or '/complete' when ready.",
                snapshot.review.draft.chars().count()
            ));
        }
        Command::Feedback => {
            if orchestrator.snapshot().await.review.draft.is_empty() {
                render::hint("Nothing drafted yet. Type on the review tab or use '/draft <text>'.");
                return;
            }
            orchestrator.request_feedback().await;
            render::review_state(&orchestrator.snapshot().await.review);
        }
        Command::Complete => {
            if orchestrator.snapshot().await.review.draft.is_empty() {
                render::hint("Nothing drafted yet. Type on the review tab or use '/draft <text>'.");
                return;
            }
            orchestrator.complete_draft().await;
            render::review_state(&orchestrator.snapshot().await.review);
        }
        Command::Style(style) => {
            let mut preferences = orchestrator.snapshot().await.personalize.preferences;
            preferences.writing_style = style;
            orchestrator.set_preferences(preferences).await;
            render::hint("Writing style saved. '/suggest' for a suggestion.");
        }
        Command::Length(length) => {
            let mut preferences = orchestrator.snapshot().await.personalize.preferences;
            preferences.preferred_length = length;
            orchestrator.set_preferences(preferences).await;
            render::hint("Preferred length saved.");
        }
        Command::Focus(areas) => {
            let mut preferences = orchestrator.snapshot().await.personalize.preferences;
            preferences.focus_areas = areas;
            orchestrator.set_preferences(preferences).await;
            render::hint("Focus areas saved.");
        }
        Command::Suggest => {
            orchestrator.suggest_style().await;
            render::personalize_state(&orchestrator.snapshot().await.personalize);
        }
        Command::Template => {
            orchestrator.generate_template().await;
            render::personalize_state(&orchestrator.snapshot().await.personalize);
        }
        Command::Tab(tab) => {
            orchestrator.select_tab(tab).await;
            render::hint(&format!("Switched to the {tab} tab."));
        }
        Command::Ratings => {
            let snapshot = orchestrator.snapshot().await;
            render::ratings_chart(&ratings::project(&snapshot.ratings));
        }
        Command::History => {
            render::history(&orchestrator.snapshot().await.ledger);
        }
        Command::Show => {
            let snapshot = orchestrator.snapshot().await;
            render::summary_card(&snapshot.session);
            println!();
            match snapshot.active_tab {
                ActiveTab::Ask => render::history(&snapshot.ledger),
                ActiveTab::Review => render::review_state(&snapshot.review),
                ActiveTab::Personalize => render::personalize_state(&snapshot.personalize),
            }
        }
        Command::New => {
            orchestrator.reset().await;
            render::hint("Session cleared. Type a product name to look one up.");
        }
        Command::Help => render::help(),
        Command::Unknown(line) => {
            render::hint(&format!("Unknown command: {line}. Try '/help'."));
        }
        // Quit is handled by the main loop.
        Command::Quit => {}
    }
}
