//! Implements InputPort. Inquire-based interactive prompts.
//!
//! Username prompt → search spinner → stats, summary, cards → multi-select vibe check.

use crate::adapters::ui::banner::{FARCASTER_PURPLE, ROSE};
use crate::adapters::ui::progress::spinner;
use crate::domain::{
    AppStatus, DomainError, FollowStats, GroundingSource, Profile, Vibe, VibeClassification,
};
use crate::ports::InputPort;
use crate::shared::config::SUMMARY_EXCERPT_CHARS;
use crate::usecases::{SearchReport, SearchService, VibeAnalyzer};
use async_trait::async_trait;
use crossterm::style::{Color, Stylize};
use inquire::error::InquireError;
use inquire::ui::{Color as PromptColor, RenderConfig, Styled};
use inquire::{Confirm, MultiSelect, Text};
use std::sync::Arc;
use tracing::error;

const BAR_WIDTH: usize = 40;

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb { r, g, b }
}

/// Applies the purple prompt theme globally.
pub fn apply_theme() {
    let purple = PromptColor::Rgb {
        r: FARCASTER_PURPLE.0,
        g: FARCASTER_PURPLE.1,
        b: FARCASTER_PURPLE.2,
    };
    let mut config = RenderConfig::default();
    config.prompt_prefix = Styled::new("?").with_fg(purple);
    config.highlighted_option_prefix = Styled::new("❯").with_fg(purple);
    inquire::set_global_render_config(config);
}

fn vibe_color(vibe: Vibe) -> Color {
    match vibe {
        Vibe::Cool => Color::Green,
        Vibe::Spam => Color::Red,
        Vibe::Inactive => Color::Yellow,
        Vibe::HighValue => rgb(FARCASTER_PURPLE),
    }
}

fn status_label(status: AppStatus) -> &'static str {
    match status {
        AppStatus::Idle => "Idle",
        AppStatus::Loading => "Scanning",
        AppStatus::Analyzing => "Analyzing",
        AppStatus::Completed => "Completed",
        AppStatus::Error => "Error",
    }
}

fn print_status(status: AppStatus, detail: &str) {
    let label = format!("[{}]", status_label(status));
    let label = match status {
        AppStatus::Error => label.red().bold(),
        AppStatus::Completed => label.green().bold(),
        _ => label.with(rgb(FARCASTER_PURPLE)).bold(),
    };
    println!("{} {}", label, detail);
}

/// Bar proportional to `value / max`, at most `BAR_WIDTH` cells.
fn bar(value: u64, max: u64) -> String {
    if max == 0 {
        return String::new();
    }
    let cells = (value.saturating_mul(BAR_WIDTH as u64) / max) as usize;
    "█".repeat(cells.min(BAR_WIDTH))
}

fn stats_rows(stats: &FollowStats) -> [(&'static str, u64); 3] {
    [
        ("Following", stats.following),
        ("Followers", stats.followers),
        ("Not following back", stats.non_followers),
    ]
}

fn source_line(source: &GroundingSource) -> Option<String> {
    match (source.title(), source.uri()) {
        (Some(title), Some(uri)) => Some(format!("{} <{}>", title, uri)),
        (None, Some(uri)) => Some(uri.to_string()),
        _ => None,
    }
}

fn card_lines(profile: &Profile) -> Vec<String> {
    vec![
        format!("@{} ({})", profile.username, profile.display_name),
        format!("  {}", profile.bio_text().unwrap_or("No bio")),
        format!("  avatar:   {}", profile.avatar_url()),
        format!("  unfollow: {}", profile.unfollow_url()),
    ]
}

fn option_label(profile: &Profile) -> String {
    format!("@{} ({})", profile.username, profile.display_name)
}

fn print_report(report: &SearchReport) {
    println!();
    println!("{}", "Follow statistics".bold());
    let rows = stats_rows(&report.stats);
    let max = rows.iter().map(|(_, v)| *v).max().unwrap_or(0);
    for (idx, (label, value)) in rows.iter().enumerate() {
        let color = if idx == 2 { rgb(ROSE) } else { rgb(FARCASTER_PURPLE) };
        println!("  {:<20} {:>6} {}", label, value, bar(*value, max).with(color));
    }

    println!();
    println!(
        "{} accounts don't follow you back.",
        report.non_followers.len().to_string().with(rgb(ROSE)).bold()
    );

    if !report.summary.text.is_empty() {
        println!();
        println!(
            "{} {}",
            "AI summary:".bold(),
            report.summary_excerpt(SUMMARY_EXCERPT_CHARS).italic()
        );
        let sources: Vec<String> = report.summary.sources.iter().filter_map(source_line).collect();
        if !sources.is_empty() {
            println!("{}", "Sources:".dark_grey());
            for s in sources {
                println!("  - {}", s.dark_grey());
            }
        }
    }

    println!();
    for profile in &report.non_followers {
        for line in card_lines(profile) {
            println!("{}", line);
        }
    }
    println!();
}

fn print_classification(profile: &Profile, result: &VibeClassification) {
    let vibe = result.vibe.as_str().to_uppercase();
    println!(
        "@{} {} {} [{}]",
        profile.username,
        format!("{}:", vibe).with(vibe_color(result.vibe)).bold(),
        result.reason,
        result.recommendation
    );
}

/// User backed out of a prompt (Esc / Ctrl-C).
fn is_cancel(e: &InquireError) -> bool {
    matches!(
        e,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

/// TUI adapter. Inquire prompts.
pub struct TuiInputPort {
    search: Arc<SearchService>,
    analyzer: Arc<VibeAnalyzer>,
}

impl TuiInputPort {
    pub fn new(search: Arc<SearchService>, analyzer: Arc<VibeAnalyzer>) -> Self {
        Self { search, analyzer }
    }

    /// Prompt for a username. `None` when the user cancels.
    fn ask_username(&self) -> Result<Option<String>, DomainError> {
        loop {
            match Text::new("Farcaster username:")
                .with_placeholder("dwr.eth")
                .prompt()
            {
                Ok(name) if name.trim().is_empty() => continue,
                Ok(name) => return Ok(Some(name.trim().to_string())),
                Err(e) if is_cancel(&e) => return Ok(None),
                Err(e) => return Err(DomainError::Ui(e.to_string())),
            }
        }
    }

    async fn vibe_check(&self, report: &SearchReport) -> Result<(), DomainError> {
        if report.non_followers.is_empty() {
            return Ok(());
        }
        let options: Vec<String> = report.non_followers.iter().map(option_label).collect();
        let selected = match MultiSelect::new("Vibe check which accounts?", options).raw_prompt() {
            Ok(selected) => selected,
            Err(e) if is_cancel(&e) => return Ok(()),
            Err(e) => return Err(DomainError::Ui(e.to_string())),
        };
        if selected.is_empty() {
            return Ok(());
        }

        let profiles: Vec<Profile> = selected
            .iter()
            .filter_map(|opt| report.non_followers.get(opt.index).cloned())
            .collect();

        print_status(AppStatus::Analyzing, &format!("{} account(s)", profiles.len()));
        let pb = spinner("Asking Gemini for a vibe check...");
        let results = self.analyzer.analyze_many(profiles).await;
        pb.finish_and_clear();

        for (profile, result) in &results {
            print_classification(profile, result);
        }
        println!();
        Ok(())
    }

    fn ask_again(&self) -> Result<bool, DomainError> {
        match Confirm::new("Search another username?")
            .with_default(true)
            .prompt()
        {
            Ok(again) => Ok(again),
            Err(e) if is_cancel(&e) => Ok(false),
            Err(e) => Err(DomainError::Ui(e.to_string())),
        }
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        loop {
            print_status(AppStatus::Idle, "enter a username (Esc to quit)");
            let Some(username) = self.ask_username()? else {
                return Ok(());
            };

            print_status(AppStatus::Loading, &format!("@{}", username));
            let pb = spinner("Combining Google Search and Gemini data...");
            let outcome = self.search.search(&username).await;
            pb.finish_and_clear();

            match outcome {
                Ok(report) => {
                    print_status(AppStatus::Completed, &format!("@{}", report.username));
                    print_report(&report);
                    self.vibe_check(&report).await?;
                }
                Err(e) => {
                    error!(username = %username, error = %e, "search failed");
                    print_status(AppStatus::Error, &e.to_string());
                }
            }

            if !self.ask_again()? {
                return Ok(());
            }
        }
    }
}
