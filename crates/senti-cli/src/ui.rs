//! UI utilities for the terminal form

use colored::*;
use crossterm::{
    event::{
        self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyCode, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, size},
};
use std::io::{self, IsTerminal, Write};
use std::time::Duration;
use tokio::task::JoinHandle;

use senti_core::{MaxTokens, Result, Temperature};

use crate::entry::{read_entry, EntryBuffer};
use crate::session::{FormState, Outcome};

const PROMPT: &str = "text>";

fn panel_width() -> usize {
    let terminal_width = size().map(|(w, _)| w as usize).unwrap_or(80);
    std::cmp::min(67, terminal_width.saturating_sub(4)).max(20)
}

/// Display the page title
pub fn display_banner() {
    let width = panel_width();
    let title = "😊 Interactive Sentiment Analysis";

    println!();
    println!("{}", format!("┌{}┐", "─".repeat(width - 2)).blue());
    let padding = width.saturating_sub(title.chars().count() + 5);
    println!("│  {}{}│", title.blue().bold(), " ".repeat(padding));
    println!("{}", format!("└{}┘", "─".repeat(width - 2)).blue());
    println!();
    println!(
        "{}",
        "💡 Type or paste text, then an empty line to analyze it. ':help' lists commands".dimmed()
    );
    println!();
}

/// Display the options panel with the current form values
pub fn display_options(form: &FormState) {
    println!("{}", "Options".bold());
    println!(
        "  {:<18} {}  {}",
        "Model Temperature",
        form.temperature.to_string().green(),
        format!(
            "({:.1}-{:.1}, step {:.1})",
            Temperature::MIN,
            Temperature::MAX,
            Temperature::STEP
        )
        .dimmed()
    );
    println!(
        "  {:<18} {}  {}",
        "Max Tokens",
        form.max_tokens.to_string().green(),
        format!(
            "({}-{}, step {})",
            MaxTokens::RANGE.start(),
            MaxTokens::RANGE.end(),
            MaxTokens::STEP
        )
        .dimmed()
    );
    println!();
}

/// Render a trigger's outcome in the result panel
pub fn display_outcome(outcome: &Outcome) {
    println!();
    println!("{}", "Analysis Result".bold().underline());
    match outcome {
        Outcome::Analysis(result) => {
            println!("{}", "Sentiment Analysis:".bold());
            println!();
            println!("{}", result.body);
        }
        Outcome::Warning(message) => {
            println!("{} {}", "⚠️".yellow(), message.yellow());
        }
        Outcome::Failure(message) => {
            println!("{} {}", "❌".red(), message.red());
        }
    }
    println!();
}

const ABOUT: [&str; 5] = [
    "Sentiment analysis is the process of determining the emotional tone behind",
    "a series of words. This app uses advanced natural language processing to",
    "analyze the sentiment of your input text. The analysis considers various",
    "factors such as word choice, context, and language patterns to provide a",
    "detailed explanation of the detected sentiment.",
];

/// Display the about section
pub fn print_about() {
    println!("{}", "About Sentiment Analysis".bold());
    for line in ABOUT {
        println!("  {}", line);
    }
    println!();
}

/// Display the static footer
pub fn display_footer() {
    println!(
        "{}",
        "Built with Rust, tokio and the OpenAI completions API".dimmed()
    );
}

/// Display help message
pub fn print_help() {
    println!("{}", "Available commands:".bold());
    println!(
        "  {} - Analyze the sentiment of any other text (end it with an empty line)",
        "<text>".green()
    );
    println!("  {} - Set the model temperature", ":temperature <0.0-1.0>".green());
    println!("  {} - Set the maximum number of tokens", ":max-tokens <50-500>".green());
    println!("  {} - Show the current options", ":options".green());
    println!("  {} - About sentiment analysis", ":about".green());
    println!("  {} - Show this help message", ":help".green());
    println!("  {} - Exit the application", ":quit".green());
    println!();
}

const CONTINUATION: &str = "  ...";

/// Raw mode plus bracketed paste for the duration of one entry
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnableBracketedPaste)?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), DisableBracketedPaste);
        let _ = disable_raw_mode();
    }
}

enum RawLine {
    Line(String),
    /// Esc: throw away the entry typed so far
    Cancel,
    /// Ctrl+D: end of input
    Eof,
    /// Ctrl+C
    Interrupt,
}

/// Read one form entry.
///
/// Text can span several lines and is finished by an empty line; a command
/// such as `:temp 0.3` is finished by Enter. Returns `None` at end of input
/// (Ctrl+D or Ctrl+C on a terminal, end of a pipe).
pub fn read_input() -> Result<Option<String>> {
    // Piped input: the same grouping over stdin
    if !io::stdin().is_terminal() {
        return read_entry(&mut io::stdin().lock());
    }

    let _raw = RawModeGuard::enable()?;
    let mut entry = EntryBuffer::default();

    loop {
        let prompt = if entry.is_empty() { PROMPT } else { CONTINUATION };
        match read_raw_line(prompt)? {
            RawLine::Line(line) if line.contains('\n') => entry.push_block(&line),
            RawLine::Line(line) => {
                if let Some(complete) = entry.push_line(&line) {
                    return Ok(Some(complete));
                }
            }
            RawLine::Cancel => entry = EntryBuffer::default(),
            RawLine::Eof => return Ok(entry.finish()),
            RawLine::Interrupt => return Ok(None),
        }
    }
}

/// Line editor for raw mode. Pasted text is kept whole, newlines included.
fn read_raw_line(prompt: &str) -> Result<RawLine> {
    let mut input = String::new();
    print!("{} ", prompt.green().bold());
    io::stdout().flush()?;

    loop {
        let key_event = match event::read()? {
            Event::Key(key_event) => key_event,
            Event::Paste(text) => {
                let text = text.replace("\r\n", "\n").replace('\r', "\n");
                print!("{}", text.replace('\n', "\r\n"));
                io::stdout().flush()?;
                input.push_str(&text);
                continue;
            }
            _ => continue,
        };
        if key_event.kind != KeyEventKind::Press {
            continue;
        }

        let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
        let line = match key_event.code {
            KeyCode::Char('c') if ctrl => RawLine::Interrupt,
            KeyCode::Char('d') if ctrl => RawLine::Eof,
            KeyCode::Enter => RawLine::Line(std::mem::take(&mut input)),
            KeyCode::Esc => RawLine::Cancel,
            KeyCode::Char(c) => {
                input.push(c);
                print!("{}", c);
                io::stdout().flush()?;
                continue;
            }
            KeyCode::Backspace => {
                // Pasted newlines are not erased across lines
                if input.ends_with('\n') {
                    continue;
                }
                if input.pop().is_some() {
                    print!("\u{8} \u{8}");
                    io::stdout().flush()?;
                }
                continue;
            }
            _ => continue,
        };

        print!("\r\n");
        io::stdout().flush()?;
        return Ok(line);
    }
}

/// Busy indicator shown while a request is in flight
pub struct Spinner {
    handle: Option<JoinHandle<()>>,
}

impl Spinner {
    const FRAMES: [&'static str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

    /// Start spinning with a message. Only prints the message when stdout is
    /// not a terminal.
    pub fn start(message: &str) -> Self {
        if !io::stdout().is_terminal() {
            println!("{}", message);
            return Self { handle: None };
        }

        let message = message.to_string();
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_millis(100));
            for frame in Self::FRAMES.iter().cycle() {
                interval.tick().await;
                print!("\r{} {}", frame.cyan(), message);
                let _ = io::stdout().flush();
            }
        });

        Self {
            handle: Some(handle),
        }
    }

    /// Stop the task, wait for it to wind down, then clear the line
    pub async fn stop(mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            // Cancelled at its next await point; no frame is printed after this
            let _ = handle.await;
            print!("\r{}\r", " ".repeat(panel_width()));
            let _ = io::stdout().flush();
        }
    }
}
