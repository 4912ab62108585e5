//! Parsing of lines typed into the form

use senti_core::{Error, MaxTokens, Result, Temperature};

/// What a line of input asks the session to do
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Text to analyze (the trigger)
    Analyze(String),
    SetTemperature(Temperature),
    SetMaxTokens(MaxTokens),
    ShowOptions,
    About,
    Help,
    Quit,
}

impl Command {
    /// Parse a line. Lines starting with `:` are options and commands,
    /// everything else (including blank lines) is text to analyze.
    pub fn parse(line: &str) -> Result<Self> {
        let Some(rest) = line.trim_start().strip_prefix(':') else {
            return Ok(Command::Analyze(line.to_string()));
        };

        let words: Vec<&str> = rest.split_whitespace().collect();
        let Some((name, args)) = words.split_first() else {
            return Ok(Command::Analyze(line.to_string()));
        };

        // A command word followed by more than it takes is ordinary text,
        // so ":about the movie, I hated it" is analyzed rather than dropped.
        let command = match (name.to_lowercase().as_str(), args) {
            ("temperature" | "temp", [value]) => Command::SetTemperature(value.parse()?),
            ("max-tokens" | "tokens", [value]) => Command::SetMaxTokens(value.parse()?),
            ("temperature" | "temp" | "max-tokens" | "tokens", []) => {
                return Err(Error::InvalidInput(format!(":{} needs a value", name)));
            }
            ("options", []) => Command::ShowOptions,
            ("about", []) => Command::About,
            ("help", []) => Command::Help,
            ("quit" | "exit" | "q", []) => Command::Quit,
            _ => Command::Analyze(line.to_string()),
        };
        Ok(command)
    }

    /// Whether this line is complete on its own rather than part of text
    pub fn is_standalone(line: &str) -> bool {
        !matches!(Command::parse(line), Ok(Command::Analyze(_)))
    }
}
