//! Terminal front end for Senti

mod command;
mod entry;
mod session;
mod ui;

#[cfg(test)]
mod tests;

pub use command::Command;
pub use entry::{read_entry, EntryBuffer};
pub use session::{FormState, Outcome, Session};
pub use ui::{
    display_banner, display_footer, display_options, display_outcome, print_about, print_help,
    read_input, Spinner,
};

// Re-export core types
pub use senti_core::{Error, Result};
