// src/core/option_parser.rs

use crate::constants::{BACK_TOKEN, EXIT_TOKENS, HELP_TOKEN, TOP_TOKEN};
use crate::system::console::Token;
use thiserror::Error;

/// What the user asked for with one line of input at a menu prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDecision {
    /// Select the item with this 1-based number.
    SelectIndex(usize),
    /// Return to the previous menu (`<`).
    Back,
    /// Return to the root menu (`^`).
    Top,
    /// End the session (`exit` or `x`).
    Exit,
    /// Show the help text (`?`).
    Help,
}

/// Input that does not resolve to a decision. The caller re-prompts on the same menu.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OptionError {
    /// An integer outside `1..=max`.
    #[error("Choice must be between 1 and {max}")]
    OutOfRange {
        /// Number of items in the displayed menu.
        max: usize,
    },
    /// A word that is not a reserved token.
    #[error("Invalid input. Please enter a number, or '?' for help.")]
    Unrecognized(String),
    /// Whitespace only.
    #[error("No input was entered.")]
    Blank,
}

/// Resolves one raw line of input against a menu holding `item_count` items.
///
/// # Logic:
/// - An integer in `1..=item_count` selects that item; any other integer is out of range.
/// - Otherwise the trimmed line is matched case-sensitively against the reserved
///   tokens `<`, `^`, `?`, `exit` and `x`.
/// - Anything else is unrecognized. Whitespace-only input is reported as [`OptionError::Blank`].
pub fn parse_option(input: &str, item_count: usize) -> Result<NavigationDecision, OptionError> {
    let token = Token::parse(input).ok_or(OptionError::Blank)?;
    let decision = match token {
        Token::Integer(choice) => {
            let in_range = usize::try_from(choice)
                .ok()
                .filter(|number| (1..=item_count).contains(number));
            match in_range {
                Some(number) => NavigationDecision::SelectIndex(number),
                None => return Err(OptionError::OutOfRange { max: item_count }),
            }
        }
        Token::Word(word) => match word.as_str() {
            BACK_TOKEN => NavigationDecision::Back,
            TOP_TOKEN => NavigationDecision::Top,
            HELP_TOKEN => NavigationDecision::Help,
            w if EXIT_TOKENS.contains(&w) => NavigationDecision::Exit,
            _ => return Err(OptionError::Unrecognized(input.trim().to_string())),
        },
    };
    log::trace!("Parsed {:?} as {:?}.", input, decision);
    Ok(decision)
}

// MARK: --- UNIT TESTS ---
