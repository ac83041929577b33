// src/core/mod.rs

/// The immutable trail of menus from the root to the displayed one.
pub mod breadcrumbs;
/// The prompt loop that applies navigation decisions.
pub mod navigator;
/// Turns one input line into a navigation decision.
pub mod option_parser;
/// Locating and loading `config.toml`.
pub mod settings;
