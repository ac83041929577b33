// src/cli/mod.rs

use clap::Parser;

/// menunav: an interactive, breadcrumb-aware menu navigator.
///
/// Pick entries by number. At any prompt you can also enter:
///
///   <          go back to the previous menu
///   ^          go back to the main menu
///   ?          show help
///   x, exit    leave
///
/// Settings are read from `menunav/config.toml` in the system config
/// directory, or from the file named by `MENUNAV_CONFIG`.
#[derive(Parser, Debug)]
#[command(author, version, about)]
#[command(disable_help_subcommand = true)]
#[command(
    styles = clap::builder::Styles::styled()
        .header(clap::builder::styling::AnsiColor::Yellow.on_default().bold())
        .usage(clap::builder::styling::AnsiColor::Yellow.on_default().bold())
        .literal(clap::builder::styling::AnsiColor::Cyan.on_default().bold())
        .placeholder(clap::builder::styling::AnsiColor::Green.on_default()),
)]
pub struct Cli {}
