// src/bin/menunav.rs

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use menunav::{
    cli::Cli,
    core::{navigator::Navigator, settings},
    demo::{self, counter::Counter},
    system::console::LineConsole,
};
use std::cell::RefCell;
use std::io;
use std::rc::Rc;

/// The main entry point of the `menunav` application.
/// It sets up logging, parses arguments, runs the navigator,
/// and performs centralized error handling.
fn main() {
    env_logger::init();

    if let Err(e) = run_cli(Cli::parse()) {
        eprintln!("\n{}: {:#}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Loads settings, builds the demo menu and navigates it on stdin/stdout
/// until the user exits.
fn run_cli(cli: Cli) -> Result<()> {
    log::debug!("CLI args parsed: {:?}", cli);

    let settings = settings::load_settings().context("Failed to load settings")?;
    if !settings.color {
        colored::control::set_override(false);
    }
    log::debug!("Effective settings: {:?}", settings);

    let counter = Rc::new(RefCell::new(Counter::new()));
    let menu = demo::build_main_menu(&counter).context("Failed to build the main menu")?;

    let stdin = io::stdin();
    let mut console = LineConsole::new(stdin.lock(), io::stdout()).styled(settings.color);

    Navigator::new(&menu)
        .with_prompt(settings.prompt)
        .run(&mut console)?;

    log::debug!("Final count: {}", counter.borrow().count());
    Ok(())
}
