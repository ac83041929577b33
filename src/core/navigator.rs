// src/core/navigator.rs

use crate::{
    constants::{ALREADY_AT_ROOT_MESSAGE, DEFAULT_PROMPT, EXIT_MESSAGE, HELP_LINES},
    core::{
        breadcrumbs::Breadcrumbs,
        option_parser::{self, NavigationDecision, OptionError},
    },
    models::{Menu, MenuItem},
    system::console::{Console, ConsoleError},
};
use thiserror::Error;

/// Failures that end a navigation session.
#[derive(Error, Debug)]
pub enum NavigationError {
    /// Reading or writing the console failed.
    #[error("Console Error: {0}")]
    Console(#[from] ConsoleError),
    /// A `SelectIndex` that does not name an item of the current menu.
    #[error("Selection {number} does not exist in menu '{menu}' ({len} items).")]
    InvalidSelection {
        /// The 1-based number requested.
        number: usize,
        /// Items in the current menu.
        len: usize,
        /// Name of the current menu.
        menu: String,
    },
}

/// Result type for navigation.
pub type NavigationResult<T> = Result<T, NavigationError>;

/// Whether the prompt loop keeps going after a decision has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Render the (possibly new) current menu and prompt again.
    Continue,
    /// The user left; the loop returns.
    Exit,
}

/// The menu navigation state machine.
///
/// The only state is the breadcrumb trail; the displayed menu is always its
/// last entry. Each decision replaces the trail with a new value.
#[derive(Debug, Clone)]
pub struct Navigator<'m> {
    crumbs: Breadcrumbs<'m>,
    prompt: String,
}

impl<'m> Navigator<'m> {
    /// Starts a session on `root` with a trail of length 1.
    pub fn new(root: &'m Menu) -> Self {
        Self {
            crumbs: Breadcrumbs::new(root),
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }

    /// Replaces the prompt written under each menu.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// The trail from the root to the displayed menu.
    pub fn breadcrumbs(&self) -> &Breadcrumbs<'m> {
        &self.crumbs
    }

    /// The menu currently displayed.
    pub fn current(&self) -> &'m Menu {
        self.crumbs.current()
    }

    /// Runs the prompt loop until the user exits.
    ///
    /// # Errors
    /// Only console failures escape the loop (including input running out).
    /// Bad input is answered with a message and a new prompt.
    pub fn run(&mut self, console: &mut dyn Console) -> NavigationResult<()> {
        log::info!("Navigation session started at '{}'.", self.crumbs.root().name());
        loop {
            self.render(console)?;
            let decision = self.prompt_for_decision(console)?;
            if self.apply(decision, console)? == Flow::Exit {
                log::info!("Navigation session ended.");
                return Ok(());
            }
        }
    }

    /// Writes the breadcrumb line followed by the numbered items of the current menu.
    pub fn render(&self, console: &mut dyn Console) -> NavigationResult<()> {
        console.write_heading(&self.crumbs.render())?;
        for (number, item) in self.current().items().iter().enumerate() {
            console.write_line(&format!("{}. {}", number + 1, item.name()))?;
        }
        Ok(())
    }

    /// Reads lines until one of them resolves to a decision for the current menu.
    fn prompt_for_decision(&self, console: &mut dyn Console) -> NavigationResult<NavigationDecision> {
        let item_count = self.current().items().len();
        loop {
            let line = console.read_line(&self.prompt)?;
            match option_parser::parse_option(&line, item_count) {
                Ok(decision) => return Ok(decision),
                Err(OptionError::Blank) => continue,
                Err(e) => console.write_notice(&e.to_string())?,
            }
        }
    }

    /// Applies one decision to the navigator's state.
    ///
    /// Selecting an action runs it and then resets the trail to the root menu.
    ///
    /// # Errors
    /// Returns [`NavigationError::InvalidSelection`] for a `SelectIndex` outside
    /// `1..=N` of the current menu; the state is left unchanged.
    pub fn apply(
        &mut self,
        decision: NavigationDecision,
        console: &mut dyn Console,
    ) -> NavigationResult<Flow> {
        match decision {
            NavigationDecision::Exit => {
                console.write_line(EXIT_MESSAGE)?;
                log::debug!("Exit requested at depth {}.", self.crumbs.depth());
                return Ok(Flow::Exit);
            }
            NavigationDecision::Help => {
                for line in HELP_LINES {
                    console.write_line(line)?;
                }
            }
            NavigationDecision::Top => {
                log::debug!("Returning to top from depth {}.", self.crumbs.depth());
                self.crumbs = self.crumbs.top();
            }
            NavigationDecision::Back => match self.crumbs.ascend() {
                Some(parent) => {
                    log::debug!("Going back to '{}'.", parent.current().name());
                    self.crumbs = parent;
                }
                None => console.write_notice(ALREADY_AT_ROOT_MESSAGE)?,
            },
            NavigationDecision::SelectIndex(number) => self.select(number, console)?,
        }
        Ok(Flow::Continue)
    }

    fn select(&mut self, number: usize, console: &mut dyn Console) -> NavigationResult<()> {
        let menu = self.current();
        let invalid = || NavigationError::InvalidSelection {
            number,
            len: menu.items().len(),
            menu: menu.name().to_string(),
        };
        let item = menu.item(number).ok_or_else(invalid)?;

        match item {
            MenuItem::Action(action) => {
                log::debug!("Running action '{}'.", action.name());
                if let Err(e) = action.run(console) {
                    // A closed input stream ends the session; anything else is reported.
                    if let Some(ConsoleError::InputClosed) = e.downcast_ref::<ConsoleError>() {
                        return Err(ConsoleError::InputClosed.into());
                    }
                    log::warn!("Action '{}' failed: {:#}", action.name(), e);
                    console.write_notice(&format!("Action '{}' failed: {}", action.name(), e))?;
                }
                self.crumbs = self.crumbs.top();
            }
            MenuItem::Menu(submenu) => {
                log::debug!("Descending into '{}'.", submenu.name());
                self.crumbs = self.crumbs.descend(submenu).ok_or_else(invalid)?;
            }
        }
        Ok(())
    }
}

/// Runs a full navigation session on `root` with the default prompt.
pub fn prompt_menu(root: &Menu, console: &mut dyn Console) -> NavigationResult<()> {
    Navigator::new(root).run(console)
}

// MARK: --- UNIT TESTS ---
