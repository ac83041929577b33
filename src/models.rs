// src/models.rs

use crate::system::console::Console;
use serde::Deserialize;
use std::fmt;
use thiserror::Error;

// MARK: --- Menu Tree ---

/// Errors raised while building the menu tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MenuError {
    /// A name was blank or a menu had no items.
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),
}

/// Result type for menu construction.
pub type MenuResult<T> = Result<T, MenuError>;

/// The callback stored in an [`Action`].
///
/// The console is handed in explicitly so an action can talk to the user
/// (e.g. prompt for a number) through the same port the navigator uses.
pub type Operation = Box<dyn Fn(&mut dyn Console) -> anyhow::Result<()>>;

/// A named leaf of the menu tree that runs an operation when selected.
pub struct Action {
    name: String,
    operation: Operation,
}

impl Action {
    /// Creates an action whose operation may use the console and may fail.
    ///
    /// # Errors
    /// Returns [`MenuError::InvalidArgument`] if `name` is blank.
    pub fn new<F>(name: impl Into<String>, operation: F) -> MenuResult<Self>
    where
        F: Fn(&mut dyn Console) -> anyhow::Result<()> + 'static,
    {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(MenuError::InvalidArgument("Action name cannot be blank"));
        }
        Ok(Self {
            name,
            operation: Box::new(operation),
        })
    }

    /// Creates an action from a plain zero-argument side effect.
    pub fn from_fn<F>(name: impl Into<String>, operation: F) -> MenuResult<Self>
    where
        F: Fn() + 'static,
    {
        Self::new(name, move |_: &mut dyn Console| {
            operation();
            Ok(())
        })
    }

    /// The label shown in the parent menu.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Runs the stored operation.
    pub fn run(&self, console: &mut dyn Console) -> anyhow::Result<()> {
        (self.operation)(console)
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// A named, non-empty, ordered list of menu items.
#[derive(Debug)]
pub struct Menu {
    name: String,
    items: Vec<MenuItem>,
}

impl Menu {
    /// # Errors
    /// Returns [`MenuError::InvalidArgument`] if `name` is blank or `items` is empty.
    pub fn new(name: impl Into<String>, items: Vec<MenuItem>) -> MenuResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(MenuError::InvalidArgument("Menu name cannot be blank"));
        }
        if items.is_empty() {
            return Err(MenuError::InvalidArgument(
                "Menu must have at least one item",
            ));
        }
        Ok(Self { name, items })
    }

    /// The label shown in the breadcrumb line and in the parent menu.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The items in display order. Never empty.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Looks up an item by its 1-based display number.
    pub fn item(&self, number: usize) -> Option<&MenuItem> {
        number.checked_sub(1).and_then(|i| self.items.get(i))
    }
}

/// An entry of a [`Menu`]: either something to run or something to descend into.
#[derive(Debug)]
pub enum MenuItem {
    /// A leaf that runs when selected.
    Action(Action),
    /// A submenu to descend into.
    Menu(Menu),
}

impl MenuItem {
    /// The display name, regardless of the variant.
    pub fn name(&self) -> &str {
        match self {
            Self::Action(action) => action.name(),
            Self::Menu(menu) => menu.name(),
        }
    }
}

impl From<Action> for MenuItem {
    fn from(action: Action) -> Self {
        Self::Action(action)
    }
}

impl From<Menu> for MenuItem {
    fn from(menu: Menu) -> Self {
        Self::Menu(menu)
    }
}

// MARK: --- Settings ---

/// User preferences loaded from `config.toml`. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// The prompt written under each menu.
    pub prompt: String,
    /// Whether headings and diagnostics are styled with ANSI colors.
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            prompt: crate::constants::DEFAULT_PROMPT.to_string(),
            color: true,
        }
    }
}

// MARK: --- UNIT TESTS ---
