// src/core/breadcrumbs.rs

use crate::constants::BREADCRUMB_SEPARATOR;
use crate::models::{Menu, MenuItem};

/// The path of menus from the root to the one currently displayed.
///
/// A trail is a value: every navigation step returns a new trail and leaves
/// the old one untouched. It is never empty, and each menu after the root is
/// an item of the menu before it.
#[derive(Debug, Clone)]
pub struct Breadcrumbs<'m> {
    root: &'m Menu,
    /// Menus below the root, outermost first.
    descent: Vec<&'m Menu>,
}

impl<'m> Breadcrumbs<'m> {
    /// A trail holding only the root menu.
    pub fn new(root: &'m Menu) -> Self {
        Self {
            root,
            descent: Vec::new(),
        }
    }

    /// The first menu of the trail.
    pub fn root(&self) -> &'m Menu {
        self.root
    }

    /// The menu at the end of the trail.
    pub fn current(&self) -> &'m Menu {
        self.descent.last().copied().unwrap_or(self.root)
    }

    /// Number of menus in the trail, root included. Always at least 1.
    pub fn depth(&self) -> usize {
        self.descent.len() + 1
    }

    /// Whether the trail holds only the root.
    pub fn is_at_root(&self) -> bool {
        self.descent.is_empty()
    }

    /// Menus from the root to the current one.
    pub fn menus(&self) -> impl Iterator<Item = &'m Menu> + '_ {
        std::iter::once(self.root).chain(self.descent.iter().copied())
    }

    /// Extends the trail with `submenu`.
    ///
    /// Returns `None` if `submenu` is not an item of the current menu, since
    /// the resulting trail would not describe a real path through the tree.
    pub fn descend(&self, submenu: &'m Menu) -> Option<Self> {
        let is_child = self.current().items().iter().any(|item| match item {
            MenuItem::Menu(child) => std::ptr::eq(child, submenu),
            MenuItem::Action(_) => false,
        });
        if !is_child {
            return None;
        }

        let mut descent = Vec::with_capacity(self.descent.len() + 1);
        descent.extend_from_slice(&self.descent);
        descent.push(submenu);
        Some(Self {
            root: self.root,
            descent,
        })
    }

    /// Drops the last menu. Returns `None` at the root.
    pub fn ascend(&self) -> Option<Self> {
        let (_, parents) = self.descent.split_last()?;
        Some(Self {
            root: self.root,
            descent: parents.to_vec(),
        })
    }

    /// A trail holding only the root menu of this one.
    pub fn top(&self) -> Self {
        Self::new(self.root)
    }

    /// The breadcrumb line, e.g. `Main Menu > Counter >`.
    pub fn render(&self) -> String {
        let names: Vec<&str> = self.menus().map(Menu::name).collect();
        format!("{}{}", names.join(BREADCRUMB_SEPARATOR), BREADCRUMB_SEPARATOR.trim_end())
    }
}

// MARK: --- UNIT TESTS ---
