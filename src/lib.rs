//! # menunav
//!
//! An interactive, text-driven hierarchical menu navigator.
//!
//! A [`models::Menu`] tree is built once in code. [`core::navigator::Navigator`]
//! then walks it: it shows the breadcrumb trail and the numbered items of the
//! current menu, reads one decision from a [`system::console::Console`], and
//! applies it.

/// Command-line arguments of the binary.
pub mod cli;
/// Reserved tokens, fixed messages and file names.
pub mod constants;
/// Option parsing, the breadcrumb trail, the navigator and settings loading.
pub mod core;
/// The demo menu tree and its counter.
pub mod demo;
/// The menu tree data model and user settings.
pub mod models;
/// The console port and its line-based implementation.
pub mod system;
