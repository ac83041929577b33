//! # System Interaction Layer
//!
//! This module is the boundary between the navigator and the terminal.
//!
//! ## Modules
//!
//! - **`console`**: The `Console` port the navigator reads decisions from and writes
//!   menus to, plus `LineConsole`, a line-oriented implementation over any
//!   `BufRead`/`Write` pair (stdin/stdout in the binary, in-memory buffers in tests).

pub mod console;
