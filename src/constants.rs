// src/constants.rs

/// The name of the directory holding menunav configuration (inside the system config dir).
pub const CONFIG_DIR_NAME: &str = "menunav";

/// The name of the settings file (inside the config directory).
pub const SETTINGS_FILENAME: &str = "config.toml";

/// Environment variable that overrides the location of the settings file.
pub const SETTINGS_PATH_ENV: &str = "MENUNAV_CONFIG";

/// The prompt shown under every menu unless the settings override it.
pub const DEFAULT_PROMPT: &str = "Enter choice: ";

/// Separator placed between menu names in the breadcrumb line.
pub const BREADCRUMB_SEPARATOR: &str = " > ";

// --- Reserved navigation tokens ---

/// Goes back to the previous menu.
pub const BACK_TOKEN: &str = "<";
/// Goes back to the root menu.
pub const TOP_TOKEN: &str = "^";
/// Shows the help text.
pub const HELP_TOKEN: &str = "?";
/// Leaves the navigator.
pub const EXIT_TOKENS: &[&str] = &["exit", "x"];

/// The fixed help text printed for the `?` token.
pub const HELP_LINES: &[&str] = &[
    "Enter the number of your choice.",
    "Enter '<' to go back to the previous menu.",
    "Enter '^' to go back to the main menu.",
    "Enter '?' to display this help message.",
    "Enter 'x' or 'exit' to exit.",
];

/// Printed when `<` is entered on the root menu.
pub const ALREADY_AT_ROOT_MESSAGE: &str = "Already at main menu.";

/// Printed when the user leaves the navigator.
pub const EXIT_MESSAGE: &str = "Exiting...";
