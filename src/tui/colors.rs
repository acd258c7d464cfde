//! Color constants for the terminal user interface.

use ratatui::style::Color;

// Palette follows the app's indigo/green branding:
// indigo for chrome and open tasks, green for completed ones.

/// Used for headers, borders and the active input field.
pub const INDIGO: Color = Color::Rgb(99, 102, 241);
/// Used for completed tasks and the celebration banner.
pub const LEAF_GREEN: Color = Color::Rgb(74, 222, 128);
/// Used for muted hint text.
pub const SLATE: Color = Color::Rgb(148, 163, 184);
