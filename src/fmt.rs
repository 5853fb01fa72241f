//! Shared formatting utilities for console output

use console::Emoji;

/// Environment variable that switches icons to their ASCII fallbacks
pub const NO_EMOJI_VAR: &str = "NO_EMOJI";

/// Checkmark emoji for success
pub const CHECKMARK: Emoji = Emoji("✅", "[OK]");

/// Crossmark emoji for failure
pub const CROSSMARK: Emoji = Emoji("❌", "[FAIL]");

/// Sparkles emoji for completion
pub const SPARKLES: Emoji = Emoji("✨", "*");

/// Microscope emoji for inspection
pub const MICROSCOPE: Emoji = Emoji("🔍", ">>");

/// Warning emoji for caution
pub const WARNING: Emoji = Emoji("⚠️", "!");

/// Pick the emoji or its fallback
///
/// The fallback is used when `NO_EMOJI` is set or the terminal cannot show emoji.
///
/// # Examples
///
/// ```
/// use bundle_banner::fmt::{icon, CHECKMARK};
///
/// let shown = icon(CHECKMARK);
/// assert!(shown == "✅" || shown == "[OK]");
/// ```
pub fn icon(emoji: Emoji<'static, 'static>) -> &'static str {
    if std::env::var_os(NO_EMOJI_VAR).is_some()
        || !console::Term::stdout().features().wants_emoji()
    {
        emoji.1
    } else {
        emoji.0
    }
}

/// Format bytes as human-readable size string
///
/// # Examples
///
/// ```
/// use bundle_banner::fmt::format_bytes;
///
/// assert_eq!(format_bytes(512), "512 B");
/// assert_eq!(format_bytes(1024), "1.00 KB");
/// assert_eq!(format_bytes(1_048_576), "1.00 MB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
