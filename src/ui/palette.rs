//! Ready-made printers for the standard and high-intensity ANSI foreground colors.

use super::status::StatusPrinter;

pub const BLACK: StatusPrinter = StatusPrinter::from_static("\x1b[30m");
pub const RED: StatusPrinter = StatusPrinter::from_static("\x1b[31m");
pub const GREEN: StatusPrinter = StatusPrinter::from_static("\x1b[32m");
pub const YELLOW: StatusPrinter = StatusPrinter::from_static("\x1b[33m");
pub const BLUE: StatusPrinter = StatusPrinter::from_static("\x1b[34m");
pub const MAGENTA: StatusPrinter = StatusPrinter::from_static("\x1b[35m");
pub const CYAN: StatusPrinter = StatusPrinter::from_static("\x1b[36m");
pub const WHITE: StatusPrinter = StatusPrinter::from_static("\x1b[37m");

pub const LIGHT_RED: StatusPrinter = StatusPrinter::from_static("\x1b[91m");
pub const LIGHT_GREEN: StatusPrinter = StatusPrinter::from_static("\x1b[92m");
pub const LIGHT_YELLOW: StatusPrinter = StatusPrinter::from_static("\x1b[93m");
pub const LIGHT_BLUE: StatusPrinter = StatusPrinter::from_static("\x1b[94m");
pub const LIGHT_MAGENTA: StatusPrinter = StatusPrinter::from_static("\x1b[95m");
pub const LIGHT_CYAN: StatusPrinter = StatusPrinter::from_static("\x1b[96m");
pub const LIGHT_WHITE: StatusPrinter = StatusPrinter::from_static("\x1b[97m");

static NAMED: [(&str, StatusPrinter); 15] = [
    ("black", BLACK),
    ("red", RED),
    ("green", GREEN),
    ("yellow", YELLOW),
    ("blue", BLUE),
    ("magenta", MAGENTA),
    ("cyan", CYAN),
    ("white", WHITE),
    ("light-red", LIGHT_RED),
    ("light-green", LIGHT_GREEN),
    ("light-yellow", LIGHT_YELLOW),
    ("light-blue", LIGHT_BLUE),
    ("light-magenta", LIGHT_MAGENTA),
    ("light-cyan", LIGHT_CYAN),
    ("light-white", LIGHT_WHITE),
];

/// Every named printer, in display order.
pub fn entries() -> impl Iterator<Item = (&'static str, &'static StatusPrinter)> {
    NAMED.iter().map(|(name, printer)| (*name, printer))
}

pub fn names() -> impl Iterator<Item = &'static str> {
    entries().map(|(name, _)| name)
}

/// Resolve a color name, ignoring case and treating `_` and space like `-`.
pub fn lookup(name: &str) -> Option<StatusPrinter> {
    let normalized: String = name
        .trim()
        .chars()
        .map(|c| match c {
            '_' | ' ' => '-',
            c => c.to_ascii_lowercase(),
        })
        .collect();

    NAMED
        .iter()
        .find(|(candidate, _)| *candidate == normalized)
        .map(|(_, printer)| printer.clone())
}
