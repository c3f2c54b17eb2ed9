//! Colored status lines for terminals.
//!
//! ```
//! use termstatus::StatusPrinter;
//!
//! let green = StatusPrinter::new("\x1b[92m");
//! assert_eq!(green.return_status('+', "Done"), "\x1b[92m[+]\x1b[0m Done");
//! ```

pub mod ui;

pub use ui::{palette, CommandStatus, StatusPrinter, RESET};
