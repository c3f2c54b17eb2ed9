pub mod palette;
mod status;

pub use status::{CommandStatus, StatusPrinter, RESET};
