use clap::{Args, ValueEnum};

#[derive(Debug, Clone, Args)]
pub struct BaseArgs {
    /// Output as JSON
    #[arg(short = 'j', long, global = true)]
    pub json: bool,

    /// Color name (see `termstatus colors`) or a raw escape sequence
    #[arg(short = 'c', long, env = "TERMSTATUS_COLOR", global = true)]
    pub color: Option<String>,

    /// When to emit escape sequences (or via TERMSTATUS_ANSI)
    #[arg(
        long,
        value_enum,
        env = "TERMSTATUS_ANSI",
        default_value_t = AnsiMode::Auto,
        global = true
    )]
    pub ansi: AnsiMode,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
pub enum AnsiMode {
    /// Only when stdout is a terminal and NO_COLOR is unset
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone, Args)]
pub struct MessageArgs {
    /// Message to print after the marker
    #[arg(allow_hyphen_values = true)]
    pub message: String,
}

#[derive(Debug, Clone, Args)]
pub struct StatusArgs {
    /// Single character placed between the brackets
    pub symbol: String,

    /// Message to print after the marker
    #[arg(allow_hyphen_values = true)]
    pub message: String,
}
