use std::borrow::Cow;
use std::io::{self, Write};

/// Escape sequence that returns the terminal to its default rendering.
pub const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandStatus {
    Success,
    Fail,
    Question,
    Unsure,
}

impl CommandStatus {
    pub fn symbol(self) -> char {
        match self {
            CommandStatus::Success => '+',
            CommandStatus::Fail => '-',
            CommandStatus::Question => '?',
            CommandStatus::Unsure => '~',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CommandStatus::Success => "success",
            CommandStatus::Fail => "fail",
            CommandStatus::Question => "question",
            CommandStatus::Unsure => "unsure",
        }
    }
}

/// Prints status lines of the form `<color>[<symbol>]<reset> <message>`.
///
/// The color code is taken as-is and never validated, so any text works as a
/// prefix. Messages are never escaped or sanitized either.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StatusPrinter {
    color_code: Cow<'static, str>,
}

impl StatusPrinter {
    pub fn new(color_code: impl Into<String>) -> Self {
        Self {
            color_code: Cow::Owned(color_code.into()),
        }
    }

    /// Same as [`StatusPrinter::new`], usable in `const` items.
    pub const fn from_static(color_code: &'static str) -> Self {
        Self {
            color_code: Cow::Borrowed(color_code),
        }
    }

    pub fn color_code(&self) -> &str {
        &self.color_code
    }

    pub fn reset_code(&self) -> &'static str {
        RESET
    }

    pub fn return_status(&self, symbol: char, message: &str) -> String {
        format!("{}[{symbol}]{RESET} {message}", self.color_code)
    }

    pub fn return_color(&self, message: &str) -> String {
        format!("{}{message}{RESET}", self.color_code)
    }

    pub fn status(&self, status: CommandStatus, message: &str) -> String {
        self.return_status(status.symbol(), message)
    }

    /// Write one status line, newline included, to `out`.
    pub fn write_status<W: Write + ?Sized>(
        &self,
        out: &mut W,
        symbol: char,
        message: &str,
    ) -> io::Result<()> {
        writeln!(out, "{}", self.return_status(symbol, message))
    }

    pub fn write_color<W: Write + ?Sized>(&self, out: &mut W, message: &str) -> io::Result<()> {
        writeln!(out, "{}", self.return_color(message))
    }

    /// Print a status line to stdout. Write failures are returned untouched.
    pub fn print_status(&self, symbol: char, message: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        self.write_status(&mut stdout, symbol, message)?;
        stdout.flush()
    }

    pub fn print(&self, status: CommandStatus, message: &str) -> io::Result<()> {
        self.print_status(status.symbol(), message)
    }

    pub fn print_success(&self, message: &str) -> io::Result<()> {
        self.print(CommandStatus::Success, message)
    }

    pub fn print_fail(&self, message: &str) -> io::Result<()> {
        self.print(CommandStatus::Fail, message)
    }

    pub fn print_question(&self, message: &str) -> io::Result<()> {
        self.print(CommandStatus::Question, message)
    }

    pub fn print_unsure(&self, message: &str) -> io::Result<()> {
        self.print(CommandStatus::Unsure, message)
    }

    pub fn print_color(&self, message: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        self.write_color(&mut stdout, message)?;
        stdout.flush()
    }
}
