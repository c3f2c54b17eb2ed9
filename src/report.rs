use std::io::{self, IsTerminal, Write};

use anyhow::{bail, Result};
use dialoguer::console;
use serde::Serialize;
use termstatus::{palette, CommandStatus, StatusPrinter};

use crate::args::{AnsiMode, BaseArgs};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Report<'a> {
    Status {
        status: Option<CommandStatus>,
        symbol: char,
        message: &'a str,
    },
    Color {
        message: &'a str,
    },
}

#[derive(Debug, Serialize)]
struct JsonLine<'a> {
    status: &'a str,
    line: String,
}

#[derive(Debug, Serialize)]
struct JsonColor<'a> {
    name: &'a str,
    code: &'a str,
}

impl<'a> Report<'a> {
    pub fn known(status: CommandStatus, message: &'a str) -> Self {
        Report::Status {
            status: Some(status),
            symbol: status.symbol(),
            message,
        }
    }

    pub fn custom(symbol: &str, message: &'a str) -> Result<Self> {
        let mut chars = symbol.chars();
        let (Some(symbol), None) = (chars.next(), chars.next()) else {
            bail!("symbol must be a single character, got {symbol:?}");
        };
        Ok(Report::Status {
            status: None,
            symbol,
            message,
        })
    }

    fn label(&self) -> &'static str {
        match self {
            Report::Status {
                status: Some(status),
                ..
            } => status.name(),
            Report::Status { status: None, .. } => "status",
            Report::Color { .. } => "color",
        }
    }

    fn default_printer(&self) -> StatusPrinter {
        match self {
            Report::Status {
                status: Some(CommandStatus::Success),
                ..
            } => palette::LIGHT_GREEN,
            Report::Status {
                status: Some(CommandStatus::Fail),
                ..
            } => palette::LIGHT_RED,
            Report::Status {
                status: Some(CommandStatus::Question),
                ..
            } => palette::LIGHT_CYAN,
            Report::Status {
                status: Some(CommandStatus::Unsure),
                ..
            } => palette::LIGHT_YELLOW,
            Report::Status { status: None, .. } | Report::Color { .. } => palette::LIGHT_WHITE,
        }
    }

    fn render(&self, printer: &StatusPrinter) -> String {
        match *self {
            Report::Status {
                symbol, message, ..
            } => printer.return_status(symbol, message),
            Report::Color { message } => printer.return_color(message),
        }
    }

    fn print(&self, printer: &StatusPrinter) -> io::Result<()> {
        match *self {
            Report::Status {
                status: Some(status),
                message,
                ..
            } => match status {
                CommandStatus::Success => printer.print_success(message),
                CommandStatus::Fail => printer.print_fail(message),
                CommandStatus::Question => printer.print_question(message),
                CommandStatus::Unsure => printer.print_unsure(message),
            },
            Report::Status {
                status: None,
                symbol,
                message,
            } => printer.print_status(symbol, message),
            Report::Color { message } => printer.print_color(message),
        }
    }
}

/// Palette name first, otherwise the value is used verbatim as the escape code.
pub fn resolve_printer(color: Option<&str>, fallback: StatusPrinter) -> StatusPrinter {
    match color {
        Some(color) => palette::lookup(color).unwrap_or_else(|| StatusPrinter::new(color)),
        None => fallback,
    }
}

fn ansi_enabled(mode: AnsiMode) -> bool {
    match mode {
        AnsiMode::Always => true,
        AnsiMode::Never => false,
        AnsiMode::Auto => {
            let no_color = std::env::var_os("NO_COLOR").is_some_and(|value| !value.is_empty());
            !no_color && io::stdout().is_terminal()
        }
    }
}

fn write_line(line: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{line}")?;
    stdout.flush()
}

pub fn run(base: &BaseArgs, report: Report<'_>) -> Result<()> {
    let printer = resolve_printer(base.color.as_deref(), report.default_printer());
    let ansi = ansi_enabled(base.ansi);

    if base.json {
        let mut line = report.render(&printer);
        if !ansi {
            line = strip_ansi_escapes::strip_str(&line);
        }
        let json = JsonLine {
            status: report.label(),
            line,
        };
        write_line(&serde_json::to_string(&json)?)?;
    } else if ansi {
        report.print(&printer)?;
    } else {
        write_line(&strip_ansi_escapes::strip_str(report.render(&printer)))?;
    }

    Ok(())
}

pub fn list_colors(base: &BaseArgs) -> Result<()> {
    if base.json {
        let colors: Vec<JsonColor<'_>> = palette::entries()
            .map(|(name, printer)| JsonColor {
                name,
                code: printer.color_code(),
            })
            .collect();
        write_line(&serde_json::to_string(&colors)?)?;
        return Ok(());
    }

    let ansi = ansi_enabled(base.ansi);
    console::set_colors_enabled(ansi);

    let name_width = palette::names().map(str::len).max().unwrap_or(0);
    write_line(&format!(
        "{}  {}",
        console::style(format!("{:name_width$}", "Name")).dim().bold(),
        console::style("Sample").dim().bold()
    ))?;

    for (name, printer) in palette::entries() {
        let sample = if ansi {
            printer.return_status('+', name)
        } else {
            format!("[+] {name}")
        };
        write_line(&format!("{name:name_width$}  {sample}"))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_symbol_must_be_one_char() {
        assert!(Report::custom("+", "ok").is_ok());
        assert!(Report::custom("é", "ok").is_ok());
        assert!(Report::custom("", "ok").is_err());
        assert!(Report::custom("++", "ok").is_err());
    }

    #[test]
    fn known_reports_use_status_symbol() {
        let report = Report::known(CommandStatus::Unsure, "maybe");
        assert_eq!(
            report,
            Report::Status {
                status: Some(CommandStatus::Unsure),
                symbol: '~',
                message: "maybe",
            }
        );
        assert_eq!(report.label(), "unsure");
    }

    #[test]
    fn default_colors_per_status() {
        let cases = [
            (CommandStatus::Success, palette::LIGHT_GREEN),
            (CommandStatus::Fail, palette::LIGHT_RED),
            (CommandStatus::Question, palette::LIGHT_CYAN),
            (CommandStatus::Unsure, palette::LIGHT_YELLOW),
        ];
        for (status, expected) in cases {
            assert_eq!(Report::known(status, "m").default_printer(), expected);
        }
        assert_eq!(
            Report::Color { message: "m" }.default_printer(),
            palette::LIGHT_WHITE
        );
    }

    #[test]
    fn color_option_prefers_palette_names() {
        assert_eq!(
            resolve_printer(Some("Light_Red"), palette::GREEN),
            palette::LIGHT_RED
        );
        assert_eq!(
            resolve_printer(Some("\x1b[35m"), palette::GREEN).color_code(),
            "\x1b[35m"
        );
        assert_eq!(resolve_printer(None, palette::GREEN), palette::GREEN);
    }

    #[test]
    fn render_matches_printer_format() {
        let printer = palette::LIGHT_GREEN;
        assert_eq!(
            Report::known(CommandStatus::Success, "Done").render(&printer),
            "\x1b[92m[+]\x1b[0m Done"
        );
        assert_eq!(
            Report::Color { message: "Done" }.render(&printer),
            "\x1b[92mDone\x1b[0m"
        );
    }
}
