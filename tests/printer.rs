use termstatus::{palette, CommandStatus, StatusPrinter, RESET};

#[test]
fn public_api_formats() {
    let green = StatusPrinter::new("\x1b[92m");
    assert_eq!(green.return_status('+', "Done"), "\x1b[92m[+]\x1b[0m Done");
    assert_eq!(green.return_color("Done"), "\x1b[92mDone\x1b[0m");
    assert_eq!(green.reset_code(), RESET);
    assert_eq!(green, palette::LIGHT_GREEN);
}

#[test]
fn shortcuts_match_generic_write() {
    let red = palette::LIGHT_RED;
    let statuses = [
        CommandStatus::Success,
        CommandStatus::Fail,
        CommandStatus::Question,
        CommandStatus::Unsure,
    ];
    for status in statuses {
        let mut buf = Vec::new();
        red.write_status(&mut buf, status.symbol(), "m").unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            format!("{}\n", red.status(status, "m"))
        );
    }
}

#[test]
fn writes_to_any_sink() {
    let printer = StatusPrinter::new(String::from("\x1b[36m"));
    let mut sink: Box<dyn std::io::Write> = Box::new(Vec::new());
    printer.write_color(&mut *sink, "boxed").unwrap();
    printer.write_status(&mut std::io::sink(), '~', "dropped").unwrap();
}
