use anstyle::{AnsiColor, Style};
use is_terminal::IsTerminal;
use std::fmt::Display;
use std::io::{self, Write};

const STATUS_WIDTH: usize = 10;

#[derive(Debug, Clone, Copy)]
enum StatusKind {
    Pending,
    Success,
    Info,
    Warn,
    Error,
}

fn style_for(kind: StatusKind) -> Style {
    let style = Style::new().bold();
    match kind {
        StatusKind::Pending => style.fg_color(Some(AnsiColor::Cyan.into())),
        StatusKind::Success => style.fg_color(Some(AnsiColor::Green.into())),
        StatusKind::Info => style.fg_color(Some(AnsiColor::Blue.into())),
        StatusKind::Warn => style.fg_color(Some(AnsiColor::Yellow.into())),
        StatusKind::Error => style.fg_color(Some(AnsiColor::Red.into())),
    }
}

fn write_status(kind: StatusKind, label: &str, message: &str) {
    // Warnings and errors go to stderr, everything else to stdout
    let (mut handle, use_color): (Box<dyn Write>, bool) = match kind {
        StatusKind::Warn | StatusKind::Error => {
            let stderr = io::stderr();
            let color = stderr.is_terminal() && std::env::var_os("NO_COLOR").is_none();
            (Box::new(stderr.lock()), color)
        }
        _ => {
            let stdout = io::stdout();
            let color = stdout.is_terminal() && std::env::var_os("NO_COLOR").is_none();
            (Box::new(stdout.lock()), color)
        }
    };

    let padded_label = format!("{:>width$}", label, width = STATUS_WIDTH);

    if use_color {
        let style = style_for(kind);
        let _ = writeln!(
            handle,
            "{}{padded_label}{} {message}",
            style.render(),
            style.render_reset()
        );
    } else {
        let _ = writeln!(handle, "{padded_label} {message}");
    }
    let _ = handle.flush();
}

pub fn status(label: &str, message: impl Display) {
    write_status(StatusKind::Pending, label, &message.to_string());
}

pub fn success(label: &str, message: impl Display) {
    write_status(StatusKind::Success, label, &message.to_string());
}

pub fn info(message: impl Display) {
    write_status(StatusKind::Info, "Info", &message.to_string());
}

pub fn warn(message: impl Display) {
    write_status(StatusKind::Warn, "Warning", &message.to_string());
}

pub fn error(message: impl Display) {
    write_status(StatusKind::Error, "Error", &message.to_string());
}
