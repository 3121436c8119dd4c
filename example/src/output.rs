use console::{StyledObject, style};

const LABEL_COLUMN: usize = 12;

fn line(label: StyledObject<&str>, message: &str) {
    println!("{label:>LABEL_COLUMN$} {message}");
}

/// A change or lifecycle event, labelled in green.
pub fn status(label: &str, message: impl AsRef<str>) {
    line(style(label).green().bold(), message.as_ref());
}

/// A setter or action the slider refused, labelled in yellow.
pub fn rejected(label: &str, message: impl AsRef<str>) {
    line(style(label).yellow().bold(), message.as_ref());
}

/// Indented detail under the previous line.
pub fn step(message: impl AsRef<str>) {
    line(style(""), message.as_ref());
}

pub fn warn(message: impl AsRef<str>) {
    eprintln!("{}: {}", style("warning").yellow().bold(), message.as_ref());
}
