//! Report output.
//!
//! Every line goes through [`print`], which emits it on the report target so the
//! subscriber writes it verbatim to stdout.

use std::{cell::Cell, fmt::Display};

use crate::terminal::{colors, logging::PRINT_TARGET};
use colored::*;
use tracing::info;
use unicode_width::UnicodeWidthStr;

pub const TOTAL_WIDTH: usize = 64;

const THIN_RULE: &str = "─";
const FAT_RULE: &str = "═";

thread_local! {
    pub static GLOBAL_KEY_WIDTH: Cell<usize> = const { Cell::new(0) }
}

#[macro_export]
macro_rules! mprint {
    () => {
        $crate::terminal::print::print("");
    };
    ($msg:expr) => {
        $crate::terminal::print::print($msg);
    };
}

/// Values that bring their own colour keep it, plain strings get the default.
pub trait WithDefaultColor {
    fn with_default(self, default_color: Color) -> ColoredString;
}

impl WithDefaultColor for String {
    fn with_default(self, default_color: Color) -> ColoredString {
        self.color(default_color)
    }
}

impl WithDefaultColor for ColoredString {
    fn with_default(self, _default_color: Color) -> ColoredString {
        self
    }
}

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

const BANNER: &str = r#"
      ____                  _
     / ___|  ___ __ _ _ __ | |    ___ _ __  ___
     \___ \ / __/ _` | '_ \| |   / _ \ '_ \/ __|
      ___) | (_| (_| | | | | |__|  __/ | | \__ \
     |____/ \___\__,_|_| |_|_____\___|_| |_|___/
"#;

/// Splits the space left around `label` into left and right padding.
fn padding(label: &str) -> (usize, usize) {
    let free: usize = TOTAL_WIDTH.saturating_sub(UnicodeWidthStr::width(label));
    (free / 2, free - free / 2)
}

pub fn banner(no_banner: bool, q_level: u8) {
    if no_banner || q_level > 0 {
        return;
    }

    let title: String = format!("⟦ SCANLENS v{} ⟧", env!("CARGO_PKG_VERSION"));
    let (left, right) = padding(&title);
    print(&format!(
        "{}{}{}",
        FAT_RULE.repeat(left).bright_black(),
        title.bright_green().bold(),
        FAT_RULE.repeat(right).bright_black()
    ));
    print(&format!("{}", BANNER.cyan()));
}

/// Section title centered in a thin rule, e.g. `───⟦ METRICS ⟧───`.
pub fn header_line(msg: &str) -> String {
    let title: String = format!("⟦ {} ⟧", msg.to_uppercase());
    let (left, right) = padding(&title);
    format!(
        "{}{}{}",
        THIN_RULE.repeat(left).bright_black(),
        title.bright_green(),
        THIN_RULE.repeat(right).bright_black()
    )
}

pub fn header(msg: &str, q_level: u8) {
    if q_level == 0 {
        print(&header_line(msg));
    }
}

pub fn fat_separator() {
    print(&FAT_RULE.repeat(TOTAL_WIDTH).color(colors::SEPARATOR).to_string());
}

pub fn end_of_program() {
    fat_separator();
}

/// Sets the key column width used by [`aligned_line`] to fit the longest of `keys`.
pub fn align_keys<'a>(keys: impl IntoIterator<Item = &'a str>) {
    let width: usize = keys.into_iter().map(str::len).max().unwrap_or(0);
    GLOBAL_KEY_WIDTH.set(width);
}

/// Dot leader that pads `key` to `width` plus one column before the colon.
fn leader(key: &str, width: usize) -> String {
    ".".repeat((width + 1).saturating_sub(key.len()))
}

pub fn aligned_line<V>(key: &str, value: V)
where
    V: Display + WithDefaultColor,
{
    let dots: String = leader(key, GLOBAL_KEY_WIDTH.get());
    print_status(format!(
        "{}{}{} {}",
        key.color(colors::PRIMARY),
        dots.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR),
        value.with_default(colors::TEXT_DEFAULT)
    ));
}

pub fn print_status<T: AsRef<str>>(msg: T) {
    print(&format!(
        "{} {}",
        ">".color(colors::SEPARATOR),
        msg.as_ref().color(colors::TEXT_DEFAULT)
    ));
}

/// `[idx] title`, the head line of one host in the overview.
pub fn tree_head(idx: usize, title: &str) {
    let index: String = format!("[{}]", idx.to_string().color(colors::ACCENT));
    print(&format!(
        "{} {}",
        index.color(colors::SEPARATOR),
        title.color(colors::PRIMARY)
    ));
}

pub fn as_tree_one_level(details: Vec<(String, ColoredString)>) {
    let width: usize = details.iter().map(|(key, _)| key.len()).max().unwrap_or(0) + 1;
    let last: usize = details.len().saturating_sub(1);

    for (i, (key, value)) in details.iter().enumerate() {
        let branch: &str = if i == last { "└─" } else { "├─" };
        print(&format!(
            " {} {}{}{} {}",
            branch.bright_black(),
            key.color(colors::TEXT_DEFAULT),
            leader(key, width).color(colors::SEPARATOR),
            ":".color(colors::SEPARATOR),
            value
        ));
    }
}

pub fn centerln(msg: &str) {
    let space: String =
        " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{space}{msg}{space}"));
}

const NO_RESULTS: &str = r#"
          _   _  ___    _   _  ___  ____ _____ ____
         | \ | |/ _ \  | | | |/ _ \/ ___|_   _/ ___|
         |  \| | | | | | |_| | | | \___ \ | | \___ \
         | |\  | |_| | |  _  | |_| |___) || |  ___) |
         |_| \_|\___/  |_| |_|\___/|____/ |_| |____/
"#;

pub fn no_results() {
    print(&NO_RESULTS.red().bold().to_string());
}
