use colored::*;
use tracing::info;

use crate::terminal::colors;
use crate::terminal::logging::PRINT_TARGET;

pub const TOTAL_WIDTH: usize = 64;
const TREE_KEY_WIDTH: usize = 8;

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, "{msg}");
}

pub fn banner(no_banner: bool, q_level: u8) {
    if no_banner || q_level > 0 {
        return;
    }

    let text_content: String = format!("⟦ MACCHANGER v{} ⟧", env!("CARGO_PKG_VERSION"));
    let text_width: usize = text_content.chars().count();
    let text: ColoredString = text_content.bright_green().bold();
    let dash_count: usize = TOTAL_WIDTH.saturating_sub(text_width);
    let left: ColoredString = "═".repeat(dash_count / 2).bright_black();
    let right: ColoredString = "═".repeat(dash_count - dash_count / 2).bright_black();

    print(&format!("{}{}{}", left, text, right));
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    print(&format!("{}", line));
}

pub fn tree_head(name: &str) {
    let prefix: ColoredString = ">".color(colors::SEPARATOR);
    print(&format!("{} {}", prefix, name.color(colors::PRIMARY)));
}

pub fn as_tree_one_level(key_value_pair: Vec<(String, ColoredString)>) {
    for (i, (key, value)) in key_value_pair.iter().enumerate() {
        let last: bool = i + 1 == key_value_pair.len();
        let branch: ColoredString = if !last {
            "├─".bright_black()
        } else {
            "└─".bright_black()
        };
        let dots: String = ".".repeat(TREE_KEY_WIDTH.saturating_sub(key.len()));
        let output: String = format!(
            " {} {}{}{} {}",
            branch,
            key.color(colors::TEXT_DEFAULT),
            dots.color(colors::SEPARATOR),
            ":".color(colors::SEPARATOR),
            value
        );
        print(&output);
    }
}

pub fn end_of_program(q_level: u8) {
    if q_level > 0 {
        return;
    }
    print(&format!(
        "{}",
        "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR)
    ));
}
