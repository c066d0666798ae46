use std::fmt::Display;

use colored::*;

pub const TOTAL_WIDTH: usize = 64;

pub fn header(msg: &str) {
    let formatted = format!("⟦ {} ⟧", msg);
    let msg_len = formatted.chars().count();

    let dash_count = TOTAL_WIDTH.saturating_sub(msg_len);
    let left = dash_count / 2;
    let right = dash_count - left;

    println!(
        "{}{}{}",
        "─".repeat(left).bright_black(),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right).bright_black()
    );
}

pub fn aligned_line<V: Display>(key: &str, value: V) {
    // Pad before coloring; ANSI escapes would throw the width off otherwise.
    let key = format!("{:<16}", format!("{key}:"));
    println!("  {} {}", key.bright_black(), value);
}

pub fn tree_head(idx: usize, title: &str) {
    println!("{} {}", format!("[{idx}]").bright_black(), title.bold());
}

pub fn as_tree_one_level(details: Vec<(String, ColoredString)>) {
    let len = details.len();
    for (i, (key, value)) in details.into_iter().enumerate() {
        let branch = if i + 1 == len { "└─" } else { "├─" };
        println!(
            "  {} {} {}",
            branch.bright_black(),
            format!("{key}:").bright_black(),
            value
        );
    }
}
