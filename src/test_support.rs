//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::option::{Choice, GroupOption};

/// `n` plain options titled "0", "1", ...
pub fn plain_options(n: usize) -> Vec<GroupOption> {
    (0..n).map(|i| GroupOption::plain(i.to_string())).collect()
}

/// A plain option followed by two multiple-choice options.
///
/// ```text
/// 0  "0"  plain
/// 1  "1"  1.0 .. 1.4
/// 2  "2"  2.0 .. 2.2
/// ```
pub fn survey_options() -> Vec<GroupOption> {
    vec![
        GroupOption::plain("0"),
        GroupOption::multiple_choice("1", choices("1", 5)),
        GroupOption::multiple_choice("2", choices("2", 3)),
    ]
}

fn choices(prefix: &str, n: usize) -> Vec<Choice> {
    (0..n).map(|i| Choice::new(format!("{prefix}.{i}"))).collect()
}
