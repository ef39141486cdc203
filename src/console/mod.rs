//! # Console Adapter
//!
//! Drives an option group from line-oriented input, standing in for the view
//! layer (which forwards taps) and the screen controller (which reads the
//! selection back after each one).
//!
//! ```text
//! stdin ──▶ parse_command() ──▶ validate ──▶ ObservableOptionGroup ──▶ JSON line ──▶ stdout
//! ```
//!
//! Input is untrusted, so every tap is checked against the option list before
//! it reaches the model. A bad line produces an `{"error": ...}` report and
//! the session carries on.

pub mod command;

use log::{debug, info, warn};
use serde_json::{Value, json};
use std::io::{self, BufRead, Write};

use crate::console::command::{Command, parse_command};
use crate::core::action::{self, Tap};
use crate::core::model::OptionGroupModel;
use crate::core::observable::ObservableOptionGroup;
use crate::core::selection::Selection;

#[derive(Debug, Clone, Default)]
pub struct ConsoleOptions {
    pub pretty: bool,
    /// Group title, echoed in the `options` report.
    pub title: Option<String>,
}

/// Runs a session until `quit` or end of input, returning the final selection.
///
/// Only a failing reader or writer ends the session early. Lines that are not
/// UTF-8, do not parse, or do not fit the option list are reported and skipped.
pub fn run<R: BufRead, W: Write>(
    model: OptionGroupModel,
    mut reader: R,
    mut writer: W,
    options: ConsoleOptions,
) -> io::Result<Selection> {
    let mut group = ObservableOptionGroup::new(model);
    let mut changes = group.subscribe();
    let mut buf = Vec::new();
    let mut number = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        number += 1;

        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line,
            Err(e) => {
                warn!("Line {}: not valid UTF-8: {}", number, e);
                let report = error_report(format!("line is not valid UTF-8: {e}"));
                write_report(&mut writer, &report, options.pretty)?;
                continue;
            }
        };

        let report = match parse_command(line) {
            Ok(None) => continue,
            Ok(Some(Command::Quit)) => break,
            Ok(Some(Command::Show)) => selection_report(&group, false),
            Ok(Some(Command::Options)) => json!({
                "title": options.title,
                "options": group.model().options(),
            }),
            Ok(Some(Command::Tap(tap))) => match apply_tap(&mut group, tap) {
                Ok(()) => {
                    let changed = changes.has_changed().unwrap_or(false);
                    changes.borrow_and_update();
                    selection_report(&group, changed)
                }
                Err(e) => {
                    warn!("Line {}: rejected {:?}: {}", number, tap, e);
                    error_report(e)
                }
            },
            Err(e) => {
                warn!("Line {}: {}", number, e);
                error_report(e)
            }
        };
        write_report(&mut writer, &report, options.pretty)?;
    }

    let selection = group.into_model().into_selection();
    info!("Session finished with selection {}", selection);
    write_report(
        &mut writer,
        &json!({ "final": true, "selection": selection }),
        options.pretty,
    )?;
    Ok(selection)
}

fn apply_tap(group: &mut ObservableOptionGroup, tap: Tap) -> Result<(), crate::core::GroupError> {
    action::validate(group.model(), tap)?;
    group.apply(tap);
    debug!("Tap {:?} applied", tap);
    Ok(())
}

fn selection_report(group: &ObservableOptionGroup, changed: bool) -> Value {
    json!({
        "selection": group.current_selection(),
        "submittable": group.model().has_selection(),
        "changed": changed,
    })
}

fn error_report(error: impl std::fmt::Display) -> Value {
    json!({ "error": error.to_string() })
}

fn write_report<W: Write>(writer: &mut W, report: &Value, pretty: bool) -> io::Result<()> {
    let text = if pretty {
        serde_json::to_string_pretty(report)
    } else {
        serde_json::to_string(report)
    }
    .map_err(io::Error::other)?;
    writeln!(writer, "{text}")?;
    writer.flush()
}
