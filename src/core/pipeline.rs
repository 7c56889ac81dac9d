//! Conversion between the typed pipeline string and the stored step list.
//!
//! Splitting is deliberately naive: stages are separated by the literal
//! `" | "`, so a `|` without surrounding spaces stays inside an argument.
//! Nothing is quoted, unquoted or escaped.

use super::storage::{Recipe, Step};
use crate::error::{GcmdError, Result};

/// Separator between pipeline stages.
pub const SEPARATOR: &str = " | ";

/// Splits a pipeline string into steps.
pub fn parse(pipeline: &str) -> Result<Vec<Step>> {
    let fragments: Vec<&str> = pipeline.split(SEPARATOR).map(str::trim).collect();

    if fragments.len() == 1 && fragments[0].is_empty() {
        return Err(GcmdError::validation("Command cannot be empty"));
    }

    let steps = fragments
        .iter()
        .enumerate()
        .map(|(i, fragment)| {
            if fragment.is_empty() {
                return Err(GcmdError::validation(format!(
                    "Pipeline stage {} is empty",
                    i + 1
                )));
            }
            Ok(split_step(fragment))
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(stages = steps.len(), "parsed pipeline");
    Ok(steps)
}

/// Builds the persisted form of a parsed pipeline.
pub fn pack(steps: Vec<Step>, stdin: bool) -> Recipe {
    Recipe { steps, stdin }
}

/// Renders a recipe back into the string handed to `bash -c`.
///
/// Every step contributes `name + " " + args`, so a step without
/// arguments keeps a trailing space.
pub fn format(recipe: &Recipe) -> String {
    recipe
        .steps
        .iter()
        .map(|s| format!("{} {}", s.name, s.args))
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

fn split_step(fragment: &str) -> Step {
    match fragment.find(char::is_whitespace) {
        Some(idx) => Step::new(&fragment[..idx], fragment[idx..].trim_start()),
        None => Step::new(fragment, ""),
    }
}
