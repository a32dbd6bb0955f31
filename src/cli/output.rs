//! Output formatting module
//!
//! This module handles formatting automata for different output formats.

use crate::automaton::{Automaton, ClassificationReport, EPSILON};
use crate::Result;
use serde_json::json;

/// Output an automaton and its classification as JSON
pub fn output_json(
    w: &mut impl std::io::Write,
    fa: &Automaton,
    report: &ClassificationReport,
) -> Result<()> {
    let stats = fa.stats();
    let output = json!({
        "summary": {
            "total_states": stats.total_states,
            "total_symbols": stats.total_symbols,
            "total_transitions": stats.total_transitions,
            "start_states": stats.start_states,
            "accept_states": stats.accept_states,
            "classification": report.to_string(),
        },
        "automaton": fa,
    });

    serde_json::to_writer_pretty(&mut *w, &output)?;
    writeln!(w)?; // Add trailing newline
    Ok(())
}

/// Output an automaton as a states-by-symbols table
///
/// One row per state (lexicographic), one column per non-epsilon symbol
/// (lexicographic), plus a trailing epsilon column when the automaton has
/// epsilon transitions. State labels carry `-->` (start), `<--` (accept) or
/// `<-->` (both) markers; undefined cells show a dash.
pub fn output_table(
    w: &mut impl std::io::Write,
    fa: &Automaton,
    report: &ClassificationReport,
) -> Result<()> {
    if fa.states.is_empty() {
        writeln!(w, "(empty automaton)")?;
        writeln!(w)?;
        writeln!(w, "Classification: {}", report)?;
        return Ok(());
    }

    let mut columns: Vec<String> = fa.input_symbols().map(str::to_string).collect();
    if fa.has_epsilon_transitions() {
        columns.push(EPSILON.to_string());
    }

    let mut header = vec!["State".to_string()];
    header.extend(columns.iter().cloned());

    let mut rows: Vec<Vec<String>> = Vec::new();
    for state in &fa.states {
        let marker = match (
            fa.start_states.contains(state),
            fa.accept_states.contains(state),
        ) {
            (true, true) => "<--> ",
            (true, false) => "--> ",
            (false, true) => "<-- ",
            (false, false) => "",
        };

        let mut row = vec![format!("{}{}", marker, state)];
        for symbol in &columns {
            let cell = match fa.destinations(state, symbol) {
                Some(dests) => dests.iter().cloned().collect::<Vec<_>>().join(" "),
                None => "-".to_string(),
            };
            row.push(cell);
        }
        rows.push(row);
    }

    let widths: Vec<usize> = header
        .iter()
        .enumerate()
        .map(|(i, h)| {
            rows.iter()
                .map(|row| row[i].len())
                .chain([h.len()])
                .max()
                .unwrap_or(0)
        })
        .collect();

    write_row(w, &header, &widths)?;
    let rule: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
    writeln!(w, "{}", rule.join("-+-"))?;
    for row in &rows {
        write_row(w, row, &widths)?;
    }

    writeln!(w)?;
    writeln!(w, "Classification: {}", report)?;
    Ok(())
}

fn write_row(w: &mut impl std::io::Write, cells: &[String], widths: &[usize]) -> Result<()> {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join(" | ");
    writeln!(w, "{}", line.trim_end())?;
    Ok(())
}
