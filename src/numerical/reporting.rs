//! Rendering of iteration traces and outcomes into human-readable text. The
//! column set follows the record variant of the trace, so each method prints
//! the quantities it actually computed.

use crate::numerical::zero_types::{IterationRecord, ZeroOutcome};
use tabled::{builder::Builder, settings::Style};

fn headers(record: &IterationRecord) -> Vec<&'static str> {
    match record {
        IterationRecord::Bracketing { .. } => vec!["iter", "a", "b", "c", "f(c)", "error"],
        IterationRecord::Secant { .. } => vec!["iter", "x_prev", "x_curr", "x_new", "error"],
        IterationRecord::Newton { .. } => {
            vec!["iter", "x_curr", "f(x)", "f'(x)", "x_next", "error"]
        }
        IterationRecord::FixedPoint { .. } => vec!["iter", "x_curr", "g(x)", "error"],
        IterationRecord::ModifiedSecant { .. } => vec!["iter", "x_curr", "x_next", "error"],
    }
}

fn row(record: &IterationRecord) -> Vec<String> {
    match record {
        IterationRecord::Bracketing {
            iter,
            a,
            b,
            root,
            f_root,
            error,
        } => vec![
            iter.to_string(),
            format!("{:.4}", a),
            format!("{:.4}", b),
            format!("{:.6}", root),
            format!("{:.4}", f_root),
            format!("{:.6e}", error),
        ],
        IterationRecord::Secant {
            iter,
            x_prev,
            x_curr,
            root,
            error,
        } => vec![
            iter.to_string(),
            format!("{:.4}", x_prev),
            format!("{:.4}", x_curr),
            format!("{:.6}", root),
            format!("{:.6e}", error),
        ],
        IterationRecord::Newton {
            iter,
            x_curr,
            f_x,
            df_x,
            root,
            error,
        } => vec![
            iter.to_string(),
            format!("{:.4}", x_curr),
            format!("{:.4}", f_x),
            format!("{:.4}", df_x),
            format!("{:.6}", root),
            format!("{:.6e}", error),
        ],
        IterationRecord::FixedPoint {
            iter,
            x_curr,
            g_x,
            error,
        } => vec![
            iter.to_string(),
            format!("{:.4}", x_curr),
            format!("{:.6}", g_x),
            format!("{:.6e}", error),
        ],
        IterationRecord::ModifiedSecant {
            iter,
            x_curr,
            root,
            error,
        } => vec![
            iter.to_string(),
            format!("{:.4}", x_curr),
            format!("{:.6}", root),
            format!("{:.6e}", error),
        ],
    }
}

/// Renders a trace as a table, columns taken from the first record.
pub fn format_trace(trace: &[IterationRecord]) -> String {
    let Some(first) = trace.first() else {
        return "no iterations recorded".to_string();
    };
    let mut builder = Builder::default();
    builder.push_record(headers(first));
    for record in trace {
        builder.push_record(row(record));
    }
    let mut table = builder.build();
    table.with(Style::modern_rounded());
    table.to_string()
}

/// Summary block printed after a successful run.
pub fn format_outcome(outcome: &ZeroOutcome) -> String {
    let final_error = outcome
        .trace
        .last()
        .map(|record| format!("{:.6e}", record.error()))
        .unwrap_or_else(|| "n/a".to_string());
    format!(
        "root found: {:.6}\niterations: {}\nfinal error: {}",
        outcome.root, outcome.iterations_used, final_error
    )
}
