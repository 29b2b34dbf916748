//! Command implementations and terminal rendering.

pub mod convert;
pub mod markets;
pub mod rate;
pub mod setup;
pub mod ui;

use crate::core::{RateError, RateOrigin};

/// Renders provenance as a one-line label, e.g. "Oficial · 2025-08-06...".
pub(crate) fn provenance_line(origin: &RateOrigin) -> String {
    match origin {
        RateOrigin::Live {
            source_name,
            as_of,
        } => format!("{source_name} · {}", as_of.as_deref().unwrap_or("n/a")),
        RateOrigin::Manual { as_of } => format!("manual · {as_of}"),
    }
}

/// Prints the failure and a recovery hint to stderr.
pub(crate) fn report_error(error: &RateError) {
    eprintln!("{}", ui::style_text(&error.to_string(), ui::StyleType::Error));

    let hint = match error {
        RateError::InvalidAmount(_) => "Pass an ARS amount greater than zero.",
        RateError::Transport { .. } | RateError::InvalidQuote { .. } => {
            "Pass a manual rate with --rate to convert offline."
        }
    };
    eprintln!("{}", ui::style_text(hint, ui::StyleType::Subtle));
}
