//! Result rendering for table and JSON output.

use pricer_models::instruments::{ExerciseStyle, OptionType};
use serde::Serialize;

use crate::config::OutputFormat;
use crate::Result;

/// A single model price
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceOutput {
    /// Model identifier
    pub model: &'static str,
    /// Call or put
    pub option_type: OptionType,
    /// Exercise style assumed by the model
    pub exercise: ExerciseStyle,
    /// Lattice step count, absent for closed-form prices
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<usize>,
    /// Option value
    pub price: f64,
}

impl PriceOutput {
    /// Table rows
    pub fn rows(&self) -> Vec<(String, String)> {
        let mut rows = vec![
            ("Model".to_string(), self.model.to_string()),
            ("Option".to_string(), self.option_type.to_string()),
            ("Exercise".to_string(), self.exercise.to_string()),
        ];
        if let Some(steps) = self.steps {
            rows.push(("Steps".to_string(), steps.to_string()));
        }
        rows.push(("Price".to_string(), format_price(self.price)));
        rows
    }
}

/// Prints `value` as JSON or as a two-column table built from `rows`
pub fn emit<T: Serialize>(
    format: OutputFormat,
    value: &T,
    rows: &[(String, String)],
) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Table => print!("{}", render_table(rows)),
    }
    Ok(())
}

/// Box-drawn two-column table
pub fn render_table(rows: &[(String, String)]) -> String {
    let key_width = rows.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0);
    let value_width = rows.iter().map(|(_, v)| v.chars().count()).max().unwrap_or(0);
    let bar = |left: &str, mid: &str, right: &str| {
        format!(
            "{}{}{}{}{}\n",
            left,
            "─".repeat(key_width + 2),
            mid,
            "─".repeat(value_width + 2),
            right
        )
    };

    let mut out = bar("┌", "┬", "┐");
    for (key, value) in rows {
        out.push_str(&format!(
            "│ {:<kw$} │ {:>vw$} │\n",
            key,
            value,
            kw = key_width,
            vw = value_width
        ));
    }
    out.push_str(&bar("└", "┴", "┘"));
    out
}

/// Price to 4 decimals
pub fn format_price(value: f64) -> String {
    format!("{:.4}", value)
}

/// Fraction as a percentage with 2 decimals
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}
