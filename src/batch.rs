// 📄 Batch conversion - CSV in, CSV out
// One amount per row, converted and spelled in both eras

use crate::currency::{Conversion, Direction};
use crate::numerals::{format_amount, parse_amount};
use crate::words::spell_number_with_currency_label;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchRow {
    /// Amount as typed (either digit script, grouping allowed)
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvertedRow {
    pub amount: String,
    pub converted: String,
    pub amount_words: String,
    pub converted_words: String,
}

pub fn load_amounts(csv_path: &Path) -> Result<Vec<BatchRow>> {
    let mut rdr = csv::Reader::from_path(csv_path)
        .with_context(|| format!("Failed to open CSV file: {:?}", csv_path))?;

    let mut rows = Vec::new();
    for result in rdr.deserialize() {
        let row: BatchRow = result.context("Failed to deserialize amount row")?;
        rows.push(row);
    }

    Ok(rows)
}

/// Unparsable amounts convert as 0, the same guard the interactive
/// converter applies.
pub fn convert_rows(rows: &[BatchRow], direction: Direction) -> Vec<ConvertedRow> {
    rows.iter()
        .map(|row| {
            let conversion = Conversion::new(parse_amount(&row.amount), direction);

            ConvertedRow {
                amount: row.amount.clone(),
                converted: format_amount(conversion.output, false, conversion.display_fraction_digits()),
                amount_words: spell_number_with_currency_label(conversion.input, direction.source_era()),
                converted_words: spell_number_with_currency_label(conversion.output, direction.target_era()),
            }
        })
        .collect()
}

pub fn write_rows(csv_path: &Path, rows: &[ConvertedRow]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(csv_path)
        .with_context(|| format!("Failed to create CSV file: {:?}", csv_path))?;

    for row in rows {
        wtr.serialize(row).context("Failed to write converted row")?;
    }

    wtr.flush().context("Failed to flush CSV output")?;
    Ok(())
}

/// Convert every amount in `input` and write the result to `output`.
/// Returns the number of rows written.
pub fn convert_file(input: &Path, output: &Path, direction: Direction) -> Result<usize> {
    let rows = load_amounts(input)?;
    tracing::debug!(rows = rows.len(), %direction, "converting {:?}", input);

    let converted = convert_rows(&rows, direction);
    write_rows(output, &converted)?;

    tracing::debug!(rows = converted.len(), "wrote {:?}", output);
    Ok(converted.len())
}

// ============================================================================
// TESTS
// ============================================================================
