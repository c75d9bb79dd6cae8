//! Summary CSV rows
//!
//! One row per (design, palette). Rows are ragged: after the six fixed columns
//! come two columns (thread name, thread code) per needle in the design's
//! needle sequence.

use crate::engine::{ThreadEntry, UNITS_PER_MM};

/// Header line written at the top of every summary file
pub const CSV_HEADER: &str = "Design, Width, Height, Stitches, NumColors, Palette, Colors";

/// Number of columns before the thread columns start
pub const FIXED_COLUMNS: usize = 6;

/// Source of the Height column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeightColumn {
    /// Repeat the width value, as existing summary files do
    #[default]
    RepeatWidth,
    /// Use the design's real height
    Actual,
}

/// One summary row
#[derive(Debug, Clone, PartialEq)]
pub struct DesignRow {
    /// File name including extension
    pub design: String,
    /// Width in engine units
    pub width: i32,
    /// Height in engine units
    pub height: i32,
    pub stitches: u32,
    pub num_colors: u32,
    pub palette: String,
    /// Thread for each needle in the needle sequence, in order
    pub threads: Vec<ThreadEntry>,
}

impl DesignRow {
    /// Row fields in column order
    pub fn fields(&self, height_column: HeightColumn) -> Vec<String> {
        let height = match height_column {
            HeightColumn::RepeatWidth => self.width,
            HeightColumn::Actual => self.height,
        };

        let mut fields = Vec::with_capacity(FIXED_COLUMNS + 2 * self.threads.len());
        fields.push(sanitize(&self.design));
        fields.push(format_millimetres(self.width));
        fields.push(format_millimetres(height));
        fields.push(self.stitches.to_string());
        fields.push(self.num_colors.to_string());
        fields.push(sanitize(&self.palette));
        for thread in &self.threads {
            fields.push(sanitize(&thread.name));
            fields.push(sanitize(&thread.code));
        }
        fields
    }

    /// The row as one comma-separated line, without terminator
    pub fn to_csv_line(&self, height_column: HeightColumn) -> String {
        self.fields(height_column).join(",")
    }
}

/// Engine units as millimetres with at most two decimals.
///
/// Trailing zeros are dropped, as is the integer zero: 127 units is `.5`,
/// 2540 units is `10`, and zero is empty.
pub fn format_millimetres(units: i32) -> String {
    let mm = f64::from(units) / UNITS_PER_MM;
    let rounded = (mm * 100.0).round() / 100.0;
    if rounded == 0.0 {
        return String::new();
    }

    let text = format!("{rounded:.2}");
    let text = text.trim_end_matches('0').trim_end_matches('.');

    if let Some(fraction) = text.strip_prefix("0.") {
        format!(".{fraction}")
    } else if let Some(fraction) = text.strip_prefix("-0.") {
        format!("-.{fraction}")
    } else {
        text.to_string()
    }
}

// Commas would shift every later column.
fn sanitize(value: &str) -> String {
    value.replace(',', "-")
}
