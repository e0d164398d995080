use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::core::AxisRange;
use crate::error::{ChartError, ChartResult};

/// Added before flooring the cell count so spans that should divide evenly
/// (e.g. `1.0 / 0.1 * 2`) do not lose their last step to float truncation.
pub const GRID_CELL_EPSILON: f64 = 1e-5;

/// Decimal places kept in numeric axis labels.
pub const AXIS_LABEL_DECIMALS: u32 = 3;

/// Label magnitude at which plain decimal notation gives way to `1e+16` style.
pub const AXIS_LABEL_EXPONENT_THRESHOLD: f64 = 1e16;

/// Major unit and minor subdivisions for one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSpacing {
    pub major: f64,
    pub minor_subdivisions: u32,
}

impl GridSpacing {
    #[must_use]
    pub const fn new(major: f64, minor_subdivisions: u32) -> Self {
        Self {
            major,
            minor_subdivisions,
        }
    }

    pub fn validate(self, axis: char) -> ChartResult<Self> {
        if !self.major.is_finite() || self.major <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "{axis}-axis major grid unit must be finite and > 0"
            )));
        }
        if self.minor_subdivisions == 0 {
            return Err(ChartError::InvalidData(format!(
                "{axis}-axis minor subdivisions must be > 0"
            )));
        }
        Ok(self)
    }

    /// Logical distance between two adjacent steps.
    #[must_use]
    pub fn minor_unit(self) -> f64 {
        self.major / f64::from(self.minor_subdivisions)
    }
}

impl Default for GridSpacing {
    fn default() -> Self {
        Self::new(0.1, 2)
    }
}

/// One grid step: a gridline, a tick and, on major steps, a label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisStep {
    pub index: usize,
    /// Position along the axis in normalized `0..1` space.
    pub position: f64,
    /// Value printed on the label, measured from the range start.
    pub value: f64,
    pub is_major: bool,
}

/// `floor(span / major * minor + GRID_CELL_EPSILON)`.
#[must_use]
pub fn grid_cell_count(range: AxisRange, spacing: GridSpacing) -> usize {
    let cells = range.span() / spacing.major * f64::from(spacing.minor_subdivisions)
        + GRID_CELL_EPSILON;
    cells.floor().max(0.0) as usize
}

/// Enumerates steps `0..=cell_count` along one axis.
pub fn axis_steps(range: AxisRange, spacing: GridSpacing, axis: char) -> ChartResult<Vec<AxisStep>> {
    let range = range.validate(axis)?;
    let spacing = spacing.validate(axis)?;

    let cells = grid_cell_count(range, spacing);
    let minor = f64::from(spacing.minor_subdivisions);
    let span = range.span();

    Ok((0..=cells)
        .map(|index| {
            let i = index as f64;
            AxisStep {
                index,
                position: i * spacing.major / (minor * span),
                value: i * spacing.major / minor,
                is_major: index % spacing.minor_subdivisions as usize == 0,
            }
        })
        .collect())
}

/// Formats an axis value rounded to [`AXIS_LABEL_DECIMALS`] places.
///
/// Integral values keep one fractional digit (`1.0`, not `1`). Magnitudes from
/// [`AXIS_LABEL_EXPONENT_THRESHOLD`] upwards use exponent notation (`1e+29`).
#[must_use]
pub fn format_axis_value(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_owned();
    }
    if value.abs() >= AXIS_LABEL_EXPONENT_THRESHOLD {
        return format_exponent(value);
    }

    // Exact binary expansion: ties are decided on the stored value, not on
    // its shortest decimal spelling.
    match Decimal::from_f64_retain(value) {
        Some(decimal) => format_decimal(
            decimal.round_dp_with_strategy(AXIS_LABEL_DECIMALS, RoundingStrategy::MidpointNearestEven),
        ),
        None => format_exponent(value),
    }
}

fn format_decimal(decimal: Decimal) -> String {
    let mut text = decimal.normalize().to_string();
    if text == "-0" {
        text = "0".to_owned();
    }
    if !text.contains('.') {
        text.push_str(".0");
    }
    text
}

fn format_exponent(value: f64) -> String {
    let text = format!("{value:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => text,
    }
}

#[cfg(test)]
mod tests {
    use super::format_axis_value;

    #[test]
    fn integral_values_keep_one_fraction_digit() {
        assert_eq!(format_axis_value(0.0), "0.0");
        assert_eq!(format_axis_value(2.0), "2.0");
    }

    #[test]
    fn float_noise_is_rounded_away() {
        assert_eq!(format_axis_value(7.0 * 0.1 / 2.0), "0.35");
        assert_eq!(format_axis_value(0.1 + 0.2), "0.3");
    }

    #[test]
    fn long_fractions_are_cut_to_three_places() {
        assert_eq!(format_axis_value(1.0 / 3.0), "0.333");
    }

    #[test]
    fn midpoints_round_on_the_stored_binary_value() {
        // 0.0125 is stored slightly above the midpoint, 0.0375 slightly below.
        assert_eq!(format_axis_value(0.0125), "0.013");
        assert_eq!(format_axis_value(0.0375), "0.037");
        // 0.0625 is an exact binary tie and goes to even.
        assert_eq!(format_axis_value(0.0625), "0.062");
    }

    #[test]
    fn huge_values_use_exponent_notation() {
        assert_eq!(format_axis_value(1e29), "1e+29");
        assert_eq!(format_axis_value(2.5e30), "2.5e+30");
        assert_eq!(format_axis_value(1e16), "1e+16");
        assert_eq!(format_axis_value(123_456.0), "123456.0");
    }

    #[test]
    fn non_finite_values_are_spelled_out() {
        assert_eq!(format_axis_value(f64::INFINITY), "inf");
        assert_eq!(format_axis_value(f64::NAN), "nan");
    }
}
