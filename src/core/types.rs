use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Device canvas size in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplaySize {
    pub width: f64,
    pub height: f64,
}

impl DisplaySize {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Builds a display size from a loosely-typed component list.
    ///
    /// Exactly two components (`[width, height]`) are accepted.
    pub fn from_components(components: &[f64]) -> ChartResult<Self> {
        match *components {
            [width, height] => {
                let size = Self::new(width, height);
                size.validate()?;
                Ok(size)
            }
            _ => Err(ChartError::InvalidDisplayComponents {
                count: components.len(),
            }),
        }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    pub fn validate(self) -> ChartResult<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(ChartError::InvalidViewport {
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// Closed `(start, end)` interval on one logical axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub start: f64,
    pub end: f64,
}

impl AxisRange {
    #[must_use]
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.end - self.start
    }

    /// Maps `value` into `0..1` over this range (values outside map outside).
    #[must_use]
    pub fn normalize(self, value: f64) -> f64 {
        (value - self.start) / self.span()
    }

    pub fn validate(self, axis: char) -> ChartResult<Self> {
        if !self.start.is_finite() || !self.end.is_finite() || self.start >= self.end {
            return Err(ChartError::InvalidRange {
                axis,
                start: self.start,
                end: self.end,
            });
        }
        Ok(self)
    }
}

impl Default for AxisRange {
    fn default() -> Self {
        Self::new(0.0, 1.0)
    }
}
