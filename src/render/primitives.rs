use smallvec::SmallVec;

use crate::core::Point;
use crate::error::{ChartError, ChartResult};

/// Style class tokens attached to a primitive (rendered as the `class` attribute).
pub type ClassList = SmallVec<[String; 3]>;

#[must_use]
pub fn class_list(classes: &[&str]) -> ClassList {
    classes.iter().map(|&class| class.to_owned()).collect()
}

/// Open polyline in device space.
#[derive(Debug, Clone, PartialEq)]
pub struct PathPrimitive {
    points: Vec<Point>,
    classes: ClassList,
}

impl PathPrimitive {
    pub fn new(points: Vec<Point>, classes: ClassList) -> ChartResult<Self> {
        if points.is_empty() {
            return Err(ChartError::InvalidData(
                "path primitive needs at least one point".to_owned(),
            ));
        }
        Ok(Self { points, classes })
    }

    /// Two-point path; used for gridlines, ticks and legend swatches.
    #[must_use]
    pub fn segment(from: Point, to: Point, classes: ClassList) -> Self {
        Self {
            points: vec![from, to],
            classes,
        }
    }

    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// SVG path data: `M x,y L x,y ...`.
    #[must_use]
    pub fn path_data(&self) -> String {
        let mut data = String::with_capacity(self.points.len() * 16);
        for (i, point) in self.points.iter().enumerate() {
            if i > 0 {
                data.push(' ');
            }
            let command = if i == 0 { 'M' } else { 'L' };
            data.push_str(&format!("{command} {},{}", point.x, point.y));
        }
        data
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.points.iter().any(|point| !point.is_finite()) {
            return Err(ChartError::InvalidData(
                "path coordinates must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Text label anchored at a device-space point.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub anchor: Point,
    pub classes: ClassList,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(text: impl Into<String>, anchor: Point, classes: ClassList) -> Self {
        Self {
            text: text.into(),
            anchor,
            classes,
        }
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.anchor.is_finite() {
            return Err(ChartError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}
