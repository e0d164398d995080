use tracing::trace;

use crate::core::{AxisRange, GridSpacing, PlotArea, Point, axis_steps, format_axis_value};
use crate::error::ChartResult;
use crate::render::{PathPrimitive, TextPrimitive, class_list};

use super::LayoutPolicy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    #[must_use]
    pub fn name(self) -> char {
        match self {
            Self::X => 'x',
            Self::Y => 'y',
        }
    }
}

/// Gridlines, ticks and numeric labels of one axis, each in step order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AxisPrimitives {
    pub grid_minor: Vec<PathPrimitive>,
    pub grid_major: Vec<PathPrimitive>,
    pub ticks: Vec<PathPrimitive>,
    pub labels: Vec<TextPrimitive>,
}

/// Builds grid/tick/label geometry for one axis.
///
/// Gridlines span the whole plot area; ticks sit outside the plot edge (below
/// for x, left for y) and labels just past the tick end.
pub fn build_axis_primitives(
    axis: Axis,
    range: AxisRange,
    spacing: GridSpacing,
    area: PlotArea,
    policy: &LayoutPolicy,
) -> ChartResult<AxisPrimitives> {
    let steps = axis_steps(range, spacing, axis.name())?;
    trace!(axis = %axis.name(), steps = steps.len(), "axis steps");

    let mut out = AxisPrimitives::default();
    let gap = policy.tick_gap_px;
    for step in steps {
        let length = policy.tick_length(step.is_major);
        let grid_class = if step.is_major { "grid-major" } else { "grid-minor" };

        let (near, far) = match axis {
            Axis::X => (Point::new(step.position, 0.0), Point::new(step.position, 1.0)),
            Axis::Y => (Point::new(0.0, step.position), Point::new(1.0, step.position)),
        };
        let near = area.to_device_rounded(near);
        let far = area.to_device_rounded(far);

        let (grid_from, grid_to, tick_from, tick_to, label_at, label_class) = match axis {
            Axis::X => (
                near.nudge(0.5, 0.0),
                far.nudge(0.5, -1.0),
                near.nudge(0.5, gap),
                near.nudge(0.5, gap + length),
                near.nudge(0.0, policy.tick_label_gap_px + length),
                "label-x",
            ),
            Axis::Y => (
                near.nudge(0.0, -0.5),
                far.nudge(1.0, -0.5),
                near.nudge(-gap, -0.5),
                near.nudge(-gap - length, -0.5),
                near.nudge(-policy.tick_label_gap_px - length, 0.0),
                "label-y",
            ),
        };

        let gridline = PathPrimitive::segment(grid_from, grid_to, class_list(&["grid", grid_class]));
        if step.is_major {
            out.grid_major.push(gridline);
        } else {
            out.grid_minor.push(gridline);
        }
        out.ticks
            .push(PathPrimitive::segment(tick_from, tick_to, class_list(&["tick"])));

        if step.is_major {
            out.labels.push(TextPrimitive::new(
                format_axis_value(step.value),
                label_at,
                class_list(&["label-numeric", label_class]),
            ));
        }
    }

    Ok(out)
}
