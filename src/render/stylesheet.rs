use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Visual defaults baked into the generated stylesheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleTheme {
    pub background: String,
    pub grid_major_color: String,
    pub grid_minor_color: String,
    pub grid_stroke_width_px: f64,
    pub tick_color: String,
    pub tick_stroke_width_px: f64,
    pub text_color: String,
    pub font_family: String,
    pub numeric_label_font_px: f64,
    pub legend_label_font_px: f64,
    pub axis_label_font_px: f64,
    pub axis_label_font_weight: u16,
    pub title_font_px: f64,
    pub subtitle_font_px: f64,
    pub curve_stroke_width_px: f64,
}

impl Default for StyleTheme {
    fn default() -> Self {
        Self {
            background: "white".to_owned(),
            grid_major_color: "#eeeeeeff".to_owned(),
            grid_minor_color: "#f5f5f5ff".to_owned(),
            grid_stroke_width_px: 1.0,
            tick_color: "#333333ff".to_owned(),
            tick_stroke_width_px: 1.0,
            text_color: "#333333ff".to_owned(),
            font_family: "'SF Mono'".to_owned(),
            numeric_label_font_px: 12.0,
            legend_label_font_px: 12.0,
            axis_label_font_px: 14.0,
            axis_label_font_weight: 700,
            title_font_px: 20.0,
            subtitle_font_px: 12.0,
            curve_stroke_width_px: 2.0,
        }
    }
}

impl StyleTheme {
    /// Checks every value that is written into the stylesheet.
    pub fn validate(&self) -> ChartResult<()> {
        for (field, value) in [
            ("background", &self.background),
            ("grid_major_color", &self.grid_major_color),
            ("grid_minor_color", &self.grid_minor_color),
            ("tick_color", &self.tick_color),
            ("text_color", &self.text_color),
            ("font_family", &self.font_family),
        ] {
            validate_css_value(field, value)?;
        }

        for (field, value) in [
            ("grid_stroke_width_px", self.grid_stroke_width_px),
            ("tick_stroke_width_px", self.tick_stroke_width_px),
            ("numeric_label_font_px", self.numeric_label_font_px),
            ("legend_label_font_px", self.legend_label_font_px),
            ("axis_label_font_px", self.axis_label_font_px),
            ("title_font_px", self.title_font_px),
            ("subtitle_font_px", self.subtitle_font_px),
            ("curve_stroke_width_px", self.curve_stroke_width_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "{field} must be finite and > 0"
                )));
            }
        }

        if self.axis_label_font_weight == 0 {
            return Err(ChartError::InvalidData(
                "axis_label_font_weight must be > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// One `selector { property: value; ... }` block.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleRule {
    pub selector: String,
    pub declarations: Vec<(&'static str, String)>,
}

impl StyleRule {
    #[must_use]
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            declarations: Vec::new(),
        }
    }

    #[must_use]
    pub fn declare(mut self, property: &'static str, value: impl ToString) -> Self {
        self.declarations.push((property, value.to_string()));
        self
    }
}

/// Ordered list of style rules; later rules win on equal specificity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stylesheet {
    rules: Vec<StyleRule>,
}

impl Stylesheet {
    /// Default treatment for every class the density chart emits.
    #[must_use]
    pub fn density_chart(theme: &StyleTheme) -> Self {
        let px = |value: f64| format!("{value}px");
        let rules = vec![
            StyleRule::new("rect.background").declare("fill", &theme.background),
            StyleRule::new("path.grid")
                .declare("stroke-width", px(theme.grid_stroke_width_px))
                .declare("fill", "none"),
            StyleRule::new("path.grid-major").declare("stroke", &theme.grid_major_color),
            StyleRule::new("path.grid-minor").declare("stroke", &theme.grid_minor_color),
            StyleRule::new("path.tick")
                .declare("stroke-width", px(theme.tick_stroke_width_px))
                .declare("stroke", &theme.tick_color)
                .declare("fill", "none"),
            StyleRule::new("text")
                .declare("fill", &theme.text_color)
                .declare("font-family", &theme.font_family),
            StyleRule::new("text.label-numeric")
                .declare("font-size", px(theme.numeric_label_font_px)),
            StyleRule::new("text.label-x")
                .declare("text-anchor", "middle")
                .declare("dominant-baseline", "hanging"),
            StyleRule::new("text.label-y")
                .declare("text-anchor", "end")
                .declare("dominant-baseline", "middle"),
            StyleRule::new("text.label-legend")
                .declare("font-size", px(theme.legend_label_font_px))
                .declare("text-anchor", "start")
                .declare("dominant-baseline", "middle"),
            StyleRule::new("text.label-axis")
                .declare("font-size", px(theme.axis_label_font_px))
                .declare("font-weight", theme.axis_label_font_weight),
            StyleRule::new("text.label-vertical.label-y")
                .declare("text-anchor", "middle")
                .declare("transform-box", "fill-box")
                .declare("transform-origin", "center")
                .declare("transform", "rotate(-90deg)"),
            StyleRule::new("text.title, text.subtitle").declare("text-anchor", "middle"),
            StyleRule::new("text.title").declare("font-size", px(theme.title_font_px)),
            StyleRule::new("text.subtitle").declare("font-size", px(theme.subtitle_font_px)),
            StyleRule::new("path.density-curve")
                .declare("stroke-linejoin", "round")
                .declare("stroke-width", px(theme.curve_stroke_width_px))
                .declare("fill", "none"),
        ];
        Self { rules }
    }

    /// Appends a `path.<key> { stroke: <color>; }` override per entry.
    pub fn with_series_colors(mut self, colors: &IndexMap<String, String>) -> ChartResult<Self> {
        for (key, color) in colors {
            validate_color(color)?;
            self.rules
                .push(StyleRule::new(format!("path.{key}")).declare("stroke", color));
        }
        Ok(self)
    }

    #[must_use]
    pub fn rules(&self) -> &[StyleRule] {
        &self.rules
    }

    #[must_use]
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        for rule in &self.rules {
            css.push_str(&rule.selector);
            css.push_str("\n{\n");
            for (property, value) in &rule.declarations {
                css.push_str("    ");
                css.push_str(property);
                css.push_str(": ");
                css.push_str(value);
                css.push_str(";\n");
            }
            css.push_str("}\n");
        }
        css
    }
}

/// Colors land verbatim inside a CSS declaration within a CDATA section.
pub fn validate_color(color: &str) -> ChartResult<()> {
    validate_css_value("color", color)
}

fn validate_css_value(field: &str, value: &str) -> ChartResult<()> {
    if value.trim().is_empty() {
        return Err(ChartError::InvalidData(format!("{field} must not be empty")));
    }
    if value.contains(['{', '}', ';', '<', '>']) {
        return Err(ChartError::InvalidData(format!(
            "{field} `{value}` contains a forbidden character"
        )));
    }
    Ok(())
}
