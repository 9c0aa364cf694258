//! Shared chart plumbing: the `Chart` trait, text and axis helpers.
use anyhow::{Context, Result};
use std::path::Path;
use svg::node::element::{Group, Line, Text};
use svg::Document;

pub(crate) const FONT: &str = "sans-serif";
pub(crate) const TITLE_HEIGHT: f64 = 50.0;
pub(crate) const MARGIN: f64 = 20.0;
// rough advance width of one label character at 12px
const CHAR_WIDTH: f64 = 7.0;

// Traits -------------------------------------------------------------------------------------

/// Renders a chart into a standalone SVG document.
pub trait Chart {
    fn to_document(&self) -> Document;

    fn save(&self, path: &Path) -> Result<()> {
        svg::save(path, &self.to_document())
            .with_context(|| format!("failed to write chart {}", path.display()))?;
        tracing::info!(path = %path.display(), "wrote chart");
        Ok(())
    }
}

// Helper Functions ---------------------------------------------------------------------------

pub(crate) fn text(content: &str, x: f64, y: f64, size: f64, anchor: &str) -> Text {
    Text::new(content)
        .set("x", x)
        .set("y", y)
        .set("font-family", FONT)
        .set("font-size", size)
        .set("text-anchor", anchor)
}

pub(crate) fn title(content: &str, width: f64) -> Text {
    text(content, width / 2.0, TITLE_HEIGHT / 2.0 + 8.0, 18.0, "middle").set("class", "title")
}

/// Label rotated 45° counter-clockwise, hanging down-left from `(x, y)`.
pub(crate) fn rotated_label(content: &str, x: f64, y: f64) -> Text {
    text(content, x, y, 12.0, "end")
        .set("class", "x-label")
        .set("transform", format!("rotate(-45 {x} {y})"))
}

/// Space needed by a rotated label column.
pub(crate) fn rotated_label_extent(labels: &[String]) -> f64 {
    let longest = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0) as f64;
    longest * CHAR_WIDTH * std::f64::consts::FRAC_1_SQRT_2 + 16.0
}

pub(crate) fn label_width(labels: &[String]) -> f64 {
    let longest = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0) as f64;
    longest * CHAR_WIDTH + 12.0
}

pub(crate) fn format_value(value: f64) -> String {
    if value != 0.0 && value.abs() < 0.01 {
        format!("{value:.2e}")
    } else {
        format!("{value:.2}")
    }
}

/// Smallest 1/2/5 × 10^k that is at least `value`.
pub(crate) fn nice_ceiling(value: f64) -> f64 {
    if value <= 0.0 || !value.is_finite() {
        return 1.0;
    }
    let magnitude = 10f64.powf(value.log10().floor());
    [1.0, 2.0, 5.0, 10.0]
        .iter()
        .map(|step| step * magnitude)
        .find(|candidate| *candidate >= value)
        .unwrap_or(10.0 * magnitude)
}

/// Linear map from data space onto a vertical pixel span.
#[derive(Debug, Clone, Copy)]
pub(crate) struct YScale {
    pub min: f64,
    pub max: f64,
    pub top: f64,
    pub bottom: f64,
}

impl YScale {
    pub fn new(min: f64, max: f64, top: f64, bottom: f64) -> Self {
        let min = if min < 0.0 { -nice_ceiling(-min) } else { 0.0 };
        let max = if max > 0.0 { nice_ceiling(max) } else { 0.0 };
        // all-zero data still gets a unit axis
        let max = if max == min { min + 1.0 } else { max };
        YScale {
            min,
            max,
            top,
            bottom,
        }
    }
    pub fn px(&self, value: f64) -> f64 {
        self.bottom - (value - self.min) / (self.max - self.min) * (self.bottom - self.top)
    }
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let step = (self.max - self.min) / count as f64;
        (0..=count).map(|i| self.min + step * i as f64).collect()
    }
}

/// Vertical axis with gridlines across the plot width.
pub(crate) fn y_axis(
    scale: &YScale,
    left: f64,
    right: f64,
    axis_title: &str,
    suffix: &str,
) -> Group {
    let axis = scale.ticks(5).into_iter().fold(
        Group::new().set("class", "y-axis"),
        |group, tick| {
            let y = scale.px(tick);
            group
                .add(
                    Line::new()
                        .set("x1", left)
                        .set("x2", right)
                        .set("y1", y)
                        .set("y2", y)
                        .set("stroke", "#e5e5e5")
                        .set("stroke-width", 1),
                )
                .add(text(
                    &format!("{}{suffix}", format_value(tick)),
                    left - 6.0,
                    y + 4.0,
                    11.0,
                    "end",
                ))
        },
    );

    let mid = (scale.top + scale.bottom) / 2.0;
    let title_x = MARGIN;
    axis.add(
        text(axis_title, title_x, mid, 14.0, "middle")
            .set("class", "axis-title")
            .set("transform", format!("rotate(-90 {title_x} {mid})")),
    )
    .add(
        Line::new()
            .set("x1", left)
            .set("x2", left)
            .set("y1", scale.top)
            .set("y2", scale.bottom)
            .set("stroke", "black")
            .set("stroke-width", 1),
    )
}
