//! Single-series bar charts with value labels.
use crate::chart::{
    format_value, rotated_label, rotated_label_extent, text, title, y_axis, Chart, YScale,
    MARGIN, TITLE_HEIGHT,
};
use crate::colors::categorical;
use svg::node::element::{Group, Line, Rectangle};
use svg::Document;

const PLOT_HEIGHT: f64 = 360.0;
const SLOT: f64 = 56.0;
const Y_AXIS_SPACE: f64 = 80.0;

pub struct BarChart {
    title: String,
    x_title: String,
    y_title: String,
    bars: Vec<(String, f64)>,
}

impl BarChart {
    pub fn new(title: impl Into<String>, bars: Vec<(String, f64)>) -> Self {
        BarChart {
            title: title.into(),
            x_title: String::new(),
            y_title: String::new(),
            bars,
        }
    }
    pub fn with_axis_titles(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.x_title = x.into();
        self.y_title = y.into();
        self
    }
    pub fn len(&self) -> usize {
        self.bars.len()
    }
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}

impl Chart for BarChart {
    fn to_document(&self) -> Document {
        let labels: Vec<String> = self.bars.iter().map(|(l, _)| l.clone()).collect();
        let left = Y_AXIS_SPACE;
        let top = TITLE_HEIGHT + MARGIN;
        let plot_width = (self.bars.len() as f64 * SLOT).max(240.0);
        let slot = plot_width / self.bars.len().max(1) as f64;
        let width = left + plot_width + MARGIN * 2.0;
        let height = top + PLOT_HEIGHT + rotated_label_extent(&labels) + 40.0;

        let min = self.bars.iter().map(|(_, v)| *v).fold(0.0, f64::min);
        let max = self.bars.iter().map(|(_, v)| *v).fold(0.0, f64::max);
        let scale = YScale::new(min, max, top, top + PLOT_HEIGHT);
        let baseline = scale.px(0.0);

        let bars = self.bars.iter().enumerate().fold(
            Group::new().set("class", "bars"),
            |g, (i, (label, value))| {
                let x = left + i as f64 * slot;
                let y = scale.px(*value);
                let (bar_top, bar_height) = if y < baseline {
                    (y, baseline - y)
                } else {
                    (baseline, y - baseline)
                };
                let value_y = if *value >= 0.0 { y - 4.0 } else { y + 12.0 };
                g.add(
                    Rectangle::new()
                        .set("class", "bar")
                        .set("x", x + slot * 0.1)
                        .set("y", bar_top)
                        .set("width", slot * 0.8)
                        .set("height", bar_height)
                        .set("fill", categorical(0).css()),
                )
                .add(
                    text(&format_value(*value), x + slot / 2.0, value_y, 11.0, "middle")
                        .set("class", "bar-value"),
                )
                .add(rotated_label(label, x + slot / 2.0, top + PLOT_HEIGHT + 14.0))
            },
        );

        Document::new()
            .set("width", width)
            .set("height", height)
            .set("viewBox", (0.0, 0.0, width, height))
            .add(
                Rectangle::new()
                    .set("width", width)
                    .set("height", height)
                    .set("fill", "white"),
            )
            .add(title(&self.title, width))
            .add(y_axis(&scale, left, left + plot_width, &self.y_title, ""))
            .add(bars)
            .add(
                Line::new()
                    .set("x1", left)
                    .set("x2", left + plot_width)
                    .set("y1", baseline)
                    .set("y2", baseline)
                    .set("stroke", "black")
                    .set("stroke-width", 1),
            )
            .add(
                text(&self.x_title, left + plot_width / 2.0, height - 12.0, 14.0, "middle")
                    .set("class", "axis-title"),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bars() {
        let chart = BarChart::new(
            "Correlation With KD",
            vec![
                ("kd".to_string(), 1.0),
                ("contacts".to_string(), 0.4),
                ("expression_numeric".to_string(), 0.75),
            ],
        )
        .with_axis_titles("Features", "Absolute Corelation");
        assert_eq!(chart.len(), 3);

        let svg = chart.to_document().to_string();
        assert_eq!(svg.matches("class=\"bar\"").count(), 3);
        assert_eq!(svg.matches("class=\"bar-value\"").count(), 3);
        assert!(svg.contains("0.75"));
        assert!(svg.contains("Absolute Corelation"));
        assert!(svg.contains("expression_numeric"));
    }

    #[test]
    fn test_empty_chart_renders() {
        let chart = BarChart::new("nothing", vec![]);
        assert!(chart.is_empty());
        let svg = chart.to_document().to_string();
        assert_eq!(svg.matches("class=\"bar\"").count(), 0);
        assert!(svg.contains("nothing"));
    }
}
