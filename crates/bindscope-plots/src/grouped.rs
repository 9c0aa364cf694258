//! Multi-series bar charts: side by side (`Group`) or stacked (`Relative`).
use crate::chart::{
    format_value, label_width, rotated_label, rotated_label_extent, text, title, y_axis, Chart,
    YScale, MARGIN, TITLE_HEIGHT,
};
use crate::colors::categorical;
use svg::node::element::{Group, Line, Rectangle};
use svg::Document;

const PLOT_HEIGHT: f64 = 360.0;
const SLOT: f64 = 90.0;
const Y_AXIS_SPACE: f64 = 80.0;
const SWATCH: f64 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BarMode {
    #[default]
    Group,
    Relative,
}

pub struct GroupedBarChart {
    title: String,
    x_title: String,
    y_title: String,
    legend_title: String,
    y_suffix: String,
    mode: BarMode,
    categories: Vec<String>,
    series: Vec<String>,
    // values[series][category]
    values: Vec<Vec<Option<f64>>>,
}

impl GroupedBarChart {
    /// Build from `(x category, series, value)` triples. Categories and series
    /// keep their order of first appearance; a repeated pair keeps the last value.
    pub fn from_triples<I, X, S>(title: impl Into<String>, triples: I) -> Self
    where
        I: IntoIterator<Item = (X, S, f64)>,
        X: Into<String>,
        S: Into<String>,
    {
        let mut categories: Vec<String> = Vec::new();
        let mut series: Vec<String> = Vec::new();
        let mut cells: Vec<(usize, usize, f64)> = Vec::new();
        for (x, s, value) in triples {
            let (x, s) = (x.into(), s.into());
            let xi = position_or_push(&mut categories, x);
            let si = position_or_push(&mut series, s);
            cells.push((si, xi, value));
        }

        let mut values = vec![vec![None; categories.len()]; series.len()];
        for (si, xi, value) in cells {
            values[si][xi] = Some(value);
        }

        GroupedBarChart {
            title: title.into(),
            x_title: String::new(),
            y_title: String::new(),
            legend_title: String::new(),
            y_suffix: String::new(),
            mode: BarMode::Group,
            categories,
            series,
            values,
        }
    }
    pub fn with_axis_titles(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.x_title = x.into();
        self.y_title = y.into();
        self
    }
    pub fn with_legend_title(mut self, legend: impl Into<String>) -> Self {
        self.legend_title = legend.into();
        self
    }
    pub fn with_y_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.y_suffix = suffix.into();
        self
    }
    pub fn with_mode(mut self, mode: BarMode) -> Self {
        self.mode = mode;
        self
    }
    pub fn categories(&self) -> &[String] {
        &self.categories
    }
    pub fn series(&self) -> &[String] {
        &self.series
    }

    fn value_range(&self) -> (f64, f64) {
        match self.mode {
            BarMode::Group => self
                .values
                .iter()
                .flatten()
                .flatten()
                .fold((0.0, 0.0), |(lo, hi), v| (f64::min(lo, *v), f64::max(hi, *v))),
            BarMode::Relative => (0..self.categories.len()).fold((0.0, 0.0), |(lo, hi), xi| {
                let (neg, pos) = self.stack_totals(xi);
                (f64::min(lo, neg), f64::max(hi, pos))
            }),
        }
    }

    fn stack_totals(&self, xi: usize) -> (f64, f64) {
        self.values
            .iter()
            .filter_map(|row| row[xi])
            .fold((0.0, 0.0), |(neg, pos), v| {
                if v < 0.0 {
                    (neg + v, pos)
                } else {
                    (neg, pos + v)
                }
            })
    }

    fn bars(&self, scale: &YScale, left: f64, slot: f64) -> Group {
        let n_series = self.series.len().max(1) as f64;
        let mut group = Group::new().set("class", "bars");
        for xi in 0..self.categories.len() {
            let slot_left = left + xi as f64 * slot + slot * 0.1;
            let inner = slot * 0.8;
            // running stack offsets below and above zero
            let (mut neg, mut pos) = (0.0, 0.0);
            for (si, row) in self.values.iter().enumerate() {
                let Some(value) = row[xi] else {
                    continue;
                };
                let (x, width, from, to) = match self.mode {
                    BarMode::Group => {
                        let width = inner / n_series;
                        (slot_left + si as f64 * width, width, 0.0, value)
                    }
                    BarMode::Relative if value < 0.0 => {
                        neg += value;
                        (slot_left, inner, neg - value, neg)
                    }
                    BarMode::Relative => {
                        pos += value;
                        (slot_left, inner, pos - value, pos)
                    }
                };
                let (y_from, y_to) = (scale.px(from), scale.px(to));
                let bar_top = y_from.min(y_to);
                let bar_height = (y_from - y_to).abs();
                group = group.add(
                    Rectangle::new()
                        .set("class", "bar")
                        .set("x", x)
                        .set("y", bar_top)
                        .set("width", width)
                        .set("height", bar_height)
                        .set("fill", categorical(si).css())
                        .set("stroke", "white")
                        .set("stroke-width", 0.5),
                );
                if self.mode == BarMode::Group {
                    group = group.add(
                        text(
                            &format!("{}{}", format_value(value), self.y_suffix),
                            x + width / 2.0,
                            bar_top - 4.0,
                            10.0,
                            "middle",
                        )
                        .set("class", "bar-value"),
                    );
                }
            }
            group = group.add(rotated_label(
                &self.categories[xi],
                left + (xi as f64 + 0.5) * slot,
                scale.bottom + 14.0,
            ));
        }
        group
    }

    fn legend(&self, x: f64, top: f64) -> Group {
        let heading = text(&self.legend_title, x, top, 12.0, "start").set("class", "legend-title");
        self.series.iter().enumerate().fold(
            Group::new().set("class", "legend").add(heading),
            |g, (si, name)| {
                let y = top + 12.0 + si as f64 * 20.0;
                g.add(
                    Group::new()
                        .set("class", "legend-item")
                        .add(
                            Rectangle::new()
                                .set("x", x)
                                .set("y", y)
                                .set("width", SWATCH)
                                .set("height", SWATCH)
                                .set("fill", categorical(si).css()),
                        )
                        .add(text(name, x + SWATCH + 6.0, y + SWATCH - 1.0, 12.0, "start")),
                )
            },
        )
    }
}

impl Chart for GroupedBarChart {
    fn to_document(&self) -> Document {
        let left = Y_AXIS_SPACE;
        let top = TITLE_HEIGHT + MARGIN;
        let plot_width = (self.categories.len() as f64 * SLOT).max(240.0);
        let slot = plot_width / self.categories.len().max(1) as f64;
        let legend_x = left + plot_width + MARGIN;
        let mut legend_labels = self.series.clone();
        legend_labels.push(self.legend_title.clone());
        let width = legend_x + SWATCH + 6.0 + label_width(&legend_labels) + MARGIN;
        let height = top + PLOT_HEIGHT + rotated_label_extent(&self.categories) + 40.0;

        let (min, max) = self.value_range();
        let scale = YScale::new(min, max, top, top + PLOT_HEIGHT);
        let baseline = scale.px(0.0);

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
            .add(y_axis(
                &scale,
                left,
                left + plot_width,
                &self.y_title,
                &self.y_suffix,
            ))
            .add(self.bars(&scale, left, slot))
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
            .add(self.legend(legend_x, top))
    }
}

fn position_or_push(items: &mut Vec<String>, item: String) -> usize {
    match items.iter().position(|existing| *existing == item) {
        Some(index) => index,
        None => {
            items.push(item);
            items.len() - 1
        }
    }
}
