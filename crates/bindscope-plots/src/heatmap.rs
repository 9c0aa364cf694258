//! Annotated correlation heatmap.
use crate::chart::{
    format_value, label_width, rotated_label, rotated_label_extent, text, title, Chart, MARGIN,
    TITLE_HEIGHT,
};
use crate::colors::diverging;
use bindscope_core::CorrelationMatrix;
use svg::node::element::{Group, Rectangle};
use svg::Document;

const CELL: f64 = 56.0;
const COLORBAR_WIDTH: f64 = 20.0;
const COLORBAR_STEPS: usize = 40;

pub struct Heatmap<'a> {
    matrix: &'a CorrelationMatrix,
    title: String,
    axis_title: String,
    colorbar_title: String,
}

impl<'a> Heatmap<'a> {
    pub fn new(matrix: &'a CorrelationMatrix, title: impl Into<String>) -> Self {
        Heatmap {
            matrix,
            title: title.into(),
            axis_title: "Features".to_string(),
            colorbar_title: "Correlation".to_string(),
        }
    }

    fn cells(&self, left: f64, top: f64) -> Group {
        let mut group = Group::new().set("class", "cells");
        for (i, row) in self.matrix.rows().iter().enumerate() {
            for (j, value) in row.iter().enumerate() {
                let x = left + j as f64 * CELL;
                let y = top + i as f64 * CELL;
                let fill = value
                    .map(|v| diverging(v, -1.0, 1.0))
                    .map(|c| c.css())
                    .unwrap_or_else(|| "white".to_string());
                group = group.add(
                    Rectangle::new()
                        .set("class", "cell")
                        .set("x", x)
                        .set("y", y)
                        .set("width", CELL)
                        .set("height", CELL)
                        .set("fill", fill)
                        .set("stroke", "white"),
                );
                if let Some(v) = value {
                    let ink = if diverging(*v, -1.0, 1.0).is_dark() {
                        "white"
                    } else {
                        "black"
                    };
                    group = group.add(
                        text(
                            &format_value(*v),
                            x + CELL / 2.0,
                            y + CELL / 2.0 + 4.0,
                            11.0,
                            "middle",
                        )
                        .set("class", "cell-value")
                        .set("fill", ink),
                    );
                }
            }
        }
        group
    }

    fn colorbar(&self, x: f64, top: f64, height: f64) -> Group {
        let step_height = height / COLORBAR_STEPS as f64;
        let bar = (0..COLORBAR_STEPS).fold(Group::new().set("class", "colorbar"), |g, k| {
            // top of the bar is +1
            let value = 1.0 - 2.0 * (k as f64 + 0.5) / COLORBAR_STEPS as f64;
            g.add(
                Rectangle::new()
                    .set("x", x)
                    .set("y", top + k as f64 * step_height)
                    .set("width", COLORBAR_WIDTH)
                    .set("height", step_height + 0.5)
                    .set("fill", diverging(value, -1.0, 1.0).css()),
            )
        });
        [1.0, 0.5, 0.0, -0.5, -1.0]
            .iter()
            .fold(bar, |g, tick| {
                let y = top + (1.0 - tick) / 2.0 * height;
                g.add(text(
                    &format_value(*tick),
                    x + COLORBAR_WIDTH + 6.0,
                    y + 4.0,
                    11.0,
                    "start",
                ))
            })
            .add(text(&self.colorbar_title, x, top - 10.0, 12.0, "start"))
    }
}

impl Chart for Heatmap<'_> {
    fn to_document(&self) -> Document {
        let n = self.matrix.size();
        let names = self.matrix.names();
        let grid = n as f64 * CELL;

        let left = MARGIN * 2.0 + label_width(names);
        let top = TITLE_HEIGHT + MARGIN;
        let x_labels = rotated_label_extent(names);
        let colorbar_x = left + grid + 30.0;
        let width = colorbar_x + COLORBAR_WIDTH + 60.0;
        let height = top + grid + x_labels + 40.0;

        let y_labels = names.iter().enumerate().fold(
            Group::new().set("class", "y-labels"),
            |g, (i, name)| {
                g.add(
                    text(
                        name,
                        left - 6.0,
                        top + (i as f64 + 0.5) * CELL + 4.0,
                        12.0,
                        "end",
                    )
                    .set("class", "y-label"),
                )
            },
        );
        let x_labels_group = names.iter().enumerate().fold(
            Group::new().set("class", "x-labels"),
            |g, (j, name)| {
                g.add(rotated_label(
                    name,
                    left + (j as f64 + 0.5) * CELL,
                    top + grid + 14.0,
                ))
            },
        );

        let axis_mid_y = top + grid / 2.0;
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
            .add(self.cells(left, top))
            .add(y_labels)
            .add(x_labels_group)
            .add(
                text(&self.axis_title, left + grid / 2.0, height - 12.0, 14.0, "middle")
                    .set("class", "axis-title"),
            )
            .add(
                text(&self.axis_title, MARGIN, axis_mid_y, 14.0, "middle")
                    .set("class", "axis-title")
                    .set("transform", format!("rotate(-90 {MARGIN} {axis_mid_y})")),
            )
            .add(self.colorbar(colorbar_x, top, grid.max(100.0)))
    }
}
