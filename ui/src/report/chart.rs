use dioxus::prelude::*;

use crate::core::{Category, ScoreMap};
use crate::t;

/// Chart-ready view of the resolved scores, one bar per category.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub labels: Vec<&'static str>,
    pub datasets: Vec<ChartDataset>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartDataset {
    pub label: &'static str,
    pub data: Vec<i32>,
    pub background_color: Vec<&'static str>,
    pub border_radius: u32,
}

impl ChartData {
    pub const DATASET_LABEL: &'static str = "Category Scores (out of 10)";
    pub const BORDER_RADIUS: u32 = 8;

    pub fn from_scores(scores: &ScoreMap) -> Self {
        Self {
            labels: Category::ALL.iter().map(|c| c.name()).collect(),
            datasets: vec![ChartDataset {
                label: Self::DATASET_LABEL,
                data: scores.iter().map(|(_, score)| score).collect(),
                background_color: Category::ALL.iter().map(|c| c.color()).collect(),
                border_radius: Self::BORDER_RADIUS,
            }],
        }
    }

    fn primary(&self) -> Option<&ChartDataset> {
        self.datasets.first()
    }
}

/// Fixed SVG canvas the bar chart is laid out on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub margin_top: f64,
    pub margin_right: f64,
    pub margin_bottom: f64,
    pub margin_left: f64,
    /// Share of each category slot occupied by its bar.
    pub bar_fill: f64,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 256.0,
            margin_top: 20.0,
            margin_right: 12.0,
            margin_bottom: 36.0,
            margin_left: 36.0,
            bar_fill: 0.6,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarShape {
    pub label: &'static str,
    pub value: i32,
    pub color: &'static str,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub radius: f64,
    pub center_x: f64,
}

/// Vertical scale: zero to `max` with a gridline every `step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueAxis {
    pub max: i64,
    pub step: i64,
}

impl ValueAxis {
    /// The axis never tops out below a perfect score.
    pub const FLOOR: i64 = 10;
    /// Upper bound on gridline intervals, whatever the peak.
    pub const MAX_INTERVALS: i64 = 5;

    /// Smallest 2/5/10 x 10^n step that covers `peak` in at most
    /// [`Self::MAX_INTERVALS`] intervals.
    pub fn for_peak(peak: i32) -> Self {
        let peak = i64::from(peak).max(Self::FLOOR);
        let mut magnitude = 1_i64;
        let step = loop {
            if let Some(step) = [2, 5, 10]
                .into_iter()
                .map(|mantissa| mantissa * magnitude)
                .find(|step| (peak + step - 1) / step <= Self::MAX_INTERVALS)
            {
                break step;
            }
            magnitude *= 10;
        };
        let intervals = (peak + step - 1) / step;
        Self {
            max: intervals * step,
            step,
        }
    }

    pub fn ticks(&self) -> Vec<i64> {
        (0..=self.max / self.step).map(|i| i * self.step).collect()
    }
}

impl ChartLayout {
    fn plot_width(&self) -> f64 {
        self.width - self.margin_left - self.margin_right
    }

    fn plot_height(&self) -> f64 {
        self.height - self.margin_top - self.margin_bottom
    }

    pub fn baseline(&self) -> f64 {
        self.height - self.margin_bottom
    }

    pub fn axis(&self, chart: &ChartData) -> ValueAxis {
        let peak = chart
            .primary()
            .and_then(|set| set.data.iter().copied().max())
            .unwrap_or(0);
        ValueAxis::for_peak(peak)
    }

    pub fn value_y(&self, value: i64, axis: &ValueAxis) -> f64 {
        let clamped = value.clamp(0, axis.max) as f64;
        self.baseline() - clamped / axis.max as f64 * self.plot_height()
    }

    pub fn bars(&self, chart: &ChartData) -> Vec<BarShape> {
        let Some(dataset) = chart.primary() else {
            return Vec::new();
        };
        let axis = self.axis(chart);
        let slots = chart.labels.len().max(1) as f64;
        let slot_width = self.plot_width() / slots;
        let bar_width = slot_width * self.bar_fill;

        chart
            .labels
            .iter()
            .zip(dataset.data.iter())
            .enumerate()
            .map(|(index, (&label, &value))| {
                let slot_start = self.margin_left + slot_width * index as f64;
                let top = self.value_y(i64::from(value), &axis);
                let height = self.baseline() - top;
                let color = dataset
                    .background_color
                    .get(index)
                    .copied()
                    .unwrap_or("#90a4ae");
                BarShape {
                    label,
                    value,
                    color,
                    x: slot_start + (slot_width - bar_width) / 2.0,
                    y: top,
                    width: bar_width,
                    height,
                    radius: (dataset.border_radius as f64)
                        .min(bar_width / 2.0)
                        .min(height / 2.0),
                    center_x: slot_start + slot_width / 2.0,
                }
            })
            .collect()
    }
}

#[component]
pub fn ReportChart(data: ChartData) -> Element {
    let layout = ChartLayout::default();
    let axis = layout.axis(&data);
    let ticks = axis.ticks();
    let bars = layout.bars(&data);
    let legend = data.primary().map(|set| set.label).unwrap_or_default();
    let view_box = format!("0 0 {} {}", layout.width, layout.height);
    let grid_end = layout.width - layout.margin_right;
    let tick_x = layout.margin_left - 8.0;
    let label_y = layout.baseline() + 22.0;

    rsx! {
        section { class: "report-card report-chart",
            h2 { class: "report-card__title", {t!("report-chart-title")} }
            p { class: "report-chart__legend",
                span { class: "report-chart__legend-swatch" }
                "{legend}"
            }

            svg {
                class: "report-chart__canvas",
                view_box: "{view_box}",
                role: "img",
                "aria-label": "{legend}",

                for tick in ticks {
                    g { key: "tick-{tick}", class: "report-chart__tick",
                        line {
                            class: "report-chart__grid",
                            x1: layout.margin_left,
                            x2: grid_end,
                            y1: layout.value_y(tick, &axis),
                            y2: layout.value_y(tick, &axis),
                        }
                        text {
                            class: "report-chart__axis-label",
                            x: tick_x,
                            y: layout.value_y(tick, &axis) + 4.0,
                            text_anchor: "end",
                            "{tick}"
                        }
                    }
                }

                for bar in bars {
                    g { key: "{bar.label}", class: "report-chart__bar",
                        rect {
                            x: bar.x,
                            y: bar.y,
                            width: bar.width,
                            height: bar.height,
                            rx: bar.radius,
                            fill: bar.color,
                        }
                        text {
                            class: "report-chart__value",
                            x: bar.center_x,
                            y: bar.y - 6.0,
                            text_anchor: "middle",
                            "{bar.value}"
                        }
                        text {
                            class: "report-chart__label",
                            x: bar.center_x,
                            y: label_y,
                            text_anchor: "middle",
                            "{bar.label}"
                        }
                    }
                }
            }
        }
    }
}
