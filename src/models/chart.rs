//! Geometry for the small inline SVG charts on the dashboards.
//!
//! Values are scaled against the series maximum into a fixed drawing area.
//! Coordinates are precomputed here so templates only emit attributes.

pub const CHART_WIDTH: u32 = 560;
pub const CHART_HEIGHT: u32 = 240;
/// Space reserved below the plot for category labels.
const LABEL_BAND: u32 = 24;
/// Space reserved above the tallest mark for its value label.
const TOP_PAD: u32 = 18;
const SIDE_PAD: u32 = 16;

/// One `(label, value)` data point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Datum {
    pub label: String,
    pub value: u32,
}

impl Datum {
    pub fn new(label: impl Into<String>, value: u32) -> Self {
        Self { label: label.into(), value }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: u32,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Horizontal centre of the bar, used for label anchors.
    pub center: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub width: u32,
    pub height: u32,
    pub baseline: f64,
    pub bars: Vec<Bar>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    pub label: String,
    pub value: u32,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    pub width: u32,
    pub height: u32,
    pub baseline: f64,
    pub vertices: Vec<Vertex>,
    /// `points` attribute for the SVG polyline.
    pub polyline: String,
}

fn plot_height() -> f64 {
    f64::from(CHART_HEIGHT - LABEL_BAND - TOP_PAD)
}

fn baseline() -> f64 {
    f64::from(CHART_HEIGHT - LABEL_BAND)
}

/// Height of `value` relative to `max`; a zero maximum renders flat.
fn scaled(value: u32, max: u32) -> f64 {
    if max == 0 {
        return 0.0;
    }
    f64::from(value) / f64::from(max) * plot_height()
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

impl BarChart {
    pub fn new(data: &[Datum]) -> Self {
        let max = data.iter().map(|d| d.value).max().unwrap_or(0);
        let inner = f64::from(CHART_WIDTH - 2 * SIDE_PAD);
        let slot = if data.is_empty() { inner } else { inner / data.len() as f64 };
        let width = slot * 0.7;

        let bars = data
            .iter()
            .enumerate()
            .map(|(i, d)| {
                let height = scaled(d.value, max);
                let x = f64::from(SIDE_PAD) + slot * i as f64 + (slot - width) / 2.0;
                Bar {
                    label: d.label.clone(),
                    value: d.value,
                    x: round1(x),
                    y: round1(baseline() - height),
                    width: round1(width),
                    height: round1(height),
                    center: round1(x + width / 2.0),
                }
            })
            .collect();

        Self { width: CHART_WIDTH, height: CHART_HEIGHT, baseline: baseline(), bars }
    }
}

impl LineChart {
    pub fn new(data: &[Datum]) -> Self {
        let max = data.iter().map(|d| d.value).max().unwrap_or(0);
        let inner = f64::from(CHART_WIDTH - 2 * SIDE_PAD);
        let step = if data.len() > 1 { inner / (data.len() - 1) as f64 } else { 0.0 };
        let first_x = if data.len() > 1 {
            f64::from(SIDE_PAD)
        } else {
            f64::from(CHART_WIDTH) / 2.0
        };

        let vertices: Vec<Vertex> = data
            .iter()
            .enumerate()
            .map(|(i, d)| Vertex {
                label: d.label.clone(),
                value: d.value,
                x: round1(first_x + step * i as f64),
                y: round1(baseline() - scaled(d.value, max)),
            })
            .collect();

        let polyline = vertices
            .iter()
            .map(|v| format!("{},{}", v.x, v.y))
            .collect::<Vec<_>>()
            .join(" ");

        Self { width: CHART_WIDTH, height: CHART_HEIGHT, baseline: baseline(), vertices, polyline }
    }
}
