use leptos::*;

use crate::state::{use_dashboard_state, ChartSeries};

const FQI_MAX: f64 = 100.0;

/// Drawing area of the chart, in SVG user units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartGeometry {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Default for ChartGeometry {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 240.0,
            padding: 24.0,
        }
    }
}

impl ChartGeometry {
    fn x(&self, index: usize, slots: usize) -> f64 {
        let inner = self.width - 2.0 * self.padding;
        if slots <= 1 {
            return self.padding + inner / 2.0;
        }
        self.padding + inner * index as f64 / (slots - 1) as f64
    }

    /// FQI is plotted on a fixed 0-100 axis, clamped at the edges
    fn y(&self, fqi: f64) -> f64 {
        let inner = self.height - 2.0 * self.padding;
        let ratio = fqi.clamp(0.0, FQI_MAX) / FQI_MAX;
        self.padding + inner * (1.0 - ratio)
    }
}

/// SVG `points` strings for the series, one per run of non-null values
pub fn chart_segments(series: &ChartSeries, geometry: &ChartGeometry) -> Vec<String> {
    let slots = series.len();
    let mut segments = Vec::new();
    let mut current: Vec<String> = Vec::new();

    for (index, point) in series.points().enumerate() {
        match point.fqi {
            Some(fqi) => current.push(format!(
                "{:.1},{:.1}",
                geometry.x(index, slots),
                geometry.y(fqi)
            )),
            None if !current.is_empty() => segments.push(std::mem::take(&mut current).join(" ")),
            None => {}
        }
    }
    if !current.is_empty() {
        segments.push(current.join(" "));
    }

    segments
}

/// Rolling FQI line chart
#[component]
pub fn FqiChart() -> impl IntoView {
    let state = use_dashboard_state();
    let geometry = ChartGeometry::default();
    let viewbox = format!("0 0 {} {}", geometry.width, geometry.height);

    let segments = move || state.chart.with(|series| chart_segments(series, &geometry));
    let first_label = move || {
        state
            .chart
            .with(|series| series.labels().next().unwrap_or_default().to_string())
    };
    let last_label = move || {
        state
            .chart
            .with(|series| series.last_label().unwrap_or_default().to_string())
    };

    view! {
        <svg
            id="mainChart"
            class="fqi-chart"
            viewBox=viewbox
            preserveAspectRatio="none"
            role="img"
            aria-label="Freshness Quality Index history"
        >
            {[0.0, 50.0, 100.0]
                .into_iter()
                .map(|fqi| {
                    let y = geometry.y(fqi);
                    view! {
                        <line
                            class="grid-line"
                            x1=geometry.padding
                            x2={geometry.width - geometry.padding}
                            y1=y
                            y2=y
                        />
                        <text class="axis-label" x="2" y={y + 4.0}>{fqi}</text>
                    }
                })
                .collect_view()}
            {move || {
                segments()
                    .into_iter()
                    .map(|points| view! { <polyline class="fqi-line" points=points /> })
                    .collect_view()
            }}
            <text class="axis-label" x=geometry.padding y={geometry.height - 4.0}>
                {first_label}
            </text>
            <text
                class="axis-label"
                x={geometry.width - geometry.padding}
                y={geometry.height - 4.0}
                text-anchor="end"
            >
                {last_label}
            </text>
        </svg>
    }
}
