//! Turns a detection response into what the result panel and chart show.

use common::{AnomalyResponse, ChartData, ChartOmission, ChartSeriesKind, validate_chart, CHART_LEN};
use serde::Serialize;

use crate::locale::Locale;

pub use common::should_show_chart;

/// Fill of the twelve historical production bars.
pub const STANDARD_FILL: &str = "rgba(59, 130, 246, 0.5)";
/// Fill of the current month's production bar.
pub const CURRENT_MONTH_FILL: &str = "rgba(255, 99, 132, 0.7)";
/// Stroke width of the overlay lines.
pub const LINE_WIDTH: f64 = 2.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarSeries {
    pub label: String,
    pub values: Vec<f64>,
    /// One fill per bar
    pub fills: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineSeries {
    pub kind: ChartSeriesKind,
    pub label: String,
    pub values: Vec<f64>,
    pub color: &'static str,
    pub width: f64,
    /// Whether the area below the line is filled
    pub fill: bool,
}

/// Everything needed to draw the production chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub title: &'static str,
    pub y_axis_title: &'static str,
    pub labels: Vec<String>,
    pub bars: BarSeries,
    pub lines: Vec<LineSeries>,
}

pub fn bar_fill(index: usize) -> &'static str {
    if index == CHART_LEN - 1 { CURRENT_MONTH_FILL } else { STANDARD_FILL }
}

pub fn line_color(kind: ChartSeriesKind) -> &'static str {
    match kind {
        ChartSeriesKind::MonthlyProduction => STANDARD_FILL,
        ChartSeriesKind::ThreeMonthAverage => "orange",
        ChartSeriesKind::RegulatoryFactor => "red",
        ChartSeriesKind::SolarMinimum => "green",
    }
}

fn series_label(kind: ChartSeriesKind, locale: Locale) -> &'static str {
    match kind {
        ChartSeriesKind::MonthlyProduction => locale.production_series(),
        ChartSeriesKind::ThreeMonthAverage => locale.three_month_average_series(),
        ChartSeriesKind::RegulatoryFactor => locale.regulatory_factor_series(),
        ChartSeriesKind::SolarMinimum => locale.solar_minimum_series(),
    }
}

/// Category labels: twelve numbered months followed by the current one.
pub fn category_labels(locale: Locale) -> Vec<String> {
    (0..CHART_LEN)
        .map(|i| {
            if i < CHART_LEN - 1 {
                locale.month_label(i)
            } else {
                locale.current_month_label().to_string()
            }
        })
        .collect()
}

/// Shapes a validated chart into one bar series and three overlay lines.
pub fn build_chart_series(chart: &ChartData, locale: Locale) -> ChartSeries {
    let production = chart.series(ChartSeriesKind::MonthlyProduction);
    let bars = BarSeries {
        label: series_label(ChartSeriesKind::MonthlyProduction, locale).to_string(),
        values: production.to_vec(),
        fills: (0..production.len()).map(bar_fill).collect(),
    };

    let lines = ChartSeriesKind::ALL
        .into_iter()
        .filter(|kind| *kind != ChartSeriesKind::MonthlyProduction)
        .map(|kind| LineSeries {
            kind,
            label: series_label(kind, locale).to_string(),
            values: chart.series(kind).to_vec(),
            color: line_color(kind),
            width: LINE_WIDTH,
            fill: false,
        })
        .collect();

    ChartSeries {
        title: locale.chart_title(),
        y_axis_title: "kWh",
        labels: category_labels(locale),
        bars,
        lines,
    }
}

/// One row of the result panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlagRow {
    pub label: &'static str,
    pub value: bool,
    pub text: &'static str,
}

pub fn flag_rows(response: &AnomalyResponse, locale: Locale) -> [FlagRow; 3] {
    let row = |label: &'static str, value: bool| FlagRow { label, value, text: locale.yes_no(value) };
    [
        row(locale.general_anomaly(), response.anomaly_detected),
        row(locale.factor_anomaly(), response.anomaly_detected_factor),
        row(locale.solar_anomaly(), response.solar_anomaly),
    ]
}

/// Result panel plus optional chart for one response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Presentation {
    pub flags: [FlagRow; 3],
    pub chart: Option<ChartSeries>,
    /// Why the chart was left out, when it was
    pub chart_omission: Option<String>,
}

pub fn present(response: &AnomalyResponse, locale: Locale) -> Presentation {
    let (chart, chart_omission) = match validate_chart(response) {
        Ok(data) => (Some(build_chart_series(&data, locale)), None),
        Err(ChartOmission::MissingChart) => (None, None),
        Err(omission) => (None, Some(omission.to_string())),
    };

    Presentation { flags: flag_rows(response, locale), chart, chart_omission }
}
