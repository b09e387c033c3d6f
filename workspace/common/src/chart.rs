//! Shape validation for the chart block of a detection response.
//!
//! The chart is either drawn completely or not at all. [`validate_chart`]
//! turns the raw block into a fixed-size [`ChartData`] or names the first
//! reason it has to be left out.

use crate::response::{AnomalyResponse, RawChartData};
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Number of points per sequence: 12 historical months plus the current one.
pub const CHART_LEN: usize = 13;

/// The four parallel sequences of the chart block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ChartSeriesKind {
    MonthlyProduction,
    ThreeMonthAverage,
    RegulatoryFactor,
    SolarMinimum,
}

impl ChartSeriesKind {
    /// Order in which the sequences are checked and drawn.
    pub const ALL: [ChartSeriesKind; 4] = [
        ChartSeriesKind::MonthlyProduction,
        ChartSeriesKind::ThreeMonthAverage,
        ChartSeriesKind::RegulatoryFactor,
        ChartSeriesKind::SolarMinimum,
    ];

    /// Field name used by the detection service.
    pub fn wire_name(self) -> &'static str {
        match self {
            ChartSeriesKind::MonthlyProduction => "producao_mensal_kwh",
            ChartSeriesKind::ThreeMonthAverage => "linha_media_3_meses",
            ChartSeriesKind::RegulatoryFactor => "linha_fator_aneel",
            ChartSeriesKind::SolarMinimum => "linha_inc_solar",
        }
    }

    fn pick(self, raw: &RawChartData) -> Option<&Vec<f64>> {
        match self {
            ChartSeriesKind::MonthlyProduction => raw.monthly_production_kwh.as_ref(),
            ChartSeriesKind::ThreeMonthAverage => raw.three_month_average_line.as_ref(),
            ChartSeriesKind::RegulatoryFactor => raw.regulatory_factor_line.as_ref(),
            ChartSeriesKind::SolarMinimum => raw.solar_minimum_line.as_ref(),
        }
    }
}

/// A chart block that passed validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub monthly_production_kwh: [f64; CHART_LEN],
    pub three_month_average_line: [f64; CHART_LEN],
    pub regulatory_factor_line: [f64; CHART_LEN],
    pub solar_minimum_line: [f64; CHART_LEN],
}

impl ChartData {
    pub fn series(&self, kind: ChartSeriesKind) -> &[f64; CHART_LEN] {
        match kind {
            ChartSeriesKind::MonthlyProduction => &self.monthly_production_kwh,
            ChartSeriesKind::ThreeMonthAverage => &self.three_month_average_line,
            ChartSeriesKind::RegulatoryFactor => &self.regulatory_factor_line,
            ChartSeriesKind::SolarMinimum => &self.solar_minimum_line,
        }
    }
}

/// Why a chart is not drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartOmission {
    /// The response has no chart block at all
    MissingChart,
    /// One of the four sequences is absent
    MissingSeries(ChartSeriesKind),
    /// A sequence is present but not [`CHART_LEN`] long
    WrongLength { series: ChartSeriesKind, len: usize },
}

impl fmt::Display for ChartOmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartOmission::MissingChart => write!(f, "response has no chart data"),
            ChartOmission::MissingSeries(kind) => {
                write!(f, "chart series {} is missing", kind.wire_name())
            }
            ChartOmission::WrongLength { series, len } => write!(
                f,
                "chart series {} has {} points, expected {}",
                series.wire_name(),
                len,
                CHART_LEN
            ),
        }
    }
}

/// Validates the chart block of a response.
///
/// Sequences are checked in [`ChartSeriesKind::ALL`] order and the first
/// problem found is returned.
pub fn validate_chart(response: &AnomalyResponse) -> Result<ChartData, ChartOmission> {
    let raw = response.chart.as_ref().ok_or(ChartOmission::MissingChart)?;

    let mut checked = [[0.0; CHART_LEN]; 4];
    for (slot, kind) in checked.iter_mut().zip(ChartSeriesKind::ALL) {
        let values = kind.pick(raw).ok_or(ChartOmission::MissingSeries(kind))?;
        *slot = values.as_slice().try_into().map_err(|_| {
            let omission = ChartOmission::WrongLength { series: kind, len: values.len() };
            debug!(%omission, "chart omitted");
            omission
        })?;
    }

    let [monthly_production_kwh, three_month_average_line, regulatory_factor_line, solar_minimum_line] =
        checked;

    Ok(ChartData {
        monthly_production_kwh,
        three_month_average_line,
        regulatory_factor_line,
        solar_minimum_line,
    })
}

/// True when the response carries a complete, well-shaped chart.
pub fn should_show_chart(response: &AnomalyResponse) -> bool {
    validate_chart(response).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_raw() -> RawChartData {
        RawChartData {
            monthly_production_kwh: Some((1..=13).map(|v| v as f64 * 100.0).collect()),
            three_month_average_line: Some(vec![550.0; CHART_LEN]),
            regulatory_factor_line: Some(vec![115.2; CHART_LEN]),
            solar_minimum_line: Some(vec![400.0; CHART_LEN]),
        }
    }

    fn response_with(chart: Option<RawChartData>) -> AnomalyResponse {
        AnomalyResponse { chart, ..Default::default() }
    }

    #[test]
    fn test_complete_chart_is_valid() {
        let response = response_with(Some(full_raw()));

        let chart = validate_chart(&response).expect("chart should validate");
        assert_eq!(chart.monthly_production_kwh[0], 100.0);
        assert_eq!(chart.monthly_production_kwh[12], 1300.0);
        assert_eq!(chart.regulatory_factor_line, [115.2; CHART_LEN]);
        assert!(should_show_chart(&response));
    }

    #[test]
    fn test_missing_chart() {
        let response = response_with(None);
        assert_eq!(validate_chart(&response), Err(ChartOmission::MissingChart));
        assert!(!should_show_chart(&response));
    }

    #[test]
    fn test_each_missing_series_is_reported() {
        for kind in ChartSeriesKind::ALL {
            let mut raw = full_raw();
            match kind {
                ChartSeriesKind::MonthlyProduction => raw.monthly_production_kwh = None,
                ChartSeriesKind::ThreeMonthAverage => raw.three_month_average_line = None,
                ChartSeriesKind::RegulatoryFactor => raw.regulatory_factor_line = None,
                ChartSeriesKind::SolarMinimum => raw.solar_minimum_line = None,
            }
            let response = response_with(Some(raw));

            assert_eq!(validate_chart(&response), Err(ChartOmission::MissingSeries(kind)));
            assert!(!should_show_chart(&response));
        }
    }

    #[test]
    fn test_short_and_long_series_are_rejected() {
        for len in [0, 12, 14] {
            let mut raw = full_raw();
            raw.solar_minimum_line = Some(vec![1.0; len]);
            let response = response_with(Some(raw));

            assert_eq!(
                validate_chart(&response),
                Err(ChartOmission::WrongLength { series: ChartSeriesKind::SolarMinimum, len })
            );
            assert!(!should_show_chart(&response));
        }
    }

    #[test]
    fn test_first_problem_wins() {
        let raw = RawChartData {
            monthly_production_kwh: Some(vec![1.0; 12]),
            three_month_average_line: None,
            ..full_raw()
        };
        let response = response_with(Some(raw));

        assert_eq!(
            validate_chart(&response),
            Err(ChartOmission::WrongLength { series: ChartSeriesKind::MonthlyProduction, len: 12 })
        );
    }

    #[test]
    fn test_omission_messages() {
        assert_eq!(ChartOmission::MissingChart.to_string(), "response has no chart data");
        assert_eq!(
            ChartOmission::WrongLength { series: ChartSeriesKind::RegulatoryFactor, len: 14 }.to_string(),
            "chart series linha_fator_aneel has 14 points, expected 13"
        );
    }
}
