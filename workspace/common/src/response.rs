use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Detection result as returned by the service.
///
/// A missing flag reads as `false`. The chart block is optional and kept in
/// its raw shape; see [`crate::validate_chart`] before drawing it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
pub struct AnomalyResponse {
    /// Overall anomaly flag
    #[serde(default)]
    pub anomaly_detected: bool,
    /// Anomaly against the regulatory factor
    #[serde(default)]
    pub anomaly_detected_factor: bool,
    /// Anomaly against the estimated solar minimum
    #[serde(default)]
    pub solar_anomaly: bool,
    /// Chart block, only present when the service has history for the unit
    #[serde(rename = "grafico", default, skip_serializing_if = "Option::is_none")]
    pub chart: Option<RawChartData>,
}

/// Chart block exactly as received. Each sequence may be absent or have any
/// length.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
pub struct RawChartData {
    #[serde(rename = "producao_mensal_kwh", default, skip_serializing_if = "Option::is_none")]
    pub monthly_production_kwh: Option<Vec<f64>>,
    #[serde(rename = "linha_media_3_meses", default, skip_serializing_if = "Option::is_none")]
    pub three_month_average_line: Option<Vec<f64>>,
    #[serde(rename = "linha_fator_aneel", default, skip_serializing_if = "Option::is_none")]
    pub regulatory_factor_line: Option<Vec<f64>>,
    #[serde(rename = "linha_inc_solar", default, skip_serializing_if = "Option::is_none")]
    pub solar_minimum_line: Option<Vec<f64>>,
}
