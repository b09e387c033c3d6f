use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Body of the POST sent to the detection service.
///
/// Numeric fields may hold NaN when the user typed something unparseable.
/// serde_json writes non-finite floats as `null`, which is what the service
/// has always received for such input, so NaN is never rejected here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DetectionRequest {
    /// Measured monthly injection into the grid (kWh)
    #[serde(rename = "injecao", deserialize_with = "nan_if_null")]
    pub injection: f64,
    /// Nameplate capacity of the generation unit
    #[serde(rename = "potencia_instalada", deserialize_with = "nan_if_null")]
    pub installed_power: f64,
    #[serde(deserialize_with = "nan_if_null")]
    pub latitude: f64,
    #[serde(deserialize_with = "nan_if_null")]
    pub longitude: f64,
    /// Raw month code, forwarded as typed (normally one of `Month::code`)
    #[serde(rename = "mes")]
    pub month: String,
}

fn nan_if_null<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}
