//! Common transport-layer types shared by the CLI, the server and the wasm
//! frontend. These structs mirror the detection service's request and
//! response payloads so every surface deserializes the same shapes.

mod chart;
mod month;
mod request;
mod response;

pub use chart::{
    should_show_chart, validate_chart, ChartData, ChartOmission, ChartSeriesKind, CHART_LEN,
};
pub use month::{Month, UnknownMonth};
pub use request::DetectionRequest;
pub use response::{AnomalyResponse, RawChartData};

/// Endpoint of the hosted detection service used when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "https://be-anomalia.onrender.com/detect_anomaly/";
