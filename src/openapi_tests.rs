#[cfg(test)]
mod tests {
    use crate::schemas::ApiDoc;
    use utoipa::openapi::{schema::Schema, PathItemType, RefOr};
    use utoipa::OpenApi;

    fn object_properties(name: &str) -> Vec<String> {
        let openapi = ApiDoc::openapi();
        let components = openapi.components.expect("components should be generated");
        match components.schemas.get(name) {
            Some(RefOr::T(Schema::Object(obj))) => obj.properties.keys().cloned().collect(),
            _ => panic!("{} should be an object schema", name),
        }
    }

    #[test]
    fn test_openapi_schema_generation() {
        let openapi = ApiDoc::openapi();

        let components = openapi.components.as_ref().unwrap();
        for schema in ["ErrorResponse", "HealthResponse", "DetectionRequest", "AnomalyResponse", "RawChartData"] {
            assert!(components.schemas.contains_key(schema), "missing schema {}", schema);
        }

        let json_result = serde_json::to_string(&openapi);
        assert!(json_result.is_ok());
    }

    #[test]
    fn test_detection_request_uses_wire_names() {
        let properties = object_properties("DetectionRequest");
        for field in ["injecao", "potencia_instalada", "latitude", "longitude", "mes"] {
            assert!(properties.iter().any(|p| p == field), "missing property {}", field);
        }
    }

    #[test]
    fn test_anomaly_response_schema_structure() {
        let properties = object_properties("AnomalyResponse");
        for field in ["anomaly_detected", "anomaly_detected_factor", "solar_anomaly", "grafico"] {
            assert!(properties.iter().any(|p| p == field), "missing property {}", field);
        }
    }

    #[test]
    fn test_health_response_schema_structure() {
        let properties = object_properties("HealthResponse");
        for field in ["status", "version", "upstream"] {
            assert!(properties.iter().any(|p| p == field), "missing property {}", field);
        }
    }

    #[test]
    fn test_openapi_paths() {
        let openapi = ApiDoc::openapi();

        let health = openapi.paths.paths.get("/health").expect("/health should be documented");
        assert!(health.operations.contains_key(&PathItemType::Get));

        let detect = openapi
            .paths
            .paths
            .get("/api/v1/detect")
            .expect("/api/v1/detect should be documented");
        let post = detect
            .operations
            .get(&PathItemType::Post)
            .expect("detect should be a POST");
        assert!(post.responses.responses.contains_key("200"));
        assert!(post.responses.responses.contains_key("502"));
    }
}
