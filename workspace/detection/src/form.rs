use common::{DetectionRequest, Month};

/// The five editable inputs of the detection form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Injection,
    InstalledPower,
    Latitude,
    Longitude,
    Month,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Injection,
        FormField::InstalledPower,
        FormField::Latitude,
        FormField::Longitude,
        FormField::Month,
    ];

    /// Name of the field in the request body.
    pub fn wire_name(self) -> &'static str {
        match self {
            FormField::Injection => "injecao",
            FormField::InstalledPower => "potencia_instalada",
            FormField::Latitude => "latitude",
            FormField::Longitude => "longitude",
            FormField::Month => "mes",
        }
    }

    /// Whether the input takes decimals; the others are whole numbers.
    pub fn is_decimal(self) -> bool {
        matches!(self, FormField::Latitude | FormField::Longitude)
    }
}

/// Raw contents of the form, exactly as typed.
///
/// Values stay strings until a request is built, so editing never fails and
/// whatever the user typed is what gets parsed on submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    injection: String,
    installed_power: String,
    latitude: String,
    longitude: String,
    month: String,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            injection: "3000".to_string(),
            installed_power: "6".to_string(),
            latitude: "39.7392".to_string(),
            longitude: "-104.9903".to_string(),
            month: Month::Jul.code().to_string(),
        }
    }
}

impl FormState {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Injection => &self.injection,
            FormField::InstalledPower => &self.installed_power,
            FormField::Latitude => &self.latitude,
            FormField::Longitude => &self.longitude,
            FormField::Month => &self.month,
        }
    }

    /// Replaces the raw value of one field.
    pub fn update_field(&mut self, field: FormField, raw: impl Into<String>) {
        let slot = match field {
            FormField::Injection => &mut self.injection,
            FormField::InstalledPower => &mut self.installed_power,
            FormField::Latitude => &mut self.latitude,
            FormField::Longitude => &mut self.longitude,
            FormField::Month => &mut self.month,
        };
        *slot = raw.into();
    }

    /// Builds the request body from the current raw values.
    ///
    /// Unparseable numbers become NaN and the month code is forwarded as is;
    /// rejecting them is the service's job.
    pub fn to_request(&self) -> DetectionRequest {
        DetectionRequest {
            injection: parse_float(&self.injection),
            installed_power: parse_float(&self.installed_power),
            latitude: parse_float(&self.latitude),
            longitude: parse_float(&self.longitude),
            month: self.month.clone(),
        }
    }
}

/// Lenient float parsing in the manner of a browser's `parseFloat`.
///
/// Leading whitespace (including a byte order mark) is skipped and the
/// longest numeric prefix is used, so `"12kWh"` reads as 12. Input without a
/// numeric prefix yields NaN.
pub fn parse_float(raw: &str) -> f64 {
    let s = raw.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}');
    let bytes = s.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    if s[end..].starts_with("Infinity") {
        return if bytes[0] == b'-' { f64::NEG_INFINITY } else { f64::INFINITY };
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        end = frac_end;
    }
    if digits == 0 {
        return f64::NAN;
    }

    // exponent only counts when it has digits
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(parse_float("3000"), 3000.0);
        assert_eq!(parse_float("-104.9903"), -104.9903);
        assert_eq!(parse_float("+6"), 6.0);
        assert_eq!(parse_float(".5"), 0.5);
        assert_eq!(parse_float("5."), 5.0);
        assert_eq!(parse_float("  42  "), 42.0);
    }

    #[test]
    fn test_parse_skips_byte_order_mark() {
        assert_eq!(parse_float("\u{FEFF}5"), 5.0);
        assert_eq!(parse_float("\u{FEFF} \t-2.5"), -2.5);
        assert!(parse_float("\u{FEFF}").is_nan());
    }

    #[test]
    fn test_parse_exponent() {
        assert_eq!(parse_float("1e3"), 1000.0);
        assert_eq!(parse_float("2.5E-1"), 0.25);
        // dangling exponent is ignored
        assert_eq!(parse_float("7e"), 7.0);
        assert_eq!(parse_float("7e+"), 7.0);
    }

    #[test]
    fn test_parse_numeric_prefix() {
        assert_eq!(parse_float("12kWh"), 12.0);
        assert_eq!(parse_float("3.25.15"), 3.25);
        assert_eq!(parse_float("1,5"), 1.0);
    }

    #[test]
    fn test_parse_infinity() {
        assert_eq!(parse_float("Infinity"), f64::INFINITY);
        assert_eq!(parse_float("-Infinityx"), f64::NEG_INFINITY);
    }

    #[test]
    fn test_parse_invalid_is_nan() {
        for raw in ["", "   ", "abc", ".", "-", "+.", "e5", "inf", "NaN"] {
            assert!(parse_float(raw).is_nan(), "{raw:?} should parse to NaN");
        }
    }

    #[test]
    fn test_only_coordinates_take_decimals() {
        let decimal: Vec<FormField> = FormField::ALL.into_iter().filter(|f| f.is_decimal()).collect();
        assert_eq!(decimal, vec![FormField::Latitude, FormField::Longitude]);
    }

    #[test]
    fn test_defaults_build_request() {
        let request = FormState::default().to_request();

        assert_eq!(request.injection, 3000.0);
        assert_eq!(request.installed_power, 6.0);
        assert_eq!(request.latitude, 39.7392);
        assert_eq!(request.longitude, -104.9903);
        assert_eq!(request.month, "JUL");
    }

    #[test]
    fn test_edits_flow_into_request() {
        let mut form = FormState::default();
        form.update_field(FormField::Injection, "1250.5");
        form.update_field(FormField::InstalledPower, "8");
        form.update_field(FormField::Latitude, "-23.55");
        form.update_field(FormField::Longitude, "-46.63");
        form.update_field(FormField::Month, "DEZ");

        let request = form.to_request();
        assert_eq!(request.injection, 1250.5);
        assert_eq!(request.installed_power, 8.0);
        assert_eq!(request.latitude, -23.55);
        assert_eq!(request.longitude, -46.63);
        assert_eq!(request.month, "DEZ");
    }

    #[test]
    fn test_invalid_values_are_forwarded() {
        let mut form = FormState::default();
        form.update_field(FormField::Latitude, "north");
        form.update_field(FormField::Month, "XYZ");

        let request = form.to_request();
        assert!(request.latitude.is_nan());
        assert_eq!(request.month, "XYZ");
        assert_eq!(form.get(FormField::Latitude), "north");
    }

    #[test]
    fn test_update_only_touches_one_field() {
        let mut form = FormState::default();
        form.update_field(FormField::Longitude, "10");

        let defaults = FormState::default();
        for field in FormField::ALL {
            if field == FormField::Longitude {
                assert_eq!(form.get(field), "10");
            } else {
                assert_eq!(form.get(field), defaults.get(field));
            }
        }
    }
}
