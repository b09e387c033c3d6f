use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Reference month sent to the detection service.
///
/// The service only understands the Portuguese three-letter codes, so those
/// are used both on the wire and as the `Display`/`FromStr` representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Month {
    #[serde(rename = "JAN")]
    Jan,
    #[serde(rename = "FEV")]
    Fev,
    #[serde(rename = "MAR")]
    Mar,
    #[serde(rename = "ABR")]
    Abr,
    #[serde(rename = "MAI")]
    Mai,
    #[serde(rename = "JUN")]
    Jun,
    #[serde(rename = "JUL")]
    Jul,
    #[serde(rename = "AGO")]
    Ago,
    #[serde(rename = "SET")]
    Set,
    #[serde(rename = "OUT")]
    Out,
    #[serde(rename = "NOV")]
    Nov,
    #[serde(rename = "DEZ")]
    Dez,
}

impl Month {
    /// All months in calendar order, as offered by the month selector.
    pub const ALL: [Month; 12] = [
        Month::Jan,
        Month::Fev,
        Month::Mar,
        Month::Abr,
        Month::Mai,
        Month::Jun,
        Month::Jul,
        Month::Ago,
        Month::Set,
        Month::Out,
        Month::Nov,
        Month::Dez,
    ];

    /// Wire code understood by the detection service.
    pub fn code(self) -> &'static str {
        match self {
            Month::Jan => "JAN",
            Month::Fev => "FEV",
            Month::Mar => "MAR",
            Month::Abr => "ABR",
            Month::Mai => "MAI",
            Month::Jun => "JUN",
            Month::Jul => "JUL",
            Month::Ago => "AGO",
            Month::Set => "SET",
            Month::Out => "OUT",
            Month::Nov => "NOV",
            Month::Dez => "DEZ",
        }
    }

    /// Calendar number, 1 for January.
    pub fn number(self) -> u32 {
        Month::ALL
            .iter()
            .position(|m| *m == self)
            .map(|idx| idx as u32 + 1)
            .unwrap_or(1)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Returned when a string is not one of the twelve month codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMonth(pub String);

impl fmt::Display for UnknownMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown month code: {}", self.0)
    }
}

impl std::error::Error for UnknownMonth {}

impl FromStr for Month {
    type Err = UnknownMonth;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_uppercase();
        Month::ALL
            .into_iter()
            .find(|m| m.code() == code)
            .ok_or(UnknownMonth(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip_through_from_str() {
        for month in Month::ALL {
            assert_eq!(month.code().parse::<Month>(), Ok(month));
        }
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!("jul".parse::<Month>(), Ok(Month::Jul));
        assert_eq!(" dez ".parse::<Month>(), Ok(Month::Dez));
    }

    #[test]
    fn test_from_str_rejects_english_codes() {
        let err = "FEB".parse::<Month>().unwrap_err();
        assert_eq!(err, UnknownMonth("FEB".to_string()));
        assert_eq!(err.to_string(), "unknown month code: FEB");
    }

    #[test]
    fn test_month_numbers() {
        assert_eq!(Month::Jan.number(), 1);
        assert_eq!(Month::Jul.number(), 7);
        assert_eq!(Month::Dez.number(), 12);
    }

    #[test]
    fn test_serializes_as_code() {
        assert_eq!(serde_json::to_string(&Month::Set).unwrap(), "\"SET\"");
        let month: Month = serde_json::from_str("\"ABR\"").unwrap();
        assert_eq!(month, Month::Abr);
    }
}
