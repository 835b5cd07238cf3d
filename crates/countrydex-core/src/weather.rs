// crates/countrydex-core/src/weather.rs
use crate::error::{CountryDexError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Textual weather condition derived from a WMO weather code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeatherCondition {
    ClearSky,
    PartlyCloudy,
    Foggy,
    Rain,
    Snow,
    Thunderstorm,
    Variable,
}

impl WeatherCondition {
    /// Map a weather code by fixed thresholds; unknown codes are `Variable`.
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => WeatherCondition::ClearSky,
            1..=3 => WeatherCondition::PartlyCloudy,
            45..=48 => WeatherCondition::Foggy,
            51..=67 => WeatherCondition::Rain,
            71..=77 => WeatherCondition::Snow,
            c if c >= 95 => WeatherCondition::Thunderstorm,
            _ => WeatherCondition::Variable,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WeatherCondition::ClearSky => "Clear Sky",
            WeatherCondition::PartlyCloudy => "Partly Cloudy",
            WeatherCondition::Foggy => "Foggy",
            WeatherCondition::Rain => "Rain",
            WeatherCondition::Snow => "Snow",
            WeatherCondition::Thunderstorm => "Thunderstorm",
            WeatherCondition::Variable => "Variable",
        }
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Current conditions at a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub temperature: f64,
    pub temperature_unit: String,
    /// Percent.
    pub relative_humidity: f64,
    pub weather_code: i64,
    pub condition: WeatherCondition,
}

impl fmt::Display for WeatherReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}{}, humidity {}%",
            self.condition, self.temperature, self.temperature_unit, self.relative_humidity
        )
    }
}

/// Weather as shown in a detail view: either a report or the reason there is none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum WeatherStatus {
    Available { report: WeatherReport },
    Unavailable { reason: String },
}

impl WeatherStatus {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        WeatherStatus::Unavailable {
            reason: reason.into(),
        }
    }

    pub fn report(&self) -> Option<&WeatherReport> {
        match self {
            WeatherStatus::Available { report } => Some(report),
            WeatherStatus::Unavailable { .. } => None,
        }
    }
}

impl From<Result<WeatherReport>> for WeatherStatus {
    fn from(r: Result<WeatherReport>) -> Self {
        match r {
            Ok(report) => WeatherStatus::Available { report },
            Err(CountryDexError::WeatherUnavailable(reason)) => WeatherStatus::unavailable(reason),
            Err(e) => WeatherStatus::unavailable(e.to_string()),
        }
    }
}

// Open-Meteo `forecast?current=...` payload.
#[derive(Debug, Deserialize)]
struct ForecastRaw {
    current: Option<CurrentRaw>,
    current_units: Option<CurrentUnitsRaw>,
}

#[derive(Debug, Deserialize)]
struct CurrentRaw {
    temperature_2m: Option<f64>,
    relative_humidity_2m: Option<f64>,
    weather_code: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct CurrentUnitsRaw {
    temperature_2m: Option<String>,
}

/// Parse an Open-Meteo forecast response.
///
/// Anything that is not a complete `current` block is
/// [`CountryDexError::WeatherUnavailable`].
pub fn parse_weather(json: &str) -> Result<WeatherReport> {
    let raw: ForecastRaw = serde_json::from_str(json)
        .map_err(|e| CountryDexError::WeatherUnavailable(format!("malformed payload: {e}")))?;

    let current = raw
        .current
        .ok_or_else(|| CountryDexError::WeatherUnavailable("no weather data".into()))?;

    let missing = |field: &str| CountryDexError::WeatherUnavailable(format!("missing {field}"));
    let temperature = current.temperature_2m.ok_or_else(|| missing("temperature"))?;
    let relative_humidity = current
        .relative_humidity_2m
        .ok_or_else(|| missing("relative humidity"))?;
    let weather_code = current.weather_code.ok_or_else(|| missing("weather code"))?;
    let temperature_unit = raw
        .current_units
        .and_then(|u| u.temperature_2m)
        .unwrap_or_else(|| "°C".to_string());

    Ok(WeatherReport {
        temperature,
        temperature_unit,
        relative_humidity,
        weather_code,
        condition: WeatherCondition::from_code(weather_code),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_thresholds() {
        use WeatherCondition::*;
        let cases = [
            (0, ClearSky),
            (1, PartlyCloudy),
            (3, PartlyCloudy),
            (4, Variable),
            (44, Variable),
            (45, Foggy),
            (48, Foggy),
            (50, Variable),
            (51, Rain),
            (67, Rain),
            (70, Variable),
            (71, Snow),
            (77, Snow),
            (80, Variable),
            (94, Variable),
            (95, Thunderstorm),
            (99, Thunderstorm),
            (-1, Variable),
        ];
        for (code, expected) in cases {
            assert_eq!(WeatherCondition::from_code(code), expected, "code {code}");
        }
    }

    #[test]
    fn parses_current_block() {
        let json = r#"{
            "current_units": { "temperature_2m": "°C", "relative_humidity_2m": "%" },
            "current": { "temperature_2m": 12.4, "relative_humidity_2m": 81, "weather_code": 61 }
        }"#;
        let report = parse_weather(json).unwrap();
        assert_eq!(report.temperature, 12.4);
        assert_eq!(report.relative_humidity, 81.0);
        assert_eq!(report.condition, WeatherCondition::Rain);
        assert_eq!(report.to_string(), "Rain, 12.4°C, humidity 81%");
    }

    #[test]
    fn missing_current_is_unavailable() {
        let err = parse_weather(r#"{ "error": true, "reason": "bad latitude" }"#).unwrap_err();
        assert!(matches!(err, CountryDexError::WeatherUnavailable(_)));

        let err = parse_weather("not json").unwrap_err();
        assert!(matches!(err, CountryDexError::WeatherUnavailable(_)));
    }

    #[test]
    fn status_from_result() {
        let status: WeatherStatus =
            Err(CountryDexError::WeatherUnavailable("no coordinates".into())).into();
        assert_eq!(status, WeatherStatus::unavailable("no coordinates"));
        assert!(status.report().is_none());
    }
}
