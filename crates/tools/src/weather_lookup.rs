//! Weather lookup tool — canned forecasts for a handful of cities.
//!
//! There is no weather API behind this. A location matches a city when its
//! lowercased text contains one of the city's aliases (English or Chinese);
//! the first city in table order wins.

use async_trait::async_trait;
use chrono::NaiveDate;
use chrono::format::{Item, StrftimeItems};
use tripdesk_core::error::ToolError;
use tripdesk_core::tool::{Tool, ToolResult, string_argument};

const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// A city with a fixed forecast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct City {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub conditions: &'static str,
    pub low_c: i32,
    pub high_c: i32,
    pub precipitation_pct: u8,
}

/// Match order. Aliases are already lowercase.
pub const CITIES: [City; 4] = [
    City {
        name: "Tokyo",
        aliases: &["tokyo", "东京"],
        conditions: "Sunny",
        low_c: 18,
        high_c: 26,
        precipitation_pct: 10,
    },
    City {
        name: "Beijing",
        aliases: &["beijing", "北京"],
        conditions: "Clear",
        low_c: 12,
        high_c: 24,
        precipitation_pct: 5,
    },
    City {
        name: "Shanghai",
        aliases: &["shanghai", "上海"],
        conditions: "Cloudy with showers",
        low_c: 17,
        high_c: 23,
        precipitation_pct: 60,
    },
    City {
        name: "Osaka",
        aliases: &["osaka", "大阪"],
        conditions: "Partly cloudy",
        low_c: 16,
        high_c: 25,
        precipitation_pct: 20,
    },
];

/// Order used when listing supported cities in the fallback message.
const SUPPORTED_LISTING: [&str; 4] = ["Beijing", "Shanghai", "Tokyo", "Osaka"];

/// Find the first city whose alias appears in `location`.
pub fn find_city(location: &str) -> Option<&'static City> {
    let normalized = location.to_lowercase();
    CITIES
        .iter()
        .find(|city| city.aliases.iter().any(|alias| normalized.contains(alias)))
}

/// Forecast for `location` dated today (local time).
pub fn lookup_weather(location: &str) -> String {
    let today = chrono::Local::now().date_naive();
    lookup_weather_on(location, today, DEFAULT_DATE_FORMAT)
}

/// Forecast for `location` on a given date.
///
/// An invalid `date_format` falls back to ISO dates rather than failing.
pub fn lookup_weather_on(location: &str, date: NaiveDate, date_format: &str) -> String {
    match find_city(location) {
        Some(city) => format!(
            "{} weather for {}: {}, {}°C to {}°C, {}% chance of precipitation.",
            format_date(date, date_format),
            location,
            city.conditions,
            city.low_c,
            city.high_c,
            city.precipitation_pct,
        ),
        None => format!(
            "No weather data available for '{}'. Supported cities: {}.",
            location,
            SUPPORTED_LISTING.join(", "),
        ),
    }
}

fn format_date(date: NaiveDate, date_format: &str) -> String {
    let items: Vec<Item<'_>> = StrftimeItems::new(date_format).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        tracing::warn!(date_format, "Invalid date format, using ISO dates");
        return date.format(DEFAULT_DATE_FORMAT).to_string();
    }
    date.format_with_items(items.iter()).to_string()
}

pub struct WeatherLookupTool {
    date_format: String,
}

impl WeatherLookupTool {
    pub fn new(date_format: impl Into<String>) -> Self {
        Self {
            date_format: date_format.into(),
        }
    }
}

impl Default for WeatherLookupTool {
    fn default() -> Self {
        Self::new(DEFAULT_DATE_FORMAT)
    }
}

#[async_trait]
impl Tool for WeatherLookupTool {
    fn name(&self) -> &str {
        "weather_lookup"
    }

    fn description(&self) -> &str {
        "Get today's forecast for a city. Supports Beijing, Shanghai, Tokyo and Osaka (English or Chinese names)."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "location": {
                    "type": "string",
                    "description": "The city name or location to look up weather for"
                }
            },
            "required": ["location"]
        })
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<ToolResult, ToolError> {
        let location = string_argument(&arguments, "location")?;
        let today = chrono::Local::now().date_naive();
        let output = lookup_weather_on(location, today, &self.date_format);
        let city = find_city(location).map(|c| c.name);

        Ok(ToolResult {
            call_id: String::new(),
            success: true,
            output,
            data: Some(serde_json::json!({
                "location": location,
                "city": city,
            })),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
    }

    #[test]
    fn every_alias_resolves_to_its_city() {
        for city in &CITIES {
            for alias in city.aliases {
                let out = lookup_weather_on(alias, date(), DEFAULT_DATE_FORMAT);
                assert!(out.contains(&format!("{}°C to {}°C", city.low_c, city.high_c)), "{out}");
            }
        }
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(find_city("TOKYO").map(|c| c.name), Some("Tokyo"));
        assert_eq!(find_city("sHaNgHaI").map(|c| c.name), Some("Shanghai"));
    }

    #[test]
    fn substring_of_longer_query_matches() {
        assert_eq!(find_city("Weather in Osaka tomorrow?").map(|c| c.name), Some("Osaka"));
        assert_eq!(find_city("北京市").map(|c| c.name), Some("Beijing"));
    }

    #[test]
    fn first_city_in_table_order_wins() {
        assert_eq!(find_city("beijing or tokyo").map(|c| c.name), Some("Tokyo"));
    }

    #[test]
    fn output_keeps_original_location_text() {
        let out = lookup_weather_on("TOKYO Station", date(), DEFAULT_DATE_FORMAT);
        assert_eq!(
            out,
            "2024-05-01 weather for TOKYO Station: Sunny, 18°C to 26°C, 10% chance of precipitation."
        );
    }

    #[test]
    fn unknown_location_lists_supported_cities() {
        let out = lookup_weather_on("Paris", date(), DEFAULT_DATE_FORMAT);
        assert_eq!(
            out,
            "No weather data available for 'Paris'. Supported cities: Beijing, Shanghai, Tokyo, Osaka."
        );
    }

    #[test]
    fn empty_location_falls_back() {
        let out = lookup_weather_on("", date(), DEFAULT_DATE_FORMAT);
        assert!(out.starts_with("No weather data available"));
    }

    #[test]
    fn custom_date_format() {
        let out = lookup_weather_on("Osaka", date(), "%d/%m/%Y");
        assert!(out.starts_with("01/05/2024 "));
    }

    #[test]
    fn invalid_date_format_falls_back_to_iso() {
        let out = lookup_weather_on("Osaka", date(), "%Q");
        assert!(out.starts_with("2024-05-01 "));
    }

    #[test]
    fn today_lookup_uses_iso_date() {
        let out = lookup_weather("上海");
        let date = out.split(' ').next().unwrap();
        assert!(NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok(), "{out}");
        assert!(out.ends_with("17°C to 23°C, 60% chance of precipitation."));
    }

    #[tokio::test]
    async fn tool_returns_forecast() {
        let tool = WeatherLookupTool::default();
        let result = tool
            .execute(serde_json::json!({"location": "东京"}))
            .await
            .unwrap();

        assert!(result.success);
        assert!(result.output.contains("东京"));
        assert!(result.output.contains("18°C to 26°C"));
        assert_eq!(result.data.unwrap()["city"], "Tokyo");
    }

    #[tokio::test]
    async fn tool_accepts_bare_string() {
        let tool = WeatherLookupTool::default();
        let result = tool.execute(serde_json::json!("Beijing")).await.unwrap();
        assert!(result.output.contains("12°C to 24°C"));
    }

    #[tokio::test]
    async fn tool_unknown_city_still_succeeds() {
        let tool = WeatherLookupTool::default();
        let result = tool
            .execute(serde_json::json!({"location": "Atlantis"}))
            .await
            .unwrap();
        assert!(result.success);
        assert!(result.data.unwrap()["city"].is_null());
    }

    #[tokio::test]
    async fn missing_location_returns_error() {
        let tool = WeatherLookupTool::default();
        let result = tool.execute(serde_json::json!({})).await;
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }

    #[test]
    fn tool_definition() {
        let tool = WeatherLookupTool::default();
        let def = tool.to_definition();
        assert_eq!(def.name, "weather_lookup");
        assert_eq!(def.parameters["required"][0], "location");
    }
}
