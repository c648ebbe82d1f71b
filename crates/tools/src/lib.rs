//! Built-in tool implementations for tripdesk.
//!
//! Two stateless tools an agent can call: a canned weather lookup and a
//! travel budget calculator. Both take one string and return one string.

pub mod budget_calculator;
pub mod weather_lookup;

use tripdesk_config::{AppConfig, BUDGET_CALCULATOR, WEATHER_LOOKUP};
use tripdesk_core::tool::ToolRegistry;

pub use budget_calculator::{BudgetCalculatorTool, calculate_budget};
pub use weather_lookup::{WeatherLookupTool, lookup_weather};

/// Create a tool registry with every built-in tool, default settings.
pub fn default_registry() -> ToolRegistry {
    registry_from_config(&AppConfig::default())
}

/// Create a registry holding the tools enabled in `config`.
///
/// Unknown names in `tools.enabled` are logged and skipped.
pub fn registry_from_config(config: &AppConfig) -> ToolRegistry {
    let mut registry = ToolRegistry::new();

    for name in &config.tools.enabled {
        match name.as_str() {
            WEATHER_LOOKUP => registry.register(Box::new(WeatherLookupTool::new(
                config.weather.date_format.clone(),
            ))),
            BUDGET_CALCULATOR => registry.register(Box::new(BudgetCalculatorTool::new(
                config.budget.placeholder_label.clone(),
            ))),
            other => tracing::warn!(tool = other, "Unknown tool in config, skipping"),
        }
    }

    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use tripdesk_config::ToolsConfig;

    #[test]
    fn default_registry_has_both_tools() {
        let registry = default_registry();
        assert_eq!(registry.names(), vec!["budget_calculator", "weather_lookup"]);
    }

    #[test]
    fn registry_respects_enabled_list() {
        let config = AppConfig {
            tools: ToolsConfig {
                enabled: vec!["weather_lookup".into(), "flight_search".into()],
            },
            ..AppConfig::default()
        };
        let registry = registry_from_config(&config);
        assert_eq!(registry.names(), vec!["weather_lookup"]);
    }

    #[test]
    fn registered_names_match_config_constants() {
        let registry = default_registry();
        assert!(registry.get(WEATHER_LOOKUP).is_some());
        assert!(registry.get(BUDGET_CALCULATOR).is_some());
    }
}
