//! `tripdesk status` — Show effective configuration.

use tripdesk_config::AppConfig;

pub async fn run(config: &AppConfig) -> tripdesk_core::Result<()> {
    println!("tripdesk status");
    println!("===============");
    println!("  Config file:  {}", AppConfig::config_path().display());
    println!("  Log level:    {}", config.log_level);
    println!("  Tools:        {}", config.tools.enabled.join(", "));
    println!("  Date format:  {}", config.weather.date_format);
    println!("  Placeholder:  {}", config.budget.placeholder_label);

    if AppConfig::config_path().exists() {
        println!("\n  Config file found");
    } else {
        println!("\n  No config file, using defaults. Run `tripdesk onboard` to create one");
    }

    Ok(())
}
