//! `tripdesk tools` — List the registered tools.

use tripdesk_config::AppConfig;

pub async fn run(config: &AppConfig) -> tripdesk_core::Result<()> {
    let registry = tripdesk_tools::registry_from_config(config);

    println!("Registered tools ({}):", registry.len());
    for def in registry.definitions() {
        println!("  {:<18} {}", def.name, def.description);
    }

    Ok(())
}
