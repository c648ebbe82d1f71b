//! `tripdesk call` — Invoke a tool with a single string input.

use tripdesk_config::AppConfig;
use tripdesk_core::error::ToolError;
use tripdesk_core::tool::ToolCall;

pub async fn run(
    config: &AppConfig,
    tool: &str,
    input: &str,
    json: bool,
) -> tripdesk_core::Result<()> {
    let registry = tripdesk_tools::registry_from_config(config);

    let call = ToolCall {
        id: "cli".into(),
        name: tool.to_string(),
        arguments: serde_json::Value::String(input.to_string()),
    };

    tracing::debug!(tool, input, "Invoking tool from CLI");
    let result = registry.execute(&call).await.map_err(|e| match e {
        ToolError::NotFound(name) => {
            ToolError::NotFound(format!("{name} (available: {})", registry.names().join(", ")))
        }
        other => other,
    })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", result.output);
    }

    Ok(())
}
