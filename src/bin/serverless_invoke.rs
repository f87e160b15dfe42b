//! Serverless entry point.
//!
//! Reads one API-gateway style event (`{"httpMethod", "path", "body"}`) from
//! stdin, runs it through the HTTP router and writes the response envelope
//! (`{"statusCode", "headers", "body"}`) to stdout. Logs go to stderr.

use std::io::Read;

use douyin_scribe::infrastructure::observability::{TracingConfig, init_tracing};
use douyin_scribe::presentation::serverless::{
    GatewayEvent, GatewayEventAdapter, ServerlessInvoker,
};
use douyin_scribe::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    init_tracing(&TracingConfig {
        log_to_stderr: true,
        ..TracingConfig::default()
    })?;

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment)?;
    let state = AppState::from_settings(&settings)?;

    let mut raw_event = String::new();
    std::io::stdin().read_to_string(&mut raw_event)?;
    let event: GatewayEvent = serde_json::from_str(&raw_event)?;

    let invoker = ServerlessInvoker::new(create_router(state), GatewayEventAdapter);
    let response = invoker.invoke(event).await;

    println!("{}", serde_json::to_string(&response)?);
    Ok(())
}
