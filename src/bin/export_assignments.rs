use hi_canvas::client::CanvasClient;
use hi_canvas::error::Error;
use hi_canvas::startup;
use std::env;
use std::fs;
use tracing::info;

fn main() -> miette::Result<()> {
    startup::init_logging()?;

    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| String::from("assignments.json"));
    let config = startup::load_config()?;
    let client = CanvasClient::new(config)?;

    let grouped = client.assignments_by_group()?;
    let json = serde_json::to_string_pretty(&grouped).map_err(Error::from)?;
    fs::write(&path, json).map_err(Error::from)?;

    info!("Assignments saved to {}", path);
    Ok(())
}
