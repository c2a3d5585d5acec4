use hi_canvas::api::groups::GroupAssignment;
use hi_canvas::client::CanvasClient;
use hi_canvas::error::{config_error, CanvasResult};
use hi_canvas::startup;
use std::env;
use std::fs;
use tracing::info;

fn main() -> miette::Result<()> {
    startup::init_logging()?;

    let mut args = env::args().skip(1);
    let path = args.next().unwrap_or_else(|| String::from("groups.csv"));
    let category = args.next().unwrap_or_else(|| String::from("Groups"));

    let config = startup::load_config()?;
    let client = CanvasClient::new(config)?;

    let plan = read_plan(&path, &category)?;
    info!("Applying {} group assignments from {}", plan.len(), path);
    client.assign_members(&category, &plan)?;

    info!("Groups synchronized successfully");
    Ok(())
}

/// Read `canvas id;group number;student name` rows into a membership plan
fn read_plan(path: &str, category: &str) -> CanvasResult<Vec<GroupAssignment>> {
    let raw = fs::read_to_string(path)?;
    let mut plan = Vec::new();

    for (line_no, line) in raw.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(';').collect();
        if fields.len() < 2 {
            return Err(config_error(&format!(
                "Malformed row {} in {}: {}",
                line_no + 1,
                path,
                line
            )));
        }

        let user_id = fields[0].trim().parse::<i64>().map_err(|_| {
            config_error(&format!(
                "Invalid Canvas id on row {}: {}",
                line_no + 1,
                fields[0]
            ))
        })?;
        let group_number = fields[1].trim().parse::<u32>().map_err(|_| {
            config_error(&format!(
                "Invalid group number on row {}: {}",
                line_no + 1,
                fields[1]
            ))
        })?;

        plan.push(GroupAssignment {
            user_id,
            group_name: format!("{}-{}", category, group_number),
        });
    }

    Ok(plan)
}
