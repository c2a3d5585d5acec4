use hi_canvas::api::students::Student;
use hi_canvas::client::CanvasClient;
use hi_canvas::error::CanvasResult;
use hi_canvas::startup;
use std::env;
use std::fs;
use tracing::info;

fn main() -> miette::Result<()> {
    startup::init_logging()?;

    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| String::from("students.csv"));
    let config = startup::load_config()?;
    let client = CanvasClient::new(config)?;

    let students = client.list_students()?;
    write_roster(&path, &students)?;

    info!("Retrieved {} students, saved to {}", students.len(), path);
    Ok(())
}

/// Write the roster as a three-column CSV file
fn write_roster(path: &str, students: &[Student]) -> CanvasResult<()> {
    let mut out = String::from("id,name,login_id\n");
    for student in students {
        out.push_str(&format!(
            "{},\"{}\",{}\n",
            student.id,
            student.name.replace('"', "\"\""),
            student.login_id.as_deref().unwrap_or("")
        ));
    }
    fs::write(path, out)?;
    Ok(())
}
