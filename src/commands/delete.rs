use std::io::{self, Write};

use crate::client::AtlasClient;
use crate::error::Result;
use crate::output;

pub async fn run(client: &AtlasClient, project_id: &str, yes: bool) -> Result<()> {
    if !yes && !confirm(project_id)? {
        output::print_message("Aborted.");
        return Ok(());
    }

    client.delete_project(project_id).await?;

    output::print_message(&format!("Project deleted: {project_id}"));

    Ok(())
}

fn confirm(project_id: &str) -> Result<bool> {
    print!("Delete project {project_id}? This cannot be undone. [y/N] ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(is_yes(&input))
}

fn is_yes(input: &str) -> bool {
    let answer = input.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}
