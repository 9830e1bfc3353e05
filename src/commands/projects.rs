use tabled::Tabled;

use crate::client::AtlasClient;
use crate::error::Result;
use crate::output::{self, format_created};
use crate::types::Project;

#[derive(Tabled)]
struct ProjectRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Created")]
    created: String,
    #[tabled(rename = "Clusters")]
    cluster_count: u64,
}

impl From<&Project> for ProjectRow {
    fn from(project: &Project) -> Self {
        Self {
            name: project.name.clone(),
            id: project.id.clone(),
            created: format_created(&project.created),
            cluster_count: project.cluster_count,
        }
    }
}

pub async fn list(client: &AtlasClient) -> Result<()> {
    let projects = client.list_projects().await?;

    output::print_table(&projects, |p| ProjectRow::from(p));

    Ok(())
}
