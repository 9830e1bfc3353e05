use tabled::Tabled;

use crate::client::AtlasClient;
use crate::error::Result;
use crate::output::{self, state_colored};
use crate::types::Cluster;

#[derive(Tabled)]
struct ClusterRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Status")]
    state: String,
    #[tabled(rename = "Provider")]
    provider: String,
    #[tabled(rename = "Region")]
    region: String,
    #[tabled(rename = "Instance Size")]
    instance_size: String,
    #[tabled(rename = "MongoDB Version")]
    mongo_version: String,
}

impl From<&Cluster> for ClusterRow {
    fn from(cluster: &Cluster) -> Self {
        Self {
            name: cluster.name.clone(),
            state: state_colored(&cluster.state_name),
            provider: cluster.provider.clone(),
            region: cluster.region.clone(),
            instance_size: cluster.instance_size.clone(),
            mongo_version: cluster.mongo_version.clone(),
        }
    }
}

pub async fn list(client: &AtlasClient, project_id: &str) -> Result<()> {
    let clusters = client.list_clusters(project_id).await?;

    output::print_table(&clusters, |c| ClusterRow::from(c));

    Ok(())
}
