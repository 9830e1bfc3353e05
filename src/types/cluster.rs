use serde::{Deserialize, Serialize};

pub const UNNAMED_CLUSTER: &str = "Unnamed Cluster";
pub const UNKNOWN: &str = "Unknown";

/// A cluster deployment belonging to one project.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(from = "ClusterPayload")]
pub struct Cluster {
    pub id: String,
    pub name: String,
    /// Lifecycle state as reported by Atlas (IDLE, CREATING, ...), shown verbatim.
    pub state_name: String,
    pub mongo_version: String,
    pub provider: String,
    pub region: String,
    pub instance_size: String,
    pub backup_enabled: bool,
    pub created: String,
    pub cluster_type: String,
    pub connection_string: Option<String>,
    pub encryption_at_rest: String,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct ClusterPayload {
    id: Option<String>,
    name: Option<String>,
    state_name: Option<String>,
    #[serde(rename = "mongoDBVersion")]
    mongo_db_version: Option<String>,
    provider_settings: Option<ProviderSettings>,
    backup_enabled: Option<bool>,
    create_date: Option<String>,
    cluster_type: Option<String>,
    connection_strings: Option<ConnectionStrings>,
    encryption_at_rest_provider: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct ProviderSettings {
    provider_name: Option<String>,
    region_name: Option<String>,
    instance_size_name: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct ConnectionStrings {
    standard: Option<String>,
    standard_srv: Option<String>,
}

fn or_default(value: Option<String>, default: &str) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

impl From<ClusterPayload> for Cluster {
    fn from(payload: ClusterPayload) -> Self {
        let settings = payload.provider_settings.unwrap_or_default();
        let connection_string = payload.connection_strings.and_then(|cs| {
            cs.standard_srv
                .filter(|s| !s.is_empty())
                .or(cs.standard.filter(|s| !s.is_empty()))
        });

        Self {
            id: payload.id.unwrap_or_default(),
            name: or_default(payload.name, UNNAMED_CLUSTER),
            state_name: or_default(payload.state_name, UNKNOWN),
            mongo_version: or_default(payload.mongo_db_version, UNKNOWN),
            provider: or_default(settings.provider_name, UNKNOWN),
            region: or_default(settings.region_name, UNKNOWN),
            instance_size: or_default(settings.instance_size_name, UNKNOWN),
            backup_enabled: payload.backup_enabled.unwrap_or(false),
            created: payload.create_date.unwrap_or_default(),
            cluster_type: or_default(payload.cluster_type, UNKNOWN),
            connection_string,
            encryption_at_rest: or_default(payload.encryption_at_rest_provider, "NONE"),
        }
    }
}
