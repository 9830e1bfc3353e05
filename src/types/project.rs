use serde::{Deserialize, Serialize};

pub const UNNAMED_PROJECT: &str = "Unnamed Project";

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Link {
    #[serde(default)]
    pub rel: String,
    #[serde(default)]
    pub href: String,
}

/// An Atlas project (a "group" in the v2 API).
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(from = "ProjectPayload")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub org_id: String,
    pub created: String,
    pub cluster_count: u64,
    pub links: Vec<Link>,
}

/// Wire shape of a project; every field may be absent or null.
#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct ProjectPayload {
    id: Option<String>,
    name: Option<String>,
    org_id: Option<String>,
    created: Option<String>,
    cluster_count: Option<u64>,
    links: Option<Vec<Link>>,
}

impl From<ProjectPayload> for Project {
    fn from(payload: ProjectPayload) -> Self {
        Self {
            id: payload.id.unwrap_or_default(),
            name: payload
                .name
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| UNNAMED_PROJECT.to_string()),
            org_id: payload.org_id.unwrap_or_default(),
            created: payload.created.unwrap_or_default(),
            cluster_count: payload.cluster_count.unwrap_or(0),
            links: payload.links.unwrap_or_default(),
        }
    }
}
