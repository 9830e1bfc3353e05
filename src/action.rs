//! Actions for the session state machine
//!
//! User intents coming from the views and completions of API calls
//! coming back from spawned tasks share one enum, so the event loop can
//! apply them strictly one at a time.

use crate::error::ApiError;
use crate::session::RequestId;
use crate::types::{Cluster, Project};

#[derive(Debug, Clone)]
pub enum Action {
    // User intents
    Authenticate,
    Refresh,
    MoveSelection(isize),
    /// Select a project row and open its clusters
    SelectRow(usize),
    OpenClusters,
    Delete,
    Back,
    Quit,

    // Completions
    ProjectsLoaded {
        request: RequestId,
        result: Result<Vec<Project>, ApiError>,
    },
    ClustersLoaded {
        request: RequestId,
        project_id: String,
        result: Result<Vec<Cluster>, ApiError>,
    },
    ProjectDeleted {
        request: RequestId,
        project_id: String,
        project_name: String,
        result: Result<(), ApiError>,
    },
}

/// Work the session asks the runtime to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    ListProjects(RequestId),
    ListClusters {
        request: RequestId,
        project_id: String,
    },
    DeleteProject {
        request: RequestId,
        project_id: String,
        project_name: String,
    },
    Exit,
}
