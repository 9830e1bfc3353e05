//! Navigation and session state
//!
//! `Session` owns everything the screens show: which screen is active,
//! the loaded projects and clusters, the selected project row and the
//! status line. It is only ever changed through [`Session::update`], which
//! returns the API work to perform as a [`Command`]. Completed requests come
//! back as actions tagged with the [`RequestId`] they were issued under, and
//! anything no longer relevant to the current state is dropped.

use std::fmt;

use crate::action::{Action, Command};
use crate::config::Credentials;
use crate::error::ApiError;
use crate::output::pluralize;
use crate::types::{Cluster, Project};

/// Identifies one issued API request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    ProjectList,
    ClusterList(Project),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Neutral,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub message: String,
    pub severity: Severity,
}

impl Status {
    pub fn neutral(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Neutral,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Error,
        }
    }
}

pub struct Session {
    screen: Screen,
    projects: Vec<Project>,
    clusters: Vec<Cluster>,
    selected: Option<usize>,
    status: Status,
    next_request: u64,
    /// Latest project-list request still in flight
    projects_request: Option<RequestId>,
    /// Latest cluster-list request still in flight
    clusters_request: Option<RequestId>,
    deletes_in_flight: usize,
    /// Project-list outcome that arrived while clusters were on screen,
    /// shown once the user goes back
    parked_status: Option<Status>,
}

impl Session {
    pub fn new(credentials: &Credentials) -> Self {
        let missing = credentials.missing();
        let status = if missing.is_empty() {
            Status::success("Credentials loaded from environment variables")
        } else {
            Status::error(format!(
                "Missing environment variables: {}. Check your environment or config file",
                missing.join(", ")
            ))
        };

        Self {
            screen: Screen::ProjectList,
            projects: Vec::new(),
            clusters: Vec::new(),
            selected: None,
            status,
            next_request: 0,
            projects_request: None,
            clusters_request: None,
            deletes_in_flight: 0,
            parked_status: None,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_project(&self) -> Option<&Project> {
        self.selected.and_then(|i| self.projects.get(i))
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Whether any issued request is still outstanding.
    pub fn is_loading(&self) -> bool {
        self.projects_request.is_some()
            || self.clusters_request.is_some()
            || self.deletes_in_flight > 0
    }

    /// Apply one action and return the work it requires, if any.
    pub fn update(&mut self, action: Action) -> Option<Command> {
        match action {
            Action::Authenticate => self.load_projects(),
            Action::Refresh => match &self.screen {
                Screen::ProjectList => self.load_projects(),
                Screen::ClusterList(project) => {
                    let project_id = project.id.clone();
                    self.status = Status::neutral("Loading clusters...");
                    Some(self.request_clusters(project_id))
                }
            },
            Action::MoveSelection(delta) => {
                self.move_selection(delta);
                None
            }
            Action::SelectRow(index) => {
                if self.screen != Screen::ProjectList {
                    return None;
                }
                if index < self.projects.len() {
                    self.selected = Some(index);
                }
                self.open_clusters(Some(index))
            }
            Action::OpenClusters => {
                if self.screen != Screen::ProjectList {
                    return None;
                }
                self.open_clusters(self.selected)
            }
            Action::Delete => self.delete_selected(),
            Action::Back => {
                if let Screen::ClusterList(project) = &self.screen {
                    tracing::info!("Leaving clusters of project {}", project.id);
                    self.screen = Screen::ProjectList;
                    self.clusters.clear();
                    self.clusters_request = None;
                    self.status = self.parked_status.take().unwrap_or_else(|| {
                        Status::neutral(format!(
                            "{} loaded",
                            pluralize(self.projects.len(), "project")
                        ))
                    });
                }
                None
            }
            Action::Quit => Some(Command::Exit),
            Action::ProjectsLoaded { request, result } => {
                self.apply_projects(request, result);
                None
            }
            Action::ClustersLoaded {
                request,
                project_id,
                result,
            } => {
                self.apply_clusters(request, &project_id, result);
                None
            }
            Action::ProjectDeleted {
                request,
                project_id,
                project_name,
                result,
            } => self.apply_delete(request, &project_id, &project_name, result),
        }
    }

    fn next_request_id(&mut self) -> RequestId {
        self.next_request += 1;
        RequestId(self.next_request)
    }

    fn fail(&mut self, err: ApiError) {
        self.status = Status::error(err.to_string());
    }

    /// Set the status for a project-list outcome without clobbering the
    /// cluster screen.
    fn report_projects(&mut self, status: Status) {
        match self.screen {
            Screen::ProjectList => self.status = status,
            Screen::ClusterList(_) => {
                tracing::debug!("Parking project status: {}", status.message);
                self.parked_status = Some(status);
            }
        }
    }

    fn load_projects(&mut self) -> Option<Command> {
        if self.screen != Screen::ProjectList {
            return None;
        }
        self.status = Status::neutral("Loading projects...");
        Some(self.request_projects())
    }

    fn request_projects(&mut self) -> Command {
        let request = self.next_request_id();
        self.projects_request = Some(request);
        Command::ListProjects(request)
    }

    fn request_clusters(&mut self, project_id: String) -> Command {
        let request = self.next_request_id();
        self.clusters_request = Some(request);
        Command::ListClusters {
            request,
            project_id,
        }
    }

    fn move_selection(&mut self, delta: isize) {
        if self.screen != Screen::ProjectList || self.projects.is_empty() {
            return;
        }
        let last = self.projects.len() - 1;
        let next = match self.selected {
            None => 0,
            Some(current) => current.saturating_add_signed(delta).min(last),
        };
        self.selected = Some(next);
    }

    fn open_clusters(&mut self, index: Option<usize>) -> Option<Command> {
        let Some(project) = index.and_then(|i| self.projects.get(i)).cloned() else {
            self.fail(ApiError::Validation(
                "Please select a project to view clusters".to_string(),
            ));
            return None;
        };
        if project.id.is_empty() {
            self.fail(ApiError::Validation(
                "Selected project has no ID and cannot be opened".to_string(),
            ));
            return None;
        }

        tracing::info!("Opening clusters for project {}", project.id);
        self.status = Status::neutral(format!("Loading clusters for: {}...", project.name));
        self.clusters.clear();
        let project_id = project.id.clone();
        self.screen = Screen::ClusterList(project);
        Some(self.request_clusters(project_id))
    }

    fn delete_selected(&mut self) -> Option<Command> {
        if self.screen != Screen::ProjectList {
            return None;
        }
        let Some(project) = self.selected_project().cloned() else {
            self.fail(ApiError::Validation(
                "Please select a project to delete".to_string(),
            ));
            return None;
        };
        if project.id.is_empty() {
            self.fail(ApiError::Validation(
                "Selected project has no ID and cannot be deleted".to_string(),
            ));
            return None;
        }

        self.status = Status::neutral(format!(
            "Deleting project: {} - {}",
            project.name, project.id
        ));
        self.deletes_in_flight += 1;
        let request = self.next_request_id();
        Some(Command::DeleteProject {
            request,
            project_id: project.id,
            project_name: project.name,
        })
    }

    fn apply_projects(&mut self, request: RequestId, result: Result<Vec<Project>, ApiError>) {
        if self.projects_request != Some(request) {
            tracing::debug!("Dropping stale project list response {}", request);
            return;
        }
        self.projects_request = None;

        match result {
            Ok(projects) => {
                self.report_projects(Status::success(format!(
                    "Successfully loaded {}",
                    pluralize(projects.len(), "project")
                )));
                self.projects = projects;
                self.selected = match (self.projects.len(), self.selected) {
                    (0, _) => None,
                    (len, Some(i)) => Some(i.min(len - 1)),
                    (_, None) => Some(0),
                };
            }
            Err(err) => {
                tracing::warn!("Loading projects failed: {}", err);
                self.report_projects(Status::error(format!("Error: {err}")));
            }
        }
    }

    fn apply_clusters(
        &mut self,
        request: RequestId,
        project_id: &str,
        result: Result<Vec<Cluster>, ApiError>,
    ) {
        let current = matches!(&self.screen, Screen::ClusterList(p) if p.id == project_id)
            && self.clusters_request == Some(request);
        if !current {
            tracing::debug!(
                "Dropping stale cluster list response {} for project {}",
                request,
                project_id
            );
            return;
        }
        self.clusters_request = None;

        match result {
            Ok(clusters) => {
                self.status = Status::success(format!(
                    "Successfully loaded {}",
                    pluralize(clusters.len(), "cluster")
                ));
                self.clusters = clusters;
            }
            Err(err) => {
                tracing::warn!("Loading clusters of {} failed: {}", project_id, err);
                self.status = Status::error(format!("Error loading clusters: {err}"));
            }
        }
    }

    fn apply_delete(
        &mut self,
        request: RequestId,
        project_id: &str,
        project_name: &str,
        result: Result<(), ApiError>,
    ) -> Option<Command> {
        self.deletes_in_flight = self.deletes_in_flight.saturating_sub(1);

        match result {
            Ok(()) => {
                tracing::info!("Deleted project {} ({})", project_id, request);
                self.report_projects(Status::success(format!(
                    "Project deleted: {project_name} - {project_id}"
                )));
                Some(self.request_projects())
            }
            Err(err) => {
                tracing::warn!("Deleting project {} failed: {}", project_id, err);
                self.report_projects(Status::error(format!("Error deleting project: {err}")));
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> Credentials {
        Credentials {
            public_key: "pub".to_string(),
            private_key: "priv".to_string(),
            org_id: "org".to_string(),
        }
    }

    fn project(id: &str, name: &str) -> Project {
        serde_json::from_value(serde_json::json!({ "id": id, "name": name })).unwrap()
    }

    fn cluster(name: &str) -> Cluster {
        serde_json::from_value(serde_json::json!({ "name": name })).unwrap()
    }

    fn request_of(command: Option<Command>) -> RequestId {
        match command {
            Some(Command::ListProjects(request)) => request,
            Some(Command::ListClusters { request, .. }) => request,
            Some(Command::DeleteProject { request, .. }) => request,
            other => panic!("expected an API command, got {other:?}"),
        }
    }

    /// Session with `names` loaded as projects p1, p2, ...
    fn loaded(names: &[&str]) -> Session {
        let mut session = Session::new(&credentials());
        let request = request_of(session.update(Action::Authenticate));
        let projects = names
            .iter()
            .enumerate()
            .map(|(i, name)| project(&format!("p{}", i + 1), name))
            .collect();
        session.update(Action::ProjectsLoaded {
            request,
            result: Ok(projects),
        });
        session
    }

    #[test]
    fn test_startup_status_reports_missing_credentials() {
        let session = Session::new(&Credentials::default());

        assert_eq!(session.status().severity, Severity::Error);
        assert!(session.status().message.starts_with("Missing environment variables"));
        assert!(session.status().message.contains("ATLAS_ORG_ID"));
        assert_eq!(session.screen(), &Screen::ProjectList);
    }

    #[test]
    fn test_startup_status_with_credentials() {
        let session = Session::new(&credentials());

        assert_eq!(session.status().severity, Severity::Success);
        assert!(session.projects().is_empty());
        assert_eq!(session.selected(), None);
    }

    #[test]
    fn test_authenticate_loads_projects() {
        let mut session = Session::new(&credentials());

        let command = session.update(Action::Authenticate);
        assert!(matches!(command, Some(Command::ListProjects(_))));
        assert!(session.is_loading());

        session.update(Action::ProjectsLoaded {
            request: request_of(command),
            result: Ok(vec![project("p1", "Demo"), project("p2", "Other")]),
        });

        assert!(!session.is_loading());
        assert_eq!(session.projects().len(), 2);
        assert_eq!(session.projects()[0].name, "Demo");
        assert_eq!(session.selected(), Some(0));
        assert_eq!(
            session.status(),
            &Status::success("Successfully loaded 2 projects")
        );
    }

    #[test]
    fn test_single_project_status_is_singular() {
        let session = loaded(&["Demo"]);

        assert_eq!(session.status().message, "Successfully loaded 1 project");
    }

    #[test]
    fn test_failed_load_keeps_previous_projects() {
        let mut session = loaded(&["Demo"]);

        let request = request_of(session.update(Action::Authenticate));
        session.update(Action::ProjectsLoaded {
            request,
            result: Err(ApiError::Transport("request timed out".to_string())),
        });

        assert_eq!(session.status().severity, Severity::Error);
        assert_eq!(
            session.status().message,
            "Error: API request failed: request timed out"
        );
        assert_eq!(session.projects().len(), 1);
        assert_eq!(session.screen(), &Screen::ProjectList);
    }

    #[test]
    fn test_timeout_on_first_load_leaves_projects_empty() {
        let mut session = Session::new(&credentials());

        let request = request_of(session.update(Action::Authenticate));
        session.update(Action::ProjectsLoaded {
            request,
            result: Err(ApiError::Transport("request timed out".to_string())),
        });

        assert_eq!(session.status().severity, Severity::Error);
        assert!(session.projects().is_empty());
    }

    #[test]
    fn test_older_project_response_is_dropped() {
        let mut session = Session::new(&credentials());

        let first = request_of(session.update(Action::Authenticate));
        let second = request_of(session.update(Action::Authenticate));

        session.update(Action::ProjectsLoaded {
            request: second,
            result: Ok(vec![project("p2", "New")]),
        });
        session.update(Action::ProjectsLoaded {
            request: first,
            result: Ok(vec![project("p1", "Old")]),
        });

        assert_eq!(session.projects().len(), 1);
        assert_eq!(session.projects()[0].name, "New");
    }

    #[test]
    fn test_select_row_opens_clusters() {
        let mut session = loaded(&["Demo", "Other"]);

        let command = session.update(Action::SelectRow(1));

        match command {
            Some(Command::ListClusters { project_id, .. }) => assert_eq!(project_id, "p2"),
            other => panic!("unexpected command: {other:?}"),
        }
        match session.screen() {
            Screen::ClusterList(project) => {
                assert_eq!(project.id, session.projects()[1].id);
            }
            other => panic!("unexpected screen: {other:?}"),
        }
        assert_eq!(session.selected(), Some(1));
    }

    #[test]
    fn test_open_clusters_without_selection_stays() {
        let mut session = Session::new(&credentials());

        let command = session.update(Action::OpenClusters);

        assert_eq!(command, None);
        assert_eq!(session.screen(), &Screen::ProjectList);
        assert_eq!(session.status().severity, Severity::Error);
        assert_eq!(
            session.status().message,
            "Please select a project to view clusters"
        );
    }

    #[test]
    fn test_select_row_out_of_bounds_stays() {
        let mut session = loaded(&["Demo"]);

        let command = session.update(Action::SelectRow(5));

        assert_eq!(command, None);
        assert_eq!(session.screen(), &Screen::ProjectList);
        assert_eq!(session.selected(), Some(0));
        assert_eq!(session.status().severity, Severity::Error);
    }

    #[test]
    fn test_project_without_id_is_not_opened() {
        let mut session = Session::new(&credentials());
        let request = request_of(session.update(Action::Authenticate));
        session.update(Action::ProjectsLoaded {
            request,
            result: Ok(vec![serde_json::from_value(serde_json::json!({})).unwrap()]),
        });

        assert_eq!(session.update(Action::OpenClusters), None);
        assert_eq!(session.update(Action::Delete), None);
        assert_eq!(session.screen(), &Screen::ProjectList);
        assert_eq!(session.status().severity, Severity::Error);
    }

    #[test]
    fn test_clusters_loaded_on_entry() {
        let mut session = loaded(&["Demo"]);
        let request = request_of(session.update(Action::OpenClusters));

        session.update(Action::ClustersLoaded {
            request,
            project_id: "p1".to_string(),
            result: Ok(vec![cluster("Cluster0"), cluster("Cluster1"), cluster("Cluster2")]),
        });

        assert_eq!(session.clusters().len(), 3);
        assert_eq!(session.clusters()[0].name, "Cluster0");
        assert_eq!(
            session.status(),
            &Status::success("Successfully loaded 3 clusters")
        );
    }

    #[test]
    fn test_cluster_failure_stays_on_cluster_list() {
        let mut session = loaded(&["Demo"]);
        let request = request_of(session.update(Action::OpenClusters));

        session.update(Action::ClustersLoaded {
            request,
            project_id: "p1".to_string(),
            result: Err(ApiError::RequestFailed {
                status: 401,
                detail: "You are not authorized for this resource.".to_string(),
            }),
        });

        assert!(matches!(session.screen(), Screen::ClusterList(_)));
        assert!(session.clusters().is_empty());
        assert_eq!(session.status().severity, Severity::Error);
        assert!(session.status().message.starts_with("Error loading clusters:"));
    }

    #[test]
    fn test_back_discards_clusters() {
        let mut session = loaded(&["Demo"]);
        let request = request_of(session.update(Action::OpenClusters));
        session.update(Action::ClustersLoaded {
            request,
            project_id: "p1".to_string(),
            result: Ok(vec![cluster("Cluster0")]),
        });

        assert_eq!(session.update(Action::Back), None);

        assert_eq!(session.screen(), &Screen::ProjectList);
        assert!(session.clusters().is_empty());
        assert_eq!(session.projects().len(), 1);
    }

    #[test]
    fn test_late_cluster_response_after_back_is_ignored() {
        let mut session = loaded(&["Demo", "Other"]);
        let projects_before = session.projects().to_vec();
        let request = request_of(session.update(Action::OpenClusters));

        session.update(Action::Back);
        session.update(Action::ClustersLoaded {
            request,
            project_id: "p1".to_string(),
            result: Ok(vec![cluster("Cluster0")]),
        });

        assert_eq!(session.screen(), &Screen::ProjectList);
        assert!(session.clusters().is_empty());
        assert_eq!(session.projects(), projects_before.as_slice());
    }

    #[test]
    fn test_cluster_response_for_previous_project_is_ignored() {
        let mut session = loaded(&["Demo", "Other"]);
        let first = request_of(session.update(Action::SelectRow(0)));
        session.update(Action::Back);
        let second = request_of(session.update(Action::SelectRow(1)));

        session.update(Action::ClustersLoaded {
            request: first,
            project_id: "p1".to_string(),
            result: Ok(vec![cluster("FromDemo")]),
        });
        assert!(session.clusters().is_empty());

        session.update(Action::ClustersLoaded {
            request: second,
            project_id: "p2".to_string(),
            result: Ok(vec![cluster("FromOther")]),
        });
        assert_eq!(session.clusters().len(), 1);
        assert_eq!(session.clusters()[0].name, "FromOther");
    }

    #[test]
    fn test_delete_success_reloads_once() {
        let mut session = loaded(&["Demo", "Other"]);

        let command = session.update(Action::Delete);
        let (request, project_id, project_name) = match command {
            Some(Command::DeleteProject {
                request,
                project_id,
                project_name,
            }) => (request, project_id, project_name),
            other => panic!("unexpected command: {other:?}"),
        };
        assert_eq!(project_id, "p1");
        assert!(session.is_loading());

        let follow_up = session.update(Action::ProjectDeleted {
            request,
            project_id,
            project_name,
            result: Ok(()),
        });

        assert!(matches!(follow_up, Some(Command::ListProjects(_))));
        assert_eq!(
            session.status(),
            &Status::success("Project deleted: Demo - p1")
        );

        session.update(Action::ProjectsLoaded {
            request: request_of(follow_up),
            result: Ok(vec![project("p2", "Other")]),
        });
        assert_eq!(session.projects().len(), 1);
        assert_eq!(session.selected(), Some(0));
        assert!(!session.is_loading());
    }

    #[test]
    fn test_delete_finishing_on_cluster_screen_keeps_cluster_status() {
        let mut session = loaded(&["Demo", "Other"]);

        let delete = session.update(Action::Delete);
        let delete_request = request_of(delete);

        session.update(Action::MoveSelection(1));
        let clusters_request = request_of(session.update(Action::OpenClusters));
        session.update(Action::ClustersLoaded {
            request: clusters_request,
            project_id: "p2".to_string(),
            result: Ok(vec![cluster("Cluster0")]),
        });
        let cluster_status = Status::success("Successfully loaded 1 cluster");
        assert_eq!(session.status(), &cluster_status);

        let follow_up = session.update(Action::ProjectDeleted {
            request: delete_request,
            project_id: "p1".to_string(),
            project_name: "Demo".to_string(),
            result: Ok(()),
        });
        assert!(matches!(follow_up, Some(Command::ListProjects(_))));
        assert_eq!(session.status(), &cluster_status);
        assert!(session.is_loading());

        session.update(Action::ProjectsLoaded {
            request: request_of(follow_up),
            result: Ok(vec![project("p2", "Other")]),
        });
        assert!(matches!(session.screen(), Screen::ClusterList(p) if p.id == "p2"));
        assert_eq!(session.status(), &cluster_status);
        assert_eq!(session.clusters().len(), 1);
        assert_eq!(session.projects().len(), 1);
        assert_eq!(session.selected(), Some(0));
        assert!(!session.is_loading());

        session.update(Action::Back);
        assert_eq!(
            session.status(),
            &Status::success("Successfully loaded 1 project")
        );

        session.update(Action::OpenClusters);
        session.update(Action::Back);
        assert_eq!(session.status(), &Status::neutral("1 project loaded"));
    }

    #[test]
    fn test_delete_failure_leaves_list_untouched() {
        let mut session = loaded(&["Demo"]);
        let request = request_of(session.update(Action::Delete));

        let follow_up = session.update(Action::ProjectDeleted {
            request,
            project_id: "p1".to_string(),
            project_name: "Demo".to_string(),
            result: Err(ApiError::RequestFailed {
                status: 409,
                detail: "Cannot delete project with active clusters".to_string(),
            }),
        });

        assert_eq!(follow_up, None);
        assert_eq!(session.projects().len(), 1);
        assert_eq!(session.status().severity, Severity::Error);
        assert!(session
            .status()
            .message
            .contains("Cannot delete project with active clusters"));
    }

    #[test]
    fn test_delete_without_selection_is_rejected() {
        let mut session = Session::new(&credentials());

        assert_eq!(session.update(Action::Delete), None);
        assert_eq!(
            session.status(),
            &Status::error("Please select a project to delete")
        );
    }

    #[test]
    fn test_move_selection_is_clamped() {
        let mut session = loaded(&["A", "B", "C"]);

        session.update(Action::MoveSelection(1));
        assert_eq!(session.selected(), Some(1));
        session.update(Action::MoveSelection(10));
        assert_eq!(session.selected(), Some(2));
        session.update(Action::MoveSelection(-10));
        assert_eq!(session.selected(), Some(0));
    }

    #[test]
    fn test_selection_clamped_after_reload() {
        let mut session = loaded(&["A", "B", "C"]);
        session.update(Action::MoveSelection(2));

        let request = request_of(session.update(Action::Authenticate));
        session.update(Action::ProjectsLoaded {
            request,
            result: Ok(vec![project("p1", "A")]),
        });
        assert_eq!(session.selected(), Some(0));

        let request = request_of(session.update(Action::Authenticate));
        session.update(Action::ProjectsLoaded {
            request,
            result: Ok(Vec::new()),
        });
        assert_eq!(session.selected(), None);
    }

    #[test]
    fn test_refresh_on_cluster_list_refetches_clusters() {
        let mut session = loaded(&["Demo"]);
        let first = request_of(session.update(Action::OpenClusters));

        let command = session.update(Action::Refresh);
        let second = match command {
            Some(Command::ListClusters {
                request,
                project_id,
            }) => {
                assert_eq!(project_id, "p1");
                request
            }
            other => panic!("unexpected command: {other:?}"),
        };

        session.update(Action::ClustersLoaded {
            request: first,
            project_id: "p1".to_string(),
            result: Ok(vec![cluster("Old")]),
        });
        assert!(session.clusters().is_empty());

        session.update(Action::ClustersLoaded {
            request: second,
            project_id: "p1".to_string(),
            result: Ok(vec![cluster("New")]),
        });
        assert_eq!(session.clusters()[0].name, "New");
    }

    #[test]
    fn test_project_actions_ignored_on_cluster_list() {
        let mut session = loaded(&["Demo"]);
        session.update(Action::OpenClusters);

        assert_eq!(session.update(Action::Authenticate), None);
        assert_eq!(session.update(Action::Delete), None);
        assert_eq!(session.update(Action::OpenClusters), None);
        assert!(matches!(session.screen(), Screen::ClusterList(_)));
    }

    #[test]
    fn test_quit_exits_from_either_screen() {
        let mut session = loaded(&["Demo"]);
        assert_eq!(session.update(Action::Quit), Some(Command::Exit));

        session.update(Action::OpenClusters);
        assert_eq!(session.update(Action::Quit), Some(Command::Exit));
    }
}
