//! Interactive application loop

use std::io;

use crossterm::event::{Event, EventStream, KeyEvent, KeyEventKind};
use futures_util::StreamExt;
use ratatui::Frame;
use tokio::sync::mpsc;

use crate::action::{Action, Command};
use crate::client::AtlasClient;
use crate::error::Result;
use crate::session::{Screen, Session};
use crate::tui::{self, Tui};
use crate::views::{ClusterListView, Component, ProjectListView};

pub struct App {
    session: Session,
    /// Shared by every screen, closed on exit
    client: AtlasClient,
    projects_view: ProjectListView,
    /// Created when a project's clusters are opened
    clusters_view: Option<ClusterListView>,
    should_quit: bool,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
}

impl App {
    pub fn new(session: Session, client: AtlasClient) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        Self {
            session,
            client,
            projects_view: ProjectListView::new(),
            clusters_view: None,
            should_quit: false,
            action_tx,
            action_rx,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        tui::install_panic_hook();
        let mut terminal = tui::init()?;

        let result = self.main_loop(&mut terminal).await;
        self.finish(result, tui::restore())
    }

    /// Close the client whatever happened, then report the loop's error
    /// ahead of a failed terminal restore.
    fn finish(&mut self, result: Result<()>, restored: io::Result<()>) -> Result<()> {
        self.client.close();
        result?;
        restored?;
        Ok(())
    }

    async fn main_loop(&mut self, terminal: &mut Tui) -> Result<()> {
        let mut events = EventStream::new();

        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;

            tokio::select! {
                maybe_event = events.next() => match maybe_event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        if let Some(action) = self.handle_key(key) {
                            self.dispatch(action);
                        }
                    }
                    // resize and other events only need a redraw
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => break,
                },
                Some(action) = self.action_rx.recv() => {
                    self.dispatch(action);
                }
            }
        }

        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        match (self.session.screen(), &mut self.clusters_view) {
            (Screen::ClusterList(_), Some(view)) => view.handle_key_event(key, &self.session),
            _ => self.projects_view.handle_key_event(key, &self.session),
        }
    }

    fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();
        match (self.session.screen(), &mut self.clusters_view) {
            (Screen::ClusterList(_), Some(view)) => view.draw(frame, area, &self.session),
            _ => self.projects_view.draw(frame, area, &self.session),
        }
    }

    /// Feed one action through the session and carry out what it asks for.
    fn dispatch(&mut self, action: Action) {
        if let Some(command) = self.session.update(action) {
            self.execute(command);
        }
        self.sync_views();
    }

    fn sync_views(&mut self) {
        match self.session.screen() {
            Screen::ClusterList(project) => {
                let stale = self
                    .clusters_view
                    .as_ref()
                    .map_or(true, |view| view.project_id() != project.id);
                if stale {
                    self.clusters_view = Some(ClusterListView::new(project.id.clone()));
                }
            }
            Screen::ProjectList => self.clusters_view = None,
        }
    }

    fn execute(&mut self, command: Command) {
        let client = self.client.clone();
        let tx = self.action_tx.clone();

        match command {
            Command::Exit => {
                tracing::info!("Quit requested");
                self.should_quit = true;
            }
            Command::ListProjects(request) => {
                tracing::info!("Listing projects ({})", request);
                tokio::spawn(async move {
                    let result = client.list_projects().await;
                    let _ = tx.send(Action::ProjectsLoaded { request, result });
                });
            }
            Command::ListClusters {
                request,
                project_id,
            } => {
                tracing::info!("Listing clusters of {} ({})", project_id, request);
                tokio::spawn(async move {
                    let result = client.list_clusters(&project_id).await;
                    let _ = tx.send(Action::ClustersLoaded {
                        request,
                        project_id,
                        result,
                    });
                });
            }
            Command::DeleteProject {
                request,
                project_id,
                project_name,
            } => {
                tracing::info!("Deleting project {} ({})", project_id, request);
                tokio::spawn(async move {
                    let result = client.delete_project(&project_id).await;
                    let _ = tx.send(Action::ProjectDeleted {
                        request,
                        project_id,
                        project_name,
                        result,
                    });
                });
            }
        }
    }
}
