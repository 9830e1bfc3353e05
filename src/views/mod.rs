//! Screens of the interactive client
//!
//! Views only read the [`Session`]; every change they want goes back out
//! as an [`Action`].

pub mod cluster_list;
pub mod project_list;
pub mod status;

pub use cluster_list::ClusterListView;
pub use project_list::ProjectListView;

use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

use crate::action::Action;
use crate::session::Session;

pub trait Component {
    /// Map a key press to an action, if it means anything on this screen
    fn handle_key_event(&mut self, key: KeyEvent, session: &Session) -> Option<Action>;

    fn draw(&mut self, frame: &mut Frame, area: Rect, session: &Session);
}
