mod cluster;
mod project;

pub use cluster::Cluster;
pub use project::Project;
