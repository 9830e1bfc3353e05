pub mod clusters;
pub mod delete;
pub mod init;
pub mod projects;
