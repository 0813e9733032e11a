pub mod core;
pub mod error;
pub mod menu;

pub use crate::core::db::{Hours, NewProject, Project, ProjectDb, ProjectRepository};
pub use crate::core::service::ProjectService;
pub use error::{Error, Result};
pub use menu::Menu;
