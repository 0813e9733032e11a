mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from projects for tests
#[allow(unused_imports)]
pub use projects::{
    Error, Hours, Menu, NewProject, Project, ProjectDb, ProjectRepository, ProjectService,
};
