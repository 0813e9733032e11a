use projects::{Hours, Menu, NewProject, Project, ProjectDb, ProjectService};

/// Creates a ProjectDb backed by a SQLite file in a fresh temp directory.
/// Returns both the database and the temp directory (which must be kept alive).
pub async fn create_test_db() -> (ProjectDb, tempfile::TempDir) {
    let dir = tempfile::TempDir::new().expect("Failed to create temp directory");
    let db = ProjectDb::connect(&database_url(&dir))
        .await
        .expect("Failed to create test database");
    (db, dir)
}

/// SQLite URL for the test database inside `dir`.
pub fn database_url(dir: &tempfile::TempDir) -> String {
    format!("sqlite://{}", dir.path().join("projects.db").display())
}

pub fn hours(value: &str) -> Hours {
    value.parse().expect("valid test hours")
}

/// Creates a NewProject with test data
pub fn make_new_project(name: &str) -> NewProject {
    NewProject {
        project_name: name.to_string(),
        estimated_hours: Some(hours("5.00")),
        actual_hours: Some(hours("0.00")),
        difficulty: Some(3),
        notes: None,
    }
}

/// Drives a menu session over `script` (one line per prompt answer).
/// Returns everything written to the terminal and the active project at exit.
pub async fn run_script(db: &ProjectDb, script: impl AsRef<[u8]>) -> (String, Option<Project>) {
    let mut menu = Menu::new(ProjectService::new(db.clone()), script.as_ref(), Vec::new());
    menu.run().await.expect("menu session failed");
    let current = menu.current_project().cloned();
    let output = String::from_utf8(menu.into_output()).expect("menu output is utf-8");
    (output, current)
}
