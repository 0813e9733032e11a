mod model;
mod project;
mod state;

use std::sync::Arc;

use state::DbState;
use tracing::debug;

use crate::error::{Error, Result};

pub use model::Hours;
pub(crate) use project::Maybe;
pub use project::{NewProject, Project, ProjectRepository};

const PROJECT_COLUMNS: &str =
    "project_id, project_name, estimated_hours, actual_hours, difficulty, notes";

/// SQLite-backed [`ProjectRepository`]. Cloning shares the underlying pool.
#[derive(Debug, Clone)]
pub struct ProjectDb {
    state: Arc<DbState>,
}

impl ProjectDb {
    pub async fn connect(database_url: &str) -> Result<Self> {
        Ok(Self {
            state: Arc::new(DbState::connect(database_url).await?),
        })
    }

    /// Wait for pooled connections to close. Further queries will fail.
    pub async fn close(&self) {
        self.state.close().await;
    }
}

impl ProjectRepository for ProjectDb {
    async fn insert_project(&self, project: &NewProject) -> Result<Project> {
        let mut tx = self.state.begin().await?;
        let (project_id,): (i64,) = sqlx::query_as(
            r#"INSERT INTO project (project_name, estimated_hours, actual_hours, difficulty, notes)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING project_id"#,
        )
        .bind(&project.project_name)
        .bind(project.estimated_hours)
        .bind(project.actual_hours)
        .bind(project.difficulty)
        .bind(&project.notes)
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;
        debug!(project_id, "inserted project");
        Ok(project.clone().with_id(project_id))
    }

    async fn fetch_all_projects(&self) -> Result<Vec<Project>> {
        let mut tx = self.state.begin().await?;
        let projects = sqlx::query_as::<_, Project>(&format!(
            "SELECT {PROJECT_COLUMNS} FROM project ORDER BY project_name ASC"
        ))
        .fetch_all(&mut *tx)
        .await?;
        tx.commit().await?;
        debug!(count = projects.len(), "fetched all projects");
        Ok(projects)
    }

    async fn fetch_project_by_id(&self, project_id: i64) -> Result<Option<Project>> {
        let mut tx = self.state.begin().await?;
        let project = sqlx::query_as::<_, Project>(&format!(
            "SELECT {PROJECT_COLUMNS} FROM project WHERE project_id = $1"
        ))
        .bind(project_id)
        .fetch_optional(&mut *tx)
        .await?;
        tx.commit().await?;
        debug!(project_id, found = project.is_some(), "fetched project");
        Ok(project)
    }

    async fn modify_project_details(&self, project: &Project) -> Result<()> {
        let mut tx = self.state.begin().await?;
        let result = sqlx::query(
            r#"UPDATE project SET
                project_name = $1,
                estimated_hours = $2,
                actual_hours = $3,
                difficulty = $4,
                notes = $5
            WHERE project_id = $6"#,
        )
        .bind(&project.project_name)
        .bind(project.estimated_hours)
        .bind(project.actual_hours)
        .bind(project.difficulty)
        .bind(&project.notes)
        .bind(project.project_id)
        .execute(&mut *tx)
        .await?;
        if result.rows_affected() == 0 {
            return Err(Error::NotFound(project.project_id));
        }
        tx.commit().await?;
        debug!(project_id = project.project_id, "updated project");
        Ok(())
    }

    async fn delete_project(&self, project_id: i64) -> Result<()> {
        let mut tx = self.state.begin().await?;
        let result = sqlx::query("DELETE FROM project WHERE project_id = $1")
            .bind(project_id)
            .execute(&mut *tx)
            .await?;
        if result.rows_affected() == 0 {
            return Err(Error::NotFound(project_id));
        }
        tx.commit().await?;
        debug!(project_id, "deleted project");
        Ok(())
    }
}
