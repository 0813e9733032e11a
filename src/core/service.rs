use crate::{
    core::db::{NewProject, Project, ProjectRepository},
    error::{Error, Result},
};

/// Thin layer between the menu and the repository. The only logic it adds is
/// turning a missing row into [`Error::NotFound`].
#[derive(Debug, Clone)]
pub struct ProjectService<R> {
    repo: R,
}

impl<R: ProjectRepository> ProjectService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub async fn add_project(&self, project: &NewProject) -> Result<Project> {
        self.repo.insert_project(project).await
    }

    pub async fn fetch_all_projects(&self) -> Result<Vec<Project>> {
        self.repo.fetch_all_projects().await
    }

    pub async fn fetch_project_by_id(&self, project_id: i64) -> Result<Project> {
        self.repo
            .fetch_project_by_id(project_id)
            .await?
            .ok_or(Error::NotFound(project_id))
    }

    pub async fn modify_project_details(&self, project: &Project) -> Result<()> {
        self.repo.modify_project_details(project).await
    }

    pub async fn delete_project(&self, project_id: i64) -> Result<()> {
        self.repo.delete_project(project_id).await
    }
}
