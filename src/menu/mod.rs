//! Interactive menu session.
//!
//! A [`Menu`] owns the prompt I/O and the active project. Every iteration
//! prints the available operations, reads a selection and runs it; errors are
//! reported and the loop carries on. A blank selection ends the session.

mod input;

use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::{info, warn};

use crate::{
    core::{
        db::{Maybe, NewProject, Project, ProjectRepository},
        service::ProjectService,
    },
    error::{Error, Result},
};

use input::Prompter;

const OPERATIONS: [&str; 5] = [
    "1) Add a project",
    "2) List projects",
    "3) Select a project",
    "4) Update project details",
    "5) Delete a project",
];

enum Flow {
    Continue,
    Exit,
}

pub struct Menu<R, I, O> {
    service: ProjectService<R>,
    io: Prompter<I, O>,
    current: Option<Project>,
}

impl<R, I, O> Menu<R, I, O>
where
    R: ProjectRepository,
    I: AsyncBufRead + Unpin,
    O: AsyncWrite + Unpin,
{
    pub fn new(service: ProjectService<R>, input: I, output: O) -> Self {
        Self {
            service,
            io: Prompter::new(input, output),
            current: None,
        }
    }

    /// The project selected with "Select a project", if any.
    pub fn current_project(&self) -> Option<&Project> {
        self.current.as_ref()
    }

    pub fn into_output(self) -> O {
        self.io.into_output()
    }

    /// Run until the user exits or input ends. Only I/O failures on the
    /// terminal itself are returned.
    pub async fn run(&mut self) -> Result<()> {
        info!("menu session started");
        loop {
            match self.process_user_selection().await {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(Error::InputClosed) => {
                    info!("input closed");
                    break;
                }
                Err(Error::Io(e)) => return Err(Error::Io(e)),
                Err(e) => {
                    warn!(error = %e, "menu operation failed");
                    self.io.println(&format!("\nError: {e} Try again.")).await?;
                }
            }
        }
        info!("menu session ended");
        Ok(())
    }

    async fn process_user_selection(&mut self) -> Result<Flow> {
        self.print_operations().await?;
        let selection: Option<i32> = self.io.int_input("Enter a menu selection").await?;

        match selection {
            None => {
                self.io.println("\nExiting the menu. Goodbye.").await?;
                return Ok(Flow::Exit);
            }
            Some(1) => self.create_project().await?,
            Some(2) => self.list_projects().await?,
            Some(3) => self.select_project().await?,
            Some(4) => self.update_project_details().await?,
            Some(5) => self.delete_project().await?,
            Some(other) => {
                self.io
                    .println(&format!("\n{other} is not valid. Try again."))
                    .await?
            }
        }
        Ok(Flow::Continue)
    }

    async fn print_operations(&mut self) -> Result<()> {
        self.io
            .println("\nAvailable Selection. Press Enter to quit.")
            .await?;
        for line in OPERATIONS {
            self.io.println(&format!("   {line}")).await?;
        }
        let banner = match &self.current {
            None => "\nYou are not working with a project.".to_string(),
            Some(project) => format!("\nYou are working with project: {project}"),
        };
        self.io.println(&banner).await
    }

    async fn create_project(&mut self) -> Result<()> {
        let project_name = self.io.string_input("Enter the project name").await?;
        let estimated_hours = self.io.decimal_input("Enter the estimated hours").await?;
        let actual_hours = self.io.decimal_input("Enter the actual hours").await?;
        let difficulty = self
            .io
            .int_input("Enter the project difficulty (1-5)")
            .await?;
        let notes = self.io.string_input("Enter the project notes").await?;

        let project = NewProject {
            project_name: project_name.ok_or(Error::MissingField("project name"))?,
            estimated_hours,
            actual_hours,
            difficulty,
            notes,
        };

        let db_project = self.service.add_project(&project).await?;
        self.io
            .println(&format!(
                "You have successfully created project: {db_project}"
            ))
            .await
    }

    async fn list_projects(&mut self) -> Result<()> {
        let projects = self.service.fetch_all_projects().await?;

        self.io.println("\nProjects:").await?;
        for project in &projects {
            self.io
                .println(&format!(
                    "   {}: {}",
                    project.project_id, project.project_name
                ))
                .await?;
        }
        Ok(())
    }

    async fn select_project(&mut self) -> Result<()> {
        self.list_projects().await?;
        let project_id = self
            .io
            .int_input("Enter a project ID to select a project")
            .await?;

        // Selecting always deselects first, so a failed lookup leaves nothing active.
        self.current = None;
        let project_id = project_id.ok_or(Error::MissingField("project ID"))?;
        self.current = Some(self.service.fetch_project_by_id(project_id).await?);
        Ok(())
    }

    async fn update_project_details(&mut self) -> Result<()> {
        let current = self.current.clone().ok_or(Error::NoProjectSelected)?;

        let project_name = self
            .io
            .string_input(&format!(
                "Enter the project name [{}]",
                current.project_name
            ))
            .await?;
        let estimated_hours = self
            .io
            .decimal_input(&format!(
                "Enter the estimated hours [{}]",
                Maybe(&current.estimated_hours)
            ))
            .await?;
        let actual_hours = self
            .io
            .decimal_input(&format!(
                "Enter the actual hours [{}]",
                Maybe(&current.actual_hours)
            ))
            .await?;
        let difficulty = self
            .io
            .int_input(&format!(
                "Enter the project difficulty (1-5) [{}]",
                Maybe(&current.difficulty)
            ))
            .await?;
        let notes = self
            .io
            .string_input(&format!(
                "Enter the project notes [{}]",
                Maybe(&current.notes)
            ))
            .await?;

        let project = Project {
            project_id: current.project_id,
            project_name: project_name.unwrap_or(current.project_name),
            estimated_hours: estimated_hours.or(current.estimated_hours),
            actual_hours: actual_hours.or(current.actual_hours),
            difficulty: difficulty.or(current.difficulty),
            notes: notes.or(current.notes),
        };

        self.service.modify_project_details(&project).await?;
        self.current = Some(self.service.fetch_project_by_id(project.project_id).await?);
        Ok(())
    }

    async fn delete_project(&mut self) -> Result<()> {
        self.list_projects().await?;
        let project_id = self
            .io
            .int_input("Enter the ID of the project to delete")
            .await?
            .ok_or(Error::MissingField("project ID"))?;

        self.service.delete_project(project_id).await?;
        self.io
            .println(&format!("Project {project_id} was deleted successfully."))
            .await?;

        if self
            .current
            .as_ref()
            .is_some_and(|project| project.project_id == project_id)
        {
            self.current = None;
        }
        Ok(())
    }
}
