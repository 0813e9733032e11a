use std::{fmt, future::Future};

use crate::{core::db::model::Hours, error::Result};

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Project {
    pub project_id: i64,
    pub project_name: String,
    pub estimated_hours: Option<Hours>,
    pub actual_hours: Option<Hours>,
    pub difficulty: Option<i32>,
    pub notes: Option<String>,
}

/// A project that has not been stored yet; the store assigns the ID.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewProject {
    pub project_name: String,
    pub estimated_hours: Option<Hours>,
    pub actual_hours: Option<Hours>,
    pub difficulty: Option<i32>,
    pub notes: Option<String>,
}

impl NewProject {
    pub fn with_id(self, project_id: i64) -> Project {
        Project {
            project_id,
            project_name: self.project_name,
            estimated_hours: self.estimated_hours,
            actual_hours: self.actual_hours,
            difficulty: self.difficulty,
            notes: self.notes,
        }
    }
}

/// Renders an optional value, empty when absent.
pub(crate) struct Maybe<'a, T>(pub &'a Option<T>);

impl<T: fmt::Display> fmt::Display for Maybe<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => value.fmt(f),
            None => Ok(()),
        }
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID={}, name={}, estimated hours={}, actual hours={}, difficulty={}, notes={}",
            self.project_id,
            self.project_name,
            Maybe(&self.estimated_hours),
            Maybe(&self.actual_hours),
            Maybe(&self.difficulty),
            Maybe(&self.notes),
        )
    }
}

/// Data access for the `project` table. Each call runs as its own transaction.
pub trait ProjectRepository {
    fn insert_project(&self, project: &NewProject) -> impl Future<Output = Result<Project>>;
    /// All projects ordered by name.
    fn fetch_all_projects(&self) -> impl Future<Output = Result<Vec<Project>>>;
    /// `Ok(None)` when no row has this ID.
    fn fetch_project_by_id(&self, project_id: i64) -> impl Future<Output = Result<Option<Project>>>;
    /// Overwrites every mutable column. Fails with `NotFound` if no row matched.
    fn modify_project_details(&self, project: &Project) -> impl Future<Output = Result<()>>;
    /// Fails with `NotFound` if no row matched.
    fn delete_project(&self, project_id: i64) -> impl Future<Output = Result<()>>;
}
