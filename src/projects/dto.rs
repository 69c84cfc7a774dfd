use serde::{Deserialize, Serialize};

use crate::projects::repo_types::Project;

/// Request body for creating or updating a project. Ownership always comes
/// from the session; there is no client-supplied owner field.
#[derive(Debug, Deserialize)]
pub struct ProjectRequest {
    pub name: String,
    pub description: String,
    pub github_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProjectResponse {
    pub project: Project,
}

#[derive(Debug, Serialize)]
pub struct ProjectListResponse {
    pub projects: Vec<Project>,
}
