//! Static project catalog shown in the project modal.
//!
//! Parsed once from embedded JSON at startup and never mutated. Lookups never
//! fail: unknown ids resolve to the default project.

use serde::{Deserialize, Serialize};

use crate::error::{PortfolioError, PortfolioResult};

const BUILTIN_PROJECTS: &str = include_str!("../data/projects.json");

/// Id every unknown lookup falls back to
pub const DEFAULT_PROJECT_ID: &str = "project1";

/// One portfolio entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    /// Image URL
    pub image: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub features: Vec<String>,
    pub github_url: String,
    pub live_url: String,
}

/// Read-only id → project mapping, in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    projects: Vec<Project>,
    default_index: usize,
}

impl Catalog {
    /// The catalog compiled into the binary.
    pub fn builtin() -> PortfolioResult<Self> {
        Self::from_json(BUILTIN_PROJECTS)
    }

    /// Parse a JSON array of projects. Ids must be unique and the default
    /// project must be present.
    pub fn from_json(json: &str) -> PortfolioResult<Self> {
        let projects: Vec<Project> = serde_json::from_str(json)?;

        for (i, project) in projects.iter().enumerate() {
            if projects[..i].iter().any(|other| other.id == project.id) {
                return Err(PortfolioError::Catalog(format!(
                    "duplicate project id: {}",
                    project.id
                )));
            }
        }

        let default_index = projects
            .iter()
            .position(|project| project.id == DEFAULT_PROJECT_ID)
            .ok_or_else(|| {
                PortfolioError::Catalog(format!("missing default project {DEFAULT_PROJECT_ID}"))
            })?;

        tracing::debug!(count = projects.len(), "Loaded project catalog");
        Ok(Self {
            projects,
            default_index,
        })
    }

    /// Project for `id`, or the default project when `id` is unknown.
    pub fn lookup(&self, id: &str) -> &Project {
        self.get(id).unwrap_or_else(|| {
            tracing::debug!(id, "Unknown project id, using default");
            &self.projects[self.default_index]
        })
    }

    /// Exact lookup without fallback.
    pub fn get(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}
