//! Project detail modal.

use crate::catalog::{Catalog, Project};

/// Which project, if any, the modal shows.
///
/// An open modal locks page scrolling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalState {
    project_id: Option<String>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open on `id`, resolved through the catalog's fallback.
    pub fn open<'a>(&mut self, id: &str, catalog: &'a Catalog) -> &'a Project {
        let project = catalog.lookup(id);
        tracing::info!(requested = id, shown = %project.id, "Opening project modal");
        self.project_id = Some(project.id.clone());
        project
    }

    /// Returns true if the modal was open.
    pub fn close(&mut self) -> bool {
        self.project_id.take().is_some()
    }

    pub fn is_open(&self) -> bool {
        self.project_id.is_some()
    }

    /// Project currently shown.
    pub fn project<'a>(&self, catalog: &'a Catalog) -> Option<&'a Project> {
        self.project_id.as_deref().map(|id| catalog.lookup(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_resolves_unknown_to_default() {
        let catalog = Catalog::builtin().unwrap();
        let mut modal = ModalState::new();

        let project = modal.open("project99", &catalog);
        assert_eq!(project.id, "project1");
        assert_eq!(modal.project(&catalog).unwrap().id, "project1");
    }

    #[test]
    fn test_close() {
        let catalog = Catalog::builtin().unwrap();
        let mut modal = ModalState::new();
        assert!(!modal.close());

        modal.open("project3", &catalog);
        assert!(modal.is_open());
        assert!(modal.close());
        assert!(!modal.is_open());
        assert!(modal.project(&catalog).is_none());
    }
}
