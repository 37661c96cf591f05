use models::service::{Service, ServiceDraft};
use tracing::info;

use crate::errors::ServiceError;

/// In-memory catalog of service listings, kept in insertion order.
///
/// The store is the single source of truth for every view; it owns the
/// records outright and is synchronous. Exclusive access is the
/// caller's job (the HTTP adapter holds it behind one lock, tests own
/// it directly).
#[derive(Debug, Default)]
pub struct CatalogStore {
    services: Vec<Service>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bulk-load the catalog, replacing any previous contents.
    /// Duplicate ids keep the first occurrence.
    pub fn replace_all(&mut self, services: Vec<Service>) {
        self.services = services;
        let mut seen = std::collections::HashSet::new();
        self.services.retain(|s| seen.insert(s.id));
    }

    /// Ordered snapshot of the current listings.
    pub fn list(&self) -> &[Service] {
        &self.services
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    fn next_id(&self) -> u64 {
        self.services.iter().map(|s| s.id).max().unwrap_or(0) + 1
    }

    /// Validate the draft, assign `max(existing ids, 0) + 1` and append.
    /// The first listing in an empty catalog gets id 1.
    pub fn create(&mut self, draft: ServiceDraft) -> Result<Service, ServiceError> {
        draft.validate()?;
        let service = Service::from_draft(self.next_id(), draft);
        self.services.push(service.clone());
        info!(id = service.id, name = %service.name, "service_created");
        Ok(service)
    }

    /// Replace every field of the listing matching `id`, preserving the id.
    pub fn update(&mut self, id: u64, draft: ServiceDraft) -> Result<Service, ServiceError> {
        draft.validate()?;
        let slot = self
            .services
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| ServiceError::not_found("service"))?;
        *slot = Service::from_draft(id, draft);
        info!(id, "service_updated");
        Ok(slot.clone())
    }

    /// Remove the listing matching `id`. A second delete of the same id
    /// is `NotFound` and alters nothing.
    pub fn delete(&mut self, id: u64) -> Result<(), ServiceError> {
        let before = self.services.len();
        self.services.retain(|s| s.id != id);
        if self.services.len() == before {
            return Err(ServiceError::not_found("service"));
        }
        info!(id, "service_deleted");
        Ok(())
    }

    pub fn find_by_id(&self, id: u64) -> Option<&Service> {
        self.services.iter().find(|s| s.id == id)
    }

    /// First listing with an exactly matching name. Names are not
    /// unique; callers that need determinism should look up by id.
    pub fn find_by_name(&self, name: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.name == name)
    }
}
