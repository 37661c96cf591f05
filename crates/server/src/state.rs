use std::sync::Arc;

use models::seed::SeedDocument;
use service::catalog::CatalogStore;
use service::forms::ServiceForm;
use service::session::SessionGate;
use tokio::sync::RwLock;

/// Everything the original page held as ambient globals: catalog,
/// session and the admin form cursor. Handlers take the write lock for
/// the whole mutate-then-render span, so each command is atomic with
/// respect to rendering, like the source's single-threaded event loop.
pub struct AppCore {
    pub catalog: CatalogStore,
    pub gate: SessionGate,
    pub form: ServiceForm,
}

#[derive(Clone)]
pub struct AppState {
    pub core: Arc<RwLock<AppCore>>,
}

impl AppState {
    pub fn from_seed(seed: SeedDocument) -> Self {
        let mut catalog = CatalogStore::new();
        catalog.replace_all(seed.services);
        let core = AppCore {
            catalog,
            gate: SessionGate::new(seed.users),
            form: ServiceForm::new(),
        };
        Self { core: Arc::new(RwLock::new(core)) }
    }
}
