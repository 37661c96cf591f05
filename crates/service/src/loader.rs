use std::path::Path;

use models::seed::SeedDocument;
use tracing::{info, warn};

/// One-shot startup read of the seed document.
///
/// Exactly one attempt per process lifetime: no retry, no caching, no
/// revalidation. Any failure (missing file, unreadable file, malformed
/// top-level JSON) degrades to an empty document with a warning, so the
/// application stays usable with an empty catalog.
pub async fn load_seed(path: impl AsRef<Path>) -> SeedDocument {
    let path = path.as_ref();
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "seed file unavailable, starting with empty catalog");
            return SeedDocument::default();
        }
    };
    match SeedDocument::from_json(&bytes) {
        Ok(doc) => {
            info!(
                path = %path.display(),
                services = doc.services.len(),
                users = doc.users.len(),
                "seed loaded"
            );
            doc
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "malformed seed document, starting with empty catalog");
            SeedDocument::default()
        }
    }
}
