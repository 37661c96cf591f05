use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::service::Service;
use crate::user::User;

/// Startup document: `{ "services": [...], "users": [...] }`.
///
/// Decoding is lenient at the entry level: a malformed element is
/// skipped with a warning instead of poisoning the whole document, and
/// a missing collection defaults to empty. Duplicate service ids keep
/// the first occurrence so the uniqueness invariant holds from load.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SeedDocument {
    pub services: Vec<Service>,
    pub users: Vec<User>,
}

#[derive(Deserialize, Default)]
struct RawSeed {
    #[serde(default)]
    services: Vec<Value>,
    #[serde(default)]
    users: Vec<Value>,
}

impl SeedDocument {
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        let raw: RawSeed = serde_json::from_slice(bytes)?;
        let mut services = decode_entries::<Service>(raw.services, "services");
        dedupe_by_id(&mut services);
        let users = decode_entries::<User>(raw.users, "users");
        Ok(Self { services, users })
    }
}

fn decode_entries<T: serde::de::DeserializeOwned>(values: Vec<Value>, collection: &str) -> Vec<T> {
    values
        .into_iter()
        .enumerate()
        .filter_map(|(idx, value)| match serde_json::from_value::<T>(value) {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(collection, index = idx, error = %e, "skipping malformed seed entry");
                None
            }
        })
        .collect()
}

fn dedupe_by_id(services: &mut Vec<Service>) {
    let mut seen = std::collections::HashSet::new();
    services.retain(|s| {
        if seen.insert(s.id) {
            true
        } else {
            warn!(id = s.id, "dropping seed service with duplicate id");
            false
        }
    });
}
