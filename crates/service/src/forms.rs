use models::service::{Service, ServiceDraft};
use tracing::warn;

use crate::catalog::CatalogStore;
use crate::errors::ServiceError;

/// Fixed acknowledgement for the contact form; nothing is stored or sent.
pub const CONTACT_ACK: &str =
    "Message sent successfully. We will get in touch with you soon.";

/// Fixed acknowledgement for the quote form; nothing is stored or sent.
pub const QUOTE_ACK: &str =
    "Quote request sent successfully. We will contact you within 48 hours.";

/// Raw text fields exactly as submitted. Numeric fields are parsed by
/// `parse`; bad input surfaces as a validation error before any store
/// mutation.
#[derive(Clone, Debug, Default)]
pub struct ServiceFormInput {
    pub name: String,
    pub icon: String,
    pub description: String,
    pub price: String,
    pub stock: String,
    pub promotion: String,
}

impl ServiceFormInput {
    pub fn parse(self) -> Result<ServiceDraft, ServiceError> {
        let price = parse_quantity(&self.price, "price")?;
        let stock = parse_quantity(&self.stock, "stock")?;
        Ok(ServiceDraft {
            name: self.name.trim().to_string(),
            icon: self.icon.trim().to_string(),
            description: self.description.trim().to_string(),
            price,
            stock,
            promotion: self.promotion.trim().to_string(),
        })
    }
}

fn parse_quantity(raw: &str, field: &str) -> Result<u64, ServiceError> {
    raw.trim().parse::<u64>().map_err(|_| {
        ServiceError::Validation(format!("{} must be a non-negative integer, got {:?}", field, raw))
    })
}

/// Admin service form: one controller instance per session, tracking
/// whether a submit means create or update.
#[derive(Debug, Default)]
pub struct ServiceForm {
    editing: Option<u64>,
}

impl ServiceForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of the listing currently being edited; `None` is create mode.
    pub fn editing(&self) -> Option<u64> {
        self.editing
    }

    /// Enter edit mode for an existing listing and return its current
    /// values for form prefill.
    pub fn begin_edit(&mut self, catalog: &CatalogStore, id: u64) -> Result<Service, ServiceError> {
        let service = catalog
            .find_by_id(id)
            .cloned()
            .ok_or_else(|| ServiceError::not_found("service"))?;
        self.editing = Some(id);
        Ok(service)
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Called on logout: any in-progress edit is abandoned.
    pub fn reset(&mut self) {
        self.editing = None;
    }

    /// Parse then dispatch: update when the edit cursor is set, create
    /// otherwise. The cursor is cleared on every edit-mode submit, even
    /// when the target no longer exists, so a stale form cannot slip
    /// back in as a recreate.
    pub fn submit(
        &mut self,
        catalog: &mut CatalogStore,
        input: ServiceFormInput,
    ) -> Result<Service, ServiceError> {
        let draft = input.parse()?;
        match self.editing.take() {
            Some(id) => catalog.update(id, draft),
            None => catalog.create(draft),
        }
    }

    /// Delete only proceeds with an explicit confirmation; an
    /// unconfirmed request is a no-op returning `false`. A cursor
    /// pointing at the deleted listing is cleared.
    pub fn delete(
        &mut self,
        catalog: &mut CatalogStore,
        id: u64,
        confirmed: bool,
    ) -> Result<bool, ServiceError> {
        if !confirmed {
            return Ok(false);
        }
        match catalog.delete(id) {
            Ok(()) => {
                if self.editing == Some(id) {
                    self.editing = None;
                }
                Ok(true)
            }
            Err(e) => {
                warn!(id, error = %e, "delete requested for missing service");
                Err(e)
            }
        }
    }
}

/// Pick the listing a quote refers to: by id when given, otherwise the
/// first listing with the given name (source parity).
pub fn quote_selection<'a>(
    catalog: &'a CatalogStore,
    id: Option<u64>,
    name: Option<&str>,
) -> Option<&'a Service> {
    if let Some(id) = id {
        return catalog.find_by_id(id);
    }
    name.and_then(|n| catalog.find_by_name(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, price: &str, stock: &str) -> ServiceFormInput {
        ServiceFormInput {
            name: name.into(),
            icon: "🛠️".into(),
            description: "desc".into(),
            price: price.into(),
            stock: stock.into(),
            promotion: String::new(),
        }
    }

    fn seeded() -> CatalogStore {
        let mut store = CatalogStore::new();
        for n in ["alpha", "beta", "gamma"] {
            store
                .create(input(n, "100000", "6").parse().expect("draft"))
                .expect("create");
        }
        store
    }

    #[test]
    fn create_mode_appends_new_listing() {
        let mut store = CatalogStore::new();
        let mut form = ServiceForm::new();
        let created = form.submit(&mut store, input("new", "250000", "3")).expect("submit");
        assert_eq!(created.id, 1);
        assert_eq!(created.price, 250_000);
        assert_eq!(form.editing(), None);
    }

    #[test]
    fn non_numeric_price_is_surfaced_not_stored() {
        let mut store = CatalogStore::new();
        let mut form = ServiceForm::new();
        let err = form.submit(&mut store, input("x", "abc", "3")).unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert!(store.is_empty());
    }

    #[test]
    fn non_numeric_stock_is_surfaced_not_stored() {
        let mut store = CatalogStore::new();
        let mut form = ServiceForm::new();
        assert!(form.submit(&mut store, input("x", "100", "1.5")).is_err());
        assert!(form.submit(&mut store, input("x", "100", "-2")).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn edit_mode_updates_then_clears_cursor() {
        let mut store = seeded();
        let mut form = ServiceForm::new();
        let prefill = form.begin_edit(&store, 2).expect("begin");
        assert_eq!(prefill.name, "beta");
        assert_eq!(form.editing(), Some(2));

        let updated = form.submit(&mut store, input("beta v2", "999", "1")).expect("submit");
        assert_eq!(updated.id, 2);
        assert_eq!(updated.name, "beta v2");
        assert_eq!(form.editing(), None);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn begin_edit_missing_id_is_not_found() {
        let store = seeded();
        let mut form = ServiceForm::new();
        assert!(form.begin_edit(&store, 99).is_err());
        assert_eq!(form.editing(), None);
    }

    #[test]
    fn delete_requires_confirmation() {
        let mut store = seeded();
        let mut form = ServiceForm::new();
        assert_eq!(form.delete(&mut store, 1, false).expect("noop"), false);
        assert_eq!(store.len(), 3);
        assert_eq!(form.delete(&mut store, 1, true).expect("delete"), true);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn deleting_edited_listing_clears_cursor_and_stale_submit_does_not_recreate() {
        let mut store = seeded();
        let mut form = ServiceForm::new();
        form.begin_edit(&store, 3).expect("begin");
        form.delete(&mut store, 3, true).expect("delete");
        assert_eq!(form.editing(), None);

        // The stale form now lands in create mode as a brand new
        // listing, never as an update resurrecting the deleted record.
        store.create(input("filler", "1", "1").parse().expect("draft")).expect("create");
        let created = form.submit(&mut store, input("stale", "100", "1")).expect("submit");
        assert_eq!(created.id, 4);
        assert_eq!(store.find_by_id(3).expect("filler occupies id 3").name, "filler");
    }

    #[test]
    fn stale_cursor_submit_is_not_found_without_recreate() {
        // Deletion that bypasses the controller leaves the cursor
        // stale; the submit must fail and clear it, not recreate.
        let mut store = seeded();
        let mut form = ServiceForm::new();
        form.begin_edit(&store, 3).expect("begin");
        store.delete(3).expect("delete");

        let err = form.submit(&mut store, input("ghost", "100", "1")).unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        assert_eq!(form.editing(), None);
        assert!(store.find_by_id(3).is_none());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn quote_selection_prefers_id_then_first_name_match() {
        let store = seeded();
        assert_eq!(quote_selection(&store, Some(2), None).expect("by id").name, "beta");
        assert_eq!(quote_selection(&store, None, Some("gamma")).expect("by name").id, 3);
        assert_eq!(
            quote_selection(&store, Some(2), Some("gamma")).expect("id wins").id,
            2
        );
        assert!(quote_selection(&store, None, None).is_none());
    }
}
