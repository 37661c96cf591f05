use models::service::Service;

use crate::escape::escape;

/// One grid card: icon, name and description only; the detail view
/// carries the full record.
pub fn render_card(service: &Service) -> String {
    format!(
        concat!(
            "<div class=\"service-card\" data-id=\"{id}\">",
            "<div class=\"service-icon\">{icon}</div>",
            "<h3>{name}</h3>",
            "<p>{description}</p>",
            "<div class=\"card-click-hint\"><span>Click for full details</span></div>",
            "</div>"
        ),
        id = service.id,
        icon = escape(&service.icon),
        name = escape(&service.name),
        description = escape(&service.description),
    )
}

/// The whole grid in store order. An empty catalog renders zero cards.
pub fn render_grid(services: &[Service]) -> String {
    services.iter().map(render_card).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::service::ServiceDraft;

    fn service(id: u64, name: &str) -> Service {
        Service::from_draft(
            id,
            ServiceDraft {
                name: name.into(),
                icon: "🌐".into(),
                description: "Custom sites".into(),
                price: 1_200_000,
                stock: 8,
                promotion: String::new(),
            },
        )
    }

    #[test]
    fn empty_catalog_renders_zero_cards() {
        assert_eq!(render_grid(&[]), "");
    }

    #[test]
    fn cards_appear_in_store_order() {
        let grid = render_grid(&[service(1, "First"), service(2, "Second")]);
        let first = grid.find("<h3>First</h3>").expect("first card");
        let second = grid.find("<h3>Second</h3>").expect("second card");
        assert!(first < second);
        assert_eq!(grid.matches("service-card").count(), 2);
    }

    #[test]
    fn card_escapes_record_fields() {
        let card = render_card(&service(1, "<script>alert(1)</script>"));
        assert!(!card.contains("<script>"));
        assert!(card.contains("&lt;script&gt;"));
    }
}
