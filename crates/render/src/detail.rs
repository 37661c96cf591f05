use models::service::Service;

use crate::escape::escape;
use crate::format::{format_price, stock_level};

/// Notice shown when the listing has no active promotion.
pub const NO_PROMOTION_NOTICE: &str = "No active promotions right now";

/// Full detail view for a single listing (the source's modal body):
/// price with locale grouping, stock with its severity class, the full
/// description, and the promotion block or its fallback notice.
pub fn render_detail(service: &Service) -> String {
    let promotion_block = match service.promotion() {
        Some(p) => format!(
            "<div class=\"promotion-block\"><strong>Special promotion:</strong> <span>{}</span></div>",
            escape(p)
        ),
        None => format!("<div class=\"promotion-empty\"><span>{}</span></div>", NO_PROMOTION_NOTICE),
    };
    format!(
        concat!(
            "<div class=\"service-detail\" data-id=\"{id}\">",
            "<div class=\"service-icon\">{icon}</div>",
            "<h2>{name}</h2>",
            "<div class=\"detail-price\"><strong>Price:</strong> <span>{price}</span></div>",
            "<div class=\"detail-stock\"><strong>Stock:</strong> <span class=\"{stock_class}\">{stock} units</span></div>",
            "<div class=\"detail-description\"><strong>Full description:</strong> <p>{description}</p></div>",
            "{promotion}",
            "</div>"
        ),
        id = service.id,
        icon = escape(&service.icon),
        name = escape(&service.name),
        price = format_price(service.price),
        stock_class = stock_level(service.stock).class(),
        stock = service.stock,
        description = escape(&service.description),
        promotion = promotion_block,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::service::ServiceDraft;

    fn service(stock: u64, promotion: &str) -> Service {
        Service::from_draft(
            4,
            ServiceDraft {
                name: "Cybersecurity".into(),
                icon: "🔒".into(),
                description: "Audits and hardening".into(),
                price: 3_000_000,
                stock,
                promotion: promotion.into(),
            },
        )
    }

    #[test]
    fn shows_grouped_price_and_stock_class() {
        let html = render_detail(&service(8, ""));
        assert!(html.contains("3.000.000 COP"));
        assert!(html.contains("stock-high"));
        assert!(html.contains("8 units"));
    }

    #[test]
    fn low_stock_gets_low_class() {
        let html = render_detail(&service(2, ""));
        assert!(html.contains("stock-low"));
    }

    #[test]
    fn promotion_block_or_fallback() {
        let with = render_detail(&service(8, "20% off in August"));
        assert!(with.contains("20% off in August"));
        assert!(!with.contains(NO_PROMOTION_NOTICE));

        let without = render_detail(&service(8, ""));
        assert!(without.contains(NO_PROMOTION_NOTICE));
    }

    #[test]
    fn rendering_twice_is_identical() {
        let s = service(3, "promo");
        assert_eq!(render_detail(&s), render_detail(&s));
    }
}
