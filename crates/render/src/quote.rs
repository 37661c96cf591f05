use models::service::Service;

use crate::escape::escape;
use crate::format::format_price;

/// Summary shown on the quote form after picking a service: icon, name,
/// price, availability and the promotion when there is one.
pub fn render_quote_summary(service: &Service) -> String {
    let promotion = match service.promotion() {
        Some(p) => format!("<div class=\"summary-promotion\">{}</div>", escape(p)),
        None => String::new(),
    };
    format!(
        concat!(
            "<div class=\"service-summary\" data-id=\"{id}\">",
            "<span class=\"summary-icon\">{icon}</span>",
            "<span class=\"summary-name\">{name}</span>",
            "<span class=\"summary-price\">{price}</span>",
            "<span class=\"summary-stock\">{stock} units available</span>",
            "{promotion}",
            "</div>"
        ),
        id = service.id,
        icon = escape(&service.icon),
        name = escape(&service.name),
        price = format_price(service.price),
        stock = service.stock,
        promotion = promotion,
    )
}
