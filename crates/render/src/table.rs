use models::service::Service;

use crate::escape::escape;
use crate::format::group_thousands;

/// Row shown when the catalog is empty.
pub const EMPTY_TABLE_ROW: &str = "<tr><td colspan=\"6\">No services available</td></tr>";

/// Placeholder text in the promotion column.
pub const NO_PROMOTION_CELL: &str = "No promotion";

fn render_row(service: &Service) -> String {
    let promotion = match service.promotion() {
        Some(p) => escape(p),
        None => NO_PROMOTION_CELL.to_string(),
    };
    format!(
        concat!(
            "<tr data-id=\"{id}\">",
            "<td>{id}</td>",
            "<td>{icon} {name}</td>",
            "<td>{price}</td>",
            "<td>{stock}</td>",
            "<td>{promotion}</td>",
            "<td class=\"action-buttons\">",
            "<button class=\"btn btn-small btn-edit\" data-id=\"{id}\">Edit</button>",
            "<button class=\"btn btn-small btn-delete\" data-id=\"{id}\">Delete</button>",
            "</td>",
            "</tr>"
        ),
        id = service.id,
        icon = escape(&service.icon),
        name = escape(&service.name),
        price = group_thousands(service.price),
        stock = service.stock,
        promotion = promotion,
    )
}

/// Admin table body in store order; a single full-width row when the
/// catalog is empty.
pub fn render_admin_table(services: &[Service]) -> String {
    if services.is_empty() {
        return EMPTY_TABLE_ROW.to_string();
    }
    services.iter().map(render_row).collect()
}
