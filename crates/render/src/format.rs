/// Price grouping follows the source locale (es-CO): thousands
/// separated with `.`, e.g. 1200000 -> "1.200.000".
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - offset) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

/// Price with the currency suffix the source displays.
pub fn format_price(price: u64) -> String {
    format!("{} COP", group_thousands(price))
}

/// Three-tier stock severity. Thresholds are a presentation rule kept
/// for behavioral parity: above 5 is high, 3 to 5 is medium, 2 or
/// fewer is low.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StockLevel {
    High,
    Medium,
    Low,
}

impl StockLevel {
    /// CSS class hook for the severity color.
    pub fn class(self) -> &'static str {
        match self {
            StockLevel::High => "stock-high",
            StockLevel::Medium => "stock-medium",
            StockLevel::Low => "stock-low",
        }
    }
}

pub fn stock_level(stock: u64) -> StockLevel {
    if stock > 5 {
        StockLevel::High
    } else if stock > 2 {
        StockLevel::Medium
    } else {
        StockLevel::Low
    }
}
