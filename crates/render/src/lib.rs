//! Pure projections from catalog state to HTML fragments.
//!
//! Every function here is idempotent and re-entrant: same input, same
//! markup. Nothing in this crate can mutate the store; it only borrows
//! records. Record fields are HTML-escaped on the way out.

pub mod detail;
pub mod escape;
pub mod format;
pub mod grid;
pub mod quote;
pub mod table;
