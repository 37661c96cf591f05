//! Core catalog logic, independent of any web or rendering technology.
//! - `catalog`: the in-memory store, single source of truth for views.
//! - `session`: role-based presentation gate (not a security boundary).
//! - `forms`: command handlers behind the admin and visitor forms.
//! - `loader`: one-shot startup seed read with empty-catalog fallback.

pub mod catalog;
pub mod errors;
pub mod forms;
pub mod loader;
pub mod session;
