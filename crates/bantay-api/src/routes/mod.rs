//! # API Route Modules
//!
//! Route modules for the registry's HTTP surface:
//!
//! - `tindahan` — business registration CRUD: register, paginated
//!   listing, fetch, partial update, and soft delete.
//!
//! Inspections, violations and compliance reports have schemas and
//! store operations but no wired endpoints; the HTTP surface covers
//! registration only.

pub mod tindahan;
