//! Domain model for notes.
//!
//! # Responsibility
//! - Define the note record shared by store, controller and views.
//!
//! # Invariants
//! - A persisted note always carries a non-empty store-assigned `id`.
//! - A draft that was never saved has no `Note` at all.

pub mod note;
