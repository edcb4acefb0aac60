//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep the async store boundary decoupled from SQL details.

pub mod note_service;
