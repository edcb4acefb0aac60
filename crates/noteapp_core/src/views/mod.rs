//! Headless view models for the note list, editor and confirmation dialog.
//!
//! # Responsibility
//! - Turn controller snapshots into renderable frames.
//! - Turn pointer and keyboard input into controller calls.
//!
//! # Invariants
//! - Views hold no note data of their own; the controller is the source of
//!   truth. The only view-owned state is the context menu.

pub mod confirm_dialog;
pub mod editor;
pub mod note_list;
pub mod window;
