//! Domain model for stored file references.
//!
//! # Responsibility
//! - Define the canonical record shape persisted in the `files` table.
//! - Keep validation rules next to the data they protect.
//!
//! # Invariants
//! - A record's `id` is store-assigned and never reused.
//! - Records returned by the persistence layer are detached copies.

pub mod file_record;
