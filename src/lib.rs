//! share-store - Durable storage for public share links
//!
//! This crate persists time-limited shares that expose a set of files owned by a user:
//! - Share records with atomic, never-reused id allocation
//! - Per-share file path index (duplicates preserved)
//! - Visit accounting and expiry queries for access-check and cleanup collaborators
//! - redb embedded database (ACID, MVCC, crash-safe)

pub mod config;
pub mod storage;

pub use storage::models::{NewShare, Share, ShareId};
pub use storage::{Database, DatabaseError};
