//! # vaultdesk-domain
//!
//! Pure domain model for the vaultdesk control panel.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, timestamps, clock labels
//! - Define **work items** (tasks and approvals listed by the backend)
//! - Define the **summary** reported by the backend
//! - Define the **snapshot** — the latest known state of every panel — and
//!   the rule for folding one poll cycle into it
//! - Define the local **watcher** flag, status labels and **activity log**
//! - Define **action payloads** sent to the backend and their validation
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod time;

pub mod action;
pub mod activity;
pub mod snapshot;
pub mod status;
pub mod summary;
pub mod work_item;
