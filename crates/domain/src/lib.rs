//! # plantstore-domain
//!
//! Pure domain model for the plant store.
//!
//! ## Responsibilities
//! - Foundational types: the typed [`PlantId`](id::PlantId) and error conventions
//! - Define the **Plant** entity and the values used to create and patch it
//! - Own the partial-update rule: only fields present in a patch are overwritten
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod plant;
