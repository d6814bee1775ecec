//! Domain building blocks shared by the database and API crates.
//!
//! Nothing in here touches the database or HTTP directly: the eager
//! association fetcher talks to storage through the
//! [`eager::AssociationLoader`] trait, which `campus-db` implements.

pub mod eager;
pub mod error;
pub mod merge;
pub mod pagination;
pub mod types;
pub mod validation;
