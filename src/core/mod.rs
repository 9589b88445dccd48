//! core
//!
//! Core domain types and operations for Gitling.
//!
//! # Modules
//!
//! - [`config`] - Repository configuration schema and INI loading
//! - [`fsops`] - Filesystem primitives: existence tests, mkdir -p, removal
//! - [`paths`] - Pure path composition for repository-relative locations
//! - [`repository`] - The Repository entity: validation, bootstrap, resolution
//!
//! # Design Principles
//!
//! - Construction-time validation: an opened repository is a valid repository
//! - Path composition is pure string work; only resolution touches the
//!   filesystem
//! - Failures surface as typed errors, never panics

pub mod config;
pub mod fsops;
pub mod paths;
pub mod repository;
