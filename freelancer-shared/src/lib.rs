//! # FreelancerPro Shared Library
//!
//! This crate contains the business data layer of FreelancerPro: entity models,
//! the local document store, authentication and the small workflows built on top
//! of them (Kanban board, dashboard summary).
//!
//! ## Module Organization
//!
//! - `store`: Storage port, backends and the read-modify-write document store
//! - `models`: Entities and their CRUD operations
//! - `auth`: Password hashing, registration/login and the current-user marker
//! - `kanban`: Task board grouped by status
//! - `dashboard`: Per-user business summary
//! - `refs`: Resolution of weak string-id references
//! - `filter`: Text/status filtering of listed records
//! - `demo`: Demo workspace seeding
//! - `config`: Configuration management
//!
//! ## Example
//!
//! ```
//! use freelancer_shared::models::client::{Client, ClientStatus, CreateClient};
//! use freelancer_shared::ids::UserId;
//! use freelancer_shared::store::DataStore;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = DataStore::in_memory();
//! let owner = UserId::new("u1");
//!
//! Client::create(&store, CreateClient {
//!     name: "Acme".to_string(),
//!     email: "a@acme.com".to_string(),
//!     phone: None,
//!     company: None,
//!     notes: None,
//!     status: ClientStatus::Prospect,
//!     user_id: owner.clone(),
//! })?;
//!
//! assert_eq!(Client::list_by_user(&store, &owner)?.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod config;
pub mod dashboard;
pub mod demo;
pub mod filter;
pub mod ids;
pub mod kanban;
pub mod models;
pub mod refs;
pub mod store;
pub mod timestamp;

/// Current version of the FreelancerPro shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
