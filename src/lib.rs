//! # BioManager back-end
//!
//! In-memory inventory and sales service behind a small JSON API.
//!
//! The catalog and the sales ledger each live inside a resource actor (a task
//! that owns its store and answers typed requests over a channel). Clients wrap
//! those channels; the HTTP layer only ever talks to clients.
//!
//! - **Domain types** → [`domain::Product`], [`domain::Sale`], [`domain::User`]
//! - **Actor framework** → [`actor_framework::ResourceActor`], [`actor_framework::ResourceClient`]
//! - **Clients** → [`clients::ProductClient`], [`clients::SaleClient`]
//! - **System coordinator** → [`app_system::InventorySystem`]
//! - **HTTP API** → [`http::router`]

pub mod actor_framework;
pub mod app_system;
pub mod auth;
pub mod clients;
pub mod config;
pub mod domain;
pub mod http;
pub mod product_actor;
pub mod sale_actor;

#[cfg(test)]
mod mock_framework;
#[cfg(test)]
mod integration_tests;
