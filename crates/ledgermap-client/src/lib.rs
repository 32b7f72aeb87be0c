//! ledgermap Client - GraphQL mapping gateway
//!
//! A [`MappingGateway`](ledgermap_reconcile::MappingGateway) that posts the
//! six integration mapping mutations to the billing GraphQL API.
//!
//! # Example
//!
//! ```rust,ignore
//! use ledgermap_client::{ClientConfig, GraphQlMappingGateway};
//! use ledgermap_reconcile::{Reconciler, ReconcileConfig};
//!
//! let config = ClientConfig::new("https://billing.example.com/graphql").with_api_key("secret");
//! let gateway = GraphQlMappingGateway::new(config)?;
//! let reconciler = Reconciler::new(gateway, ReconcileConfig::default());
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod config;
pub mod gateway;
pub mod mutation;

pub use config::ClientConfig;
pub use gateway::{ClientError, GraphQlMappingGateway};
pub use mutation::Mutation;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
