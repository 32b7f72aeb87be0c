//! ledgermap CLI - plan and apply reconciliations from request files
//!
//! - [`config`]: TOML file with `[reconcile]` and `[client]` tables
//! - [`request`]: request files holding one submission or an array
//! - [`commands`]: `plan` (dry run) and `apply` (against a gateway)

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod commands;
pub mod config;
pub mod request;

pub use commands::{apply, plan_all, PlanEntry, PlanReport};
pub use config::CliConfig;
pub use request::{load_requests, parse_requests};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
