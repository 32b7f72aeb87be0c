//! ledgermap Core - integration mapping model and decision logic
//!
//! The pure half of mapping reconciliation:
//! - Typed providers, mapping targets and billing entities
//! - Provider parameter extraction from raw form values
//! - The Xero composite selection codec
//! - Action classification (no-op, create, update, delete)
//!
//! Nothing in this crate performs I/O. Dispatching the classified action
//! lives in `ledgermap-reconcile`.
//!
//! # Example
//!
//! ```rust,ignore
//! use ledgermap_core::{classify, extract, CollectionMappingType, MappingTarget, Provider};
//!
//! let values = serde_json::json!({ "externalId": "x", "externalName": "y" });
//! let parameters = extract(&values, Provider::Anrok)?;
//! let target = MappingTarget::Collection(CollectionMappingType::FallbackItem);
//! let decision = classify(&parameters, None, &target, Provider::Anrok)?;
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod classify;
pub mod error;
pub mod extract;
pub mod mapping;
pub mod parameters;
pub mod types;
pub mod value;
pub mod xero;

pub use classify::{classify, Decision, SkipReason};
pub use error::{ClassifyError, CodecError, ExtractError};
pub use extract::extract;
pub use mapping::{InitialMapping, ItemMapping, MappableItemMapping, TaxFields, TaxItemMapping};
pub use parameters::{
    AvalaraAndAnrokParameters, ExternalFields, FieldKey, NetsuiteParameters, ProviderParameters,
    XeroParameters,
};
pub use types::{
    BillingEntity, CollectionMappingType, MappableType, MappingTarget, ParseProviderError,
    Provider,
};
pub use xero::{XeroSelection, SELECTION_DELIMITER};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with mapping reconciliation
    pub use crate::{
        classify, extract, BillingEntity, CollectionMappingType, Decision, InitialMapping,
        MappableType, MappingTarget, Provider, ProviderParameters,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
