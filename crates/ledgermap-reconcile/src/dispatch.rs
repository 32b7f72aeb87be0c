//! Mutation dispatch
//!
//! Executes a [`MutationPlan`] against a [`MappingGateway`]: at most one
//! remote call, awaited to completion, never retried.

use crate::error::ReconcileError;
use crate::gateway::{MappingGateway, MutationResponse};
use crate::plan::{MutationPlan, Operation};

/// Execute a plan
///
/// # Errors
/// - `ReconcileError::Gateway` if the call could not be completed
/// - `ReconcileError::Remote` if the mutation returned GraphQL errors
pub async fn execute<G>(plan: MutationPlan, gateway: &G) -> Result<Operation, ReconcileError>
where
    G: MappingGateway + ?Sized,
{
    let operation = plan.operation();

    let response: MutationResponse = match plan {
        MutationPlan::Skip(_) => return Ok(operation),
        MutationPlan::CreateCollection(input) => gateway.create_collection(input).await?,
        MutationPlan::CreateItem(input) => gateway.create_item(input).await?,
        MutationPlan::UpdateCollection(input) => gateway.update_collection(input).await?,
        MutationPlan::UpdateItem(input) => gateway.update_item(input).await?,
        MutationPlan::DeleteCollection(input) => gateway.delete_collection(input).await?,
        MutationPlan::DeleteItem(input) => gateway.delete_item(input).await?,
    };

    if response.has_errors() {
        tracing::warn!(
            %operation,
            error_count = response.errors.len(),
            "mapping mutation returned errors"
        );
        return Err(ReconcileError::Remote(response.errors));
    }

    Ok(operation)
}
