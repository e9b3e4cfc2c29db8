pub mod types;
pub mod queries;
pub mod mutations;
pub mod utilities;
pub mod errors;

#[cfg(test)]
pub mod test_helpers;

use async_graphql::{EmptySubscription, Schema};
use services::{Clock, Directory, SimulatedGateway};
use std::sync::Arc;

use crate::mutations::Mutations;
use crate::queries::Queries;
use crate::utilities::{FormSessions, SharedDirectory};

pub type PortalSchema = Schema<Queries, Mutations, EmptySubscription>;

/// Builds the schema with fresh form sessions and the seeded directory.
pub fn build_schema(gateway: SimulatedGateway, clock: Arc<dyn Clock>) -> PortalSchema {
    Schema::build(Queries::default(), Mutations::default(), EmptySubscription)
        .data(FormSessions::new(clock.clone()))
        .data(SharedDirectory::new(Directory::new()))
        .data(gateway)
        .data(clock)
        .finish()
}
