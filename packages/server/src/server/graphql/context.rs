use crate::kernel::ServerDeps;

/// GraphQL request context
///
/// Carries the explicitly injected store dependencies for all resolvers.
#[derive(Clone)]
pub struct GraphQLContext {
    pub deps: ServerDeps,
}

impl juniper::Context for GraphQLContext {}

impl GraphQLContext {
    pub fn new(deps: ServerDeps) -> Self {
        Self { deps }
    }
}
