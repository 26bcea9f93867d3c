//! GraphQL schema definition.

use juniper::{EmptySubscription, RootNode};
use uuid::Uuid;

use super::context::GraphQLContext;
use crate::common::error::DomainError;
use crate::common::validation::validate_address;
use crate::domains::email::actions as email_actions;
use crate::domains::email::data::{EmailData, StringFilters};
use crate::domains::user::actions as user_actions;
use crate::domains::user::data::{AddUserInput, UserData};
use crate::domains::user::models::CreateUser;

pub struct Query;

#[juniper::graphql_object(context = GraphQLContext)]
impl Query {
    /// Get a single email by id. Absence is a valid empty result.
    async fn email(
        ctx: &GraphQLContext,
        email_id: Uuid,
    ) -> Result<Option<EmailData>, DomainError> {
        let email = email_actions::get_email(email_id, &ctx.deps).await?;
        Ok(email.map(EmailData::from))
    }

    /// List emails, optionally filtered by address, ordered ascending
    /// by address.
    async fn emails_list(
        ctx: &GraphQLContext,
        address: Option<StringFilters>,
    ) -> Result<Vec<EmailData>, DomainError> {
        let emails = email_actions::list_emails(address, None, &ctx.deps).await?;
        Ok(emails.into_iter().map(EmailData::from).collect())
    }

    /// Get a user by id. Absence is a valid empty result.
    async fn user(ctx: &GraphQLContext, user_id: Uuid) -> Result<Option<UserData>, DomainError> {
        let user = user_actions::get_user(user_id, &ctx.deps).await?;
        Ok(user.map(UserData::from))
    }
}

pub struct Mutation;

#[juniper::graphql_object(context = GraphQLContext)]
impl Mutation {
    /// Create a user. Status is forced to enabled regardless of input.
    async fn add_user(ctx: &GraphQLContext, user: AddUserInput) -> Result<Uuid, DomainError> {
        user_actions::create_user(
            CreateUser {
                first_name: user.first_name,
                last_name: user.last_name,
            },
            &ctx.deps,
        )
        .await
    }

    /// Deactivate a user (soft delete). Idempotent once the user exists.
    async fn deactivate_user(ctx: &GraphQLContext, user_id: Uuid) -> Result<Uuid, DomainError> {
        user_actions::deactivate_user(user_id, &ctx.deps).await
    }

    /// Add an email to an enabled user.
    async fn add_email(
        ctx: &GraphQLContext,
        address: String,
        user_id: Uuid,
    ) -> Result<Uuid, DomainError> {
        validate_address(&address)?;
        user_actions::add_email(&address, user_id, &ctx.deps).await
    }

    /// Replace an email's address in place.
    async fn update_email(
        ctx: &GraphQLContext,
        address: String,
        email_id: Uuid,
        user_id: Uuid,
    ) -> Result<Uuid, DomainError> {
        validate_address(&address)?;
        user_actions::update_email(&address, email_id, user_id, &ctx.deps).await
    }
}

pub type Schema = RootNode<'static, Query, Mutation, EmptySubscription<GraphQLContext>>;

pub fn create_schema() -> Schema {
    Schema::new(Query, Mutation, EmptySubscription::new())
}
