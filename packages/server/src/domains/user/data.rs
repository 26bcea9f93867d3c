//! User GraphQL data types.

use juniper::{GraphQLEnum, GraphQLInputObject};
use uuid::Uuid;

use crate::common::error::DomainError;
use crate::domains::email::actions as email_actions;
use crate::domains::email::data::{EmailData, StringFilters};
use crate::domains::user::models::{User, UserStatus};
use crate::server::graphql::GraphQLContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq, GraphQLEnum)]
#[graphql(name = "UserStatus")]
pub enum UserStatusData {
    Enabled,
    Disabled,
}

/// User GraphQL data type
#[derive(Debug, Clone)]
pub struct UserData {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub status: UserStatusData,
}

impl From<User> for UserData {
    fn from(user: User) -> Self {
        // Unknown stored values read as disabled.
        let status = match user.status.parse().unwrap_or(UserStatus::Disabled) {
            UserStatus::Enabled => UserStatusData::Enabled,
            UserStatus::Disabled => UserStatusData::Disabled,
        };
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            status,
        }
    }
}

#[juniper::graphql_object(context = GraphQLContext, name = "User")]
impl UserData {
    fn id(&self) -> Uuid {
        self.id
    }

    fn first_name(&self) -> &str {
        &self.first_name
    }

    fn last_name(&self) -> &str {
        &self.last_name
    }

    fn status(&self) -> UserStatusData {
        self.status
    }

    /// Emails owned by this user, optionally filtered by address,
    /// ordered ascending by address.
    async fn emails(
        &self,
        ctx: &GraphQLContext,
        address: Option<StringFilters>,
    ) -> Result<Vec<EmailData>, DomainError> {
        let emails = email_actions::list_emails(address, Some(self.id), &ctx.deps).await?;
        Ok(emails.into_iter().map(EmailData::from).collect())
    }
}

/// GraphQL input for the addUser mutation.
///
/// A status may be supplied but is ignored: new users always start
/// enabled.
#[derive(Debug, Clone, GraphQLInputObject)]
#[graphql(name = "AddUser")]
pub struct AddUserInput {
    pub first_name: String,
    pub last_name: String,
    pub status: Option<UserStatusData>,
}
