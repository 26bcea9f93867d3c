//! Email GraphQL data types.

use juniper::GraphQLInputObject;
use uuid::Uuid;

use crate::common::error::DomainError;
use crate::domains::email::models::Email;
use crate::domains::user::actions as user_actions;
use crate::domains::user::data::UserData;
use crate::server::graphql::GraphQLContext;

/// Address sub-filters for email queries. `equal` and `in` combine:
/// see the email query actions for the merge policy.
#[derive(Debug, Clone, GraphQLInputObject)]
pub struct StringFilters {
    /// Match this address exactly.
    pub equal: Option<String>,
    /// Match any address in this list.
    #[graphql(name = "in")]
    pub is_in: Option<Vec<String>>,
}

/// Email GraphQL data type
#[derive(Debug, Clone)]
pub struct EmailData {
    pub id: Uuid,
    pub address: String,
    pub user_id: Uuid,
}

impl From<Email> for EmailData {
    fn from(email: Email) -> Self {
        Self {
            id: email.id,
            address: email.address,
            user_id: email.user_id,
        }
    }
}

#[juniper::graphql_object(context = GraphQLContext, name = "UserEmail")]
impl EmailData {
    fn id(&self) -> Uuid {
        self.id
    }

    fn address(&self) -> &str {
        &self.address
    }

    /// Owning user, resolved through the email address.
    async fn user(&self, ctx: &GraphQLContext) -> Result<Option<UserData>, DomainError> {
        let user = user_actions::get_user_by_address(&self.address, &ctx.deps).await?;
        Ok(user.map(UserData::from))
    }
}
