//! User API methods.

use crate::client::AnalyticsClient;
use crate::endpoints::QueryParams;
use crate::error::Result;
use crate::models::{Page, User};

const PATH: &str = "users";

#[derive(Debug, Clone, Copy)]
pub struct UsersService<'a> {
    client: &'a AnalyticsClient,
}

impl<'a> UsersService<'a> {
    pub(crate) fn new(client: &'a AnalyticsClient) -> Self {
        Self { client }
    }

    /// List the users of the company. `limit` and `page` are always sent.
    pub async fn get_all(&self, limit: i64, page: i64) -> Result<Page<User>> {
        let params = users_query(limit, page);
        self.client.get(PATH, &params).await
    }

    /// The user the access token belongs to.
    pub async fn get_current(&self) -> Result<User> {
        self.client.get("users/me", &QueryParams::new()).await
    }
}

fn users_query(limit: i64, page: i64) -> QueryParams {
    QueryParams::new().required("limit", limit).required("page", page)
}
