use crate::{
    request::Request,
    types::{User, USER_FIELDS},
    Client, Error,
};

/// `/users/` endpoints.
pub struct UsersController<'a> {
    client: &'a Client,
}

impl<'a> UsersController<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Fetches a user by username.
    ///
    /// `GET /users/<username>/`
    pub async fn fetch(&self, username: &str) -> Result<User, Error> {
        self.client
            .fetch_object(Request::get(format!("/users/{}/", username), USER_FIELDS))
            .await
    }
}
