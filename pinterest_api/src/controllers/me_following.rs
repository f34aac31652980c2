use crate::{
    request::{PageOptions, Request},
    types::{Board, Interest, Paginated, User, BOARD_FIELDS, INTEREST_FIELDS, USER_FIELDS},
    Client, Error,
};

/// `/me/following/` endpoints.
pub struct MeFollowingController<'a> {
    client: &'a Client,
}

impl<'a> MeFollowingController<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub fn boards(&self) -> MeFollowingBoardsController<'a> {
        MeFollowingBoardsController {
            client: self.client,
        }
    }

    pub fn interests(&self) -> MeFollowingInterestsController<'a> {
        MeFollowingInterestsController {
            client: self.client,
        }
    }

    pub fn users(&self) -> MeFollowingUsersController<'a> {
        MeFollowingUsersController {
            client: self.client,
        }
    }
}

/// `/me/following/boards/` endpoints.
pub struct MeFollowingBoardsController<'a> {
    client: &'a Client,
}

impl MeFollowingBoardsController<'_> {
    /// Fetches one page of the boards the authenticated user follows.
    ///
    /// `GET /me/following/boards/`
    pub async fn fetch(&self, options: &PageOptions) -> Result<Paginated<Board>, Error> {
        let request = Request::get("/me/following/boards/", BOARD_FIELDS).with_options(options);
        self.client.fetch_list(request).await
    }

    /// Follows a board.
    ///
    /// `POST /me/following/boards/`
    pub async fn create(&self, board_spec: &str) -> Result<(), Error> {
        let request = Request::post("/me/following/boards/").with_form("board", board_spec);
        self.client.execute(request).await
    }

    /// Unfollows a board.
    ///
    /// `DELETE /me/following/boards/<spec>/`
    pub async fn delete(&self, board_spec: &str) -> Result<(), Error> {
        self.client
            .execute(Request::delete(format!(
                "/me/following/boards/{}/",
                board_spec
            )))
            .await
    }
}

/// `/me/following/interests/` endpoint.
pub struct MeFollowingInterestsController<'a> {
    client: &'a Client,
}

impl MeFollowingInterestsController<'_> {
    /// `GET /me/following/interests/`
    pub async fn fetch(&self, options: &PageOptions) -> Result<Paginated<Interest>, Error> {
        let request =
            Request::get("/me/following/interests/", INTEREST_FIELDS).with_options(options);
        self.client.fetch_list(request).await
    }
}

/// `/me/following/users/` endpoints.
pub struct MeFollowingUsersController<'a> {
    client: &'a Client,
}

impl MeFollowingUsersController<'_> {
    /// Fetches one page of the users the authenticated user follows.
    ///
    /// `GET /me/following/users/`
    pub async fn fetch(&self, options: &PageOptions) -> Result<Paginated<User>, Error> {
        let request = Request::get("/me/following/users/", USER_FIELDS).with_options(options);
        self.client.fetch_list(request).await
    }

    /// Follows a user.
    ///
    /// `POST /me/following/users/`
    pub async fn create(&self, username: &str) -> Result<(), Error> {
        let request = Request::post("/me/following/users/").with_form("user", username);
        self.client.execute(request).await
    }

    /// Unfollows a user.
    ///
    /// `DELETE /me/following/users/<username>/`
    pub async fn delete(&self, username: &str) -> Result<(), Error> {
        self.client
            .execute(Request::delete(format!("/me/following/users/{}/", username)))
            .await
    }
}
