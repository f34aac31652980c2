use crate::{
    request::{PageOptions, Request, SuggestedBoardsOptions},
    types::{Board, Paginated, Pin, User, BOARD_FIELDS, PIN_FIELDS, USER_FIELDS},
    Client, Error,
};

use super::{MeFollowingController, MeSearchController};

/// `/me/` endpoints, acting as the owner of the access token.
pub struct MeController<'a> {
    client: &'a Client,
}

impl<'a> MeController<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Fetches the authenticated user.
    ///
    /// `GET /me/`
    pub async fn fetch(&self) -> Result<User, Error> {
        self.client
            .fetch_object(Request::get("/me/", USER_FIELDS))
            .await
    }

    pub fn boards(&self) -> MeBoardsController<'a> {
        MeBoardsController {
            client: self.client,
        }
    }

    pub fn followers(&self) -> MeFollowersController<'a> {
        MeFollowersController {
            client: self.client,
        }
    }

    pub fn following(&self) -> MeFollowingController<'a> {
        MeFollowingController::new(self.client)
    }

    pub fn likes(&self) -> MeLikesController<'a> {
        MeLikesController {
            client: self.client,
        }
    }

    pub fn pins(&self) -> MePinsController<'a> {
        MePinsController {
            client: self.client,
        }
    }

    pub fn search(&self) -> MeSearchController<'a> {
        MeSearchController::new(self.client)
    }
}

/// `/me/boards/` endpoints.
pub struct MeBoardsController<'a> {
    client: &'a Client,
}

impl<'a> MeBoardsController<'a> {
    pub fn suggested(&self) -> MeBoardsSuggestedController<'a> {
        MeBoardsSuggestedController {
            client: self.client,
        }
    }

    /// Fetches the authenticated user's boards.
    ///
    /// `GET /me/boards/`
    pub async fn fetch(&self, options: &PageOptions) -> Result<Paginated<Board>, Error> {
        let request = Request::get("/me/boards/", BOARD_FIELDS).with_options(options);
        self.client.fetch_list(request).await
    }
}

/// `/me/boards/suggested/` endpoint.
pub struct MeBoardsSuggestedController<'a> {
    client: &'a Client,
}

impl MeBoardsSuggestedController<'_> {
    /// Fetches boards the API suggests for the user, optionally for a given pin.
    ///
    /// `GET /me/boards/suggested/`
    pub async fn fetch(&self, options: &SuggestedBoardsOptions) -> Result<Vec<Board>, Error> {
        let request = Request::get("/me/boards/suggested/", BOARD_FIELDS).with_options(options);
        self.client
            .fetch_list(request)
            .await
            .map(|page| page.data)
    }
}

/// `/me/followers/` endpoint.
pub struct MeFollowersController<'a> {
    client: &'a Client,
}

impl MeFollowersController<'_> {
    /// Fetches one page of the users following the authenticated user.
    ///
    /// `GET /me/followers/`
    pub async fn fetch(&self, options: &PageOptions) -> Result<Paginated<User>, Error> {
        let request = Request::get("/me/followers/", USER_FIELDS).with_options(options);
        self.client.fetch_list(request).await
    }
}

/// `/me/likes/` endpoint.
pub struct MeLikesController<'a> {
    client: &'a Client,
}

impl MeLikesController<'_> {
    /// Fetches one page of the pins the authenticated user has liked.
    ///
    /// `GET /me/likes/`
    pub async fn fetch(&self, options: &PageOptions) -> Result<Paginated<Pin>, Error> {
        let request = Request::get("/me/likes/", PIN_FIELDS).with_options(options);
        self.client.fetch_list(request).await
    }
}

/// `/me/pins/` endpoint.
pub struct MePinsController<'a> {
    client: &'a Client,
}

impl MePinsController<'_> {
    /// `GET /me/pins/`
    pub async fn fetch(&self, options: &PageOptions) -> Result<Paginated<Pin>, Error> {
        let request = Request::get("/me/pins/", PIN_FIELDS).with_options(options);
        self.client.fetch_list(request).await
    }
}
