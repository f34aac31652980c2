use crate::{
    request::{Request, SearchOptions},
    types::{Board, Paginated, Pin, BOARD_FIELDS, PIN_FIELDS},
    Client, Error,
};

/// `/me/search/` endpoints.
pub struct MeSearchController<'a> {
    client: &'a Client,
}

impl<'a> MeSearchController<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub fn boards(&self) -> MeSearchBoardsController<'a> {
        MeSearchBoardsController {
            client: self.client,
        }
    }

    pub fn pins(&self) -> MeSearchPinsController<'a> {
        MeSearchPinsController {
            client: self.client,
        }
    }
}

/// `/me/search/boards/` endpoint.
pub struct MeSearchBoardsController<'a> {
    client: &'a Client,
}

impl MeSearchBoardsController<'_> {
    /// Searches the authenticated user's boards.
    ///
    /// `GET /me/search/boards/`
    pub async fn fetch(
        &self,
        query: &str,
        options: &SearchOptions,
    ) -> Result<Paginated<Board>, Error> {
        let request = Request::get("/me/search/boards/", BOARD_FIELDS)
            .with_query("query", query)
            .with_options(options);
        self.client.fetch_list(request).await
    }
}

/// `/me/search/pins/` endpoint.
pub struct MeSearchPinsController<'a> {
    client: &'a Client,
}

impl MeSearchPinsController<'_> {
    /// Searches the authenticated user's pins.
    ///
    /// `GET /me/search/pins/`
    pub async fn fetch(
        &self,
        query: &str,
        options: &SearchOptions,
    ) -> Result<Paginated<Pin>, Error> {
        let request = Request::get("/me/search/pins/", PIN_FIELDS)
            .with_query("query", query)
            .with_options(options);
        self.client.fetch_list(request).await
    }
}
