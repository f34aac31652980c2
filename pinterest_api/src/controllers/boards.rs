use crate::{
    request::{BoardCreateOptions, BoardUpdateOptions, PageOptions, Request},
    types::{Board, Paginated, Pin, BOARD_FIELDS, PIN_FIELDS},
    Client, Error,
};

/// `/boards/` endpoints. Boards are addressed by their spec, `owner/slug`.
pub struct BoardsController<'a> {
    client: &'a Client,
}

impl<'a> BoardsController<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// `/boards/<spec>/pins/` endpoints.
    pub fn pins(&self) -> BoardPinsController<'a> {
        BoardPinsController {
            client: self.client,
        }
    }

    /// `GET /boards/<spec>/`
    pub async fn fetch(&self, board_spec: &str) -> Result<Board, Error> {
        self.client
            .fetch_object(Request::get(format!("/boards/{}/", board_spec), BOARD_FIELDS))
            .await
    }

    /// Creates a board owned by the authenticated user.
    ///
    /// `POST /boards/`
    pub async fn create(&self, name: &str, options: &BoardCreateOptions) -> Result<Board, Error> {
        let request = Request::post("/boards/")
            .with_fields(BOARD_FIELDS)
            .with_form("name", name)
            .with_options(options);
        self.client.fetch_object(request).await
    }

    /// `PATCH /boards/<spec>/`
    pub async fn update(
        &self,
        board_spec: &str,
        options: &BoardUpdateOptions,
    ) -> Result<Board, Error> {
        let request = Request::patch(format!("/boards/{}/", board_spec))
            .with_fields(BOARD_FIELDS)
            .with_options(options);
        self.client.fetch_object(request).await
    }

    /// `DELETE /boards/<spec>/`
    pub async fn delete(&self, board_spec: &str) -> Result<(), Error> {
        self.client
            .execute(Request::delete(format!("/boards/{}/", board_spec)))
            .await
    }
}

/// `/boards/<spec>/pins/` endpoints.
pub struct BoardPinsController<'a> {
    client: &'a Client,
}

impl BoardPinsController<'_> {
    /// Fetches one page of the pins on a board.
    ///
    /// `GET /boards/<spec>/pins/`
    pub async fn fetch(
        &self,
        board_spec: &str,
        options: &PageOptions,
    ) -> Result<Paginated<Pin>, Error> {
        let request = Request::get(format!("/boards/{}/pins/", board_spec), PIN_FIELDS)
            .with_options(options);
        self.client.fetch_list(request).await
    }
}
