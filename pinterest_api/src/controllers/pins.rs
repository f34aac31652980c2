use crate::{
    request::{PinCreateOptions, PinUpdateOptions, Request},
    types::{Pin, PIN_FIELDS},
    Client, Error,
};

/// `/pins/` endpoints.
pub struct PinsController<'a> {
    client: &'a Client,
}

impl<'a> PinsController<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// `GET /pins/<id>/`
    pub async fn fetch(&self, pin_id: &str) -> Result<Pin, Error> {
        self.client
            .fetch_object(Request::get(format!("/pins/{}/", pin_id), PIN_FIELDS))
            .await
    }

    /// Creates a pin on `board_spec`. The image comes from `options`, either
    /// as a URL or as raw bytes.
    ///
    /// `POST /pins/`
    pub async fn create(
        &self,
        board_spec: &str,
        note: &str,
        options: &PinCreateOptions,
    ) -> Result<Pin, Error> {
        let request = Request::post("/pins/")
            .with_fields(PIN_FIELDS)
            .with_form("board", board_spec)
            .with_form("note", note)
            .with_options(options);
        self.client.fetch_object(request).await
    }

    /// `PATCH /pins/<id>/`
    pub async fn update(&self, pin_id: &str, options: &PinUpdateOptions) -> Result<Pin, Error> {
        let request = Request::patch(format!("/pins/{}/", pin_id))
            .with_fields(PIN_FIELDS)
            .with_options(options);
        self.client.fetch_object(request).await
    }

    /// `DELETE /pins/<id>/`
    pub async fn delete(&self, pin_id: &str) -> Result<(), Error> {
        self.client
            .execute(Request::delete(format!("/pins/{}/", pin_id)))
            .await
    }
}
