//! Typed async client for the Pinterest v1 REST API.
//!
//! Each resource has a controller reachable from [`Client`]; every
//! controller method is one request/response round trip that either returns
//! the decoded payload or an [`Error`].

mod client;
mod codec;
pub mod config;
pub mod controllers;
mod errors;
mod request;
pub mod types;

pub use self::client::Client;
pub use self::config::ClientConfig;
pub use self::errors::{Error, PinterestError, RateLimit};
pub use self::request::{
    BoardCreateOptions, BoardUpdateOptions, ImageSource, Options, PageOptions, PinCreateOptions,
    PinUpdateOptions, Request, SearchOptions, SuggestedBoardsOptions,
};
