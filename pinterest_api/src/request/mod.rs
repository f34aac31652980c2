mod common;
pub use self::common::{Options, Request};

mod board;
pub use self::board::{BoardCreateOptions, BoardUpdateOptions};

mod pin;
pub use self::pin::{ImageSource, PinCreateOptions, PinUpdateOptions};

mod page;
pub use self::page::{PageOptions, SearchOptions, SuggestedBoardsOptions};
