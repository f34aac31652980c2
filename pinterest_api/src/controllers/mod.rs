//! One controller per API resource. Controllers borrow the [`Client`](crate::Client)
//! and hold no state of their own.

mod users;
pub use self::users::UsersController;

mod boards;
pub use self::boards::{BoardPinsController, BoardsController};

mod pins;
pub use self::pins::PinsController;

mod me;
pub use self::me::{
    MeBoardsController, MeBoardsSuggestedController, MeController, MeFollowersController,
    MeLikesController, MePinsController,
};

mod me_following;
pub use self::me_following::{
    MeFollowingBoardsController, MeFollowingController, MeFollowingInterestsController,
    MeFollowingUsersController,
};

mod me_search;
pub use self::me_search::{MeSearchBoardsController, MeSearchController, MeSearchPinsController};

mod oauth;
pub use self::oauth::{OAuthController, OAuthTokenController};
