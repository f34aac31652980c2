mod common;
pub use self::common::{Creator, Image, Images};

mod envelope;
pub use self::envelope::{Envelope, Page, Paginated};

mod user;
pub use self::user::{User, UserCounts, USER_FIELDS};

mod board;
pub use self::board::{Board, BoardCounts, BOARD_FIELDS};

mod pin;
pub use self::pin::{Attribution, Media, Pin, PinCounts, PinImage, PIN_FIELDS};

mod metadata;
pub use self::metadata::{
    Article, MetadataLink, MetadataPerson, Movie, Place, PinMetadata, Product, ProductOffer,
    Recipe, RecipeCategory, RecipeIngredient, RecipeServings,
};

mod interest;
pub use self::interest::{Interest, INTEREST_FIELDS};

mod access_token;
pub use self::access_token::{AccessToken, Scope};
