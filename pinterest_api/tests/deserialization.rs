use chrono::{TimeZone, Utc};
use pinterest_api::types::{AccessToken, Board, Envelope, Interest, Pin, User};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_user() {
    let json = load_fixture("user.json");
    let resp: Envelope<User> = serde_json::from_str(&json).unwrap();
    let user = resp.data.unwrap();

    assert_eq!(user.id, "123456789012345678");
    assert_eq!(user.username, "jdoe");
    assert_eq!(user.first_name, "Jane");
    assert_eq!(user.last_name, "Doe");
    assert_eq!(user.account_type, "individual");
    assert_eq!(user.url, "https://www.pinterest.com/jdoe/");
    assert_eq!(
        user.created_at,
        Some(Utc.with_ymd_and_hms(2013, 4, 12, 18, 22, 5).unwrap())
    );
    assert_eq!(user.counts.pins, 312);
    assert_eq!(user.counts.followers, 210);
    assert_eq!(user.image.size_60x60.width, 60);
    assert!(resp.page.is_last());
}

#[test]
fn deserialize_board() {
    let json = load_fixture("board.json");
    let resp: Envelope<Board> = serde_json::from_str(&json).unwrap();
    let board = resp.data.unwrap();

    assert_eq!(board.name, "Weeknight Dinners");
    assert_eq!(board.description, "Quick meals for busy evenings");
    assert_eq!(board.creator.first_name, "Jane");
    assert_eq!(board.counts.pins, 42);
    assert_eq!(board.privacy, "public");
    assert_eq!(board.spec().as_deref(), Some("jdoe/weeknight-dinners"));
}

#[test]
fn deserialize_pin_with_metadata() {
    let json = load_fixture("pin.json");
    let resp: Envelope<Pin> = serde_json::from_str(&json).unwrap();
    let pin = resp.data.unwrap();

    assert_eq!(pin.id, "555000111222333444");
    assert_eq!(pin.note, "Lemon pasta in 20 minutes");
    assert_eq!(pin.link.as_deref(), Some("https://example.com/recipes/lemon-pasta"));
    assert_eq!(pin.color.as_deref(), Some("#e8d9a0"));
    assert_eq!(pin.board.name, "Weeknight Dinners");
    assert_eq!(pin.counts.repins, 23);
    assert_eq!(pin.media.kind, "image");
    assert!(pin.attribution.is_none());
    assert_eq!(
        pin.image_url(),
        Some("https://i.pinimg.com/originals/de/ad/be/deadbeef.jpg")
    );

    let recipe = pin.metadata.recipe.as_ref().unwrap();
    assert_eq!(recipe.servings.serves.as_deref(), Some("4"));
    assert_eq!(recipe.ingredients[0].ingredients.len(), 2);
    assert_eq!(recipe.ingredients[0].ingredients[1].name.as_deref(), Some("lemons"));

    let article = pin.metadata.article.as_ref().unwrap();
    assert_eq!(article.authors[0].name, "Sam Cook");
    assert_eq!(
        article.published_at,
        Some(Utc.with_ymd_and_hms(2017, 2, 10, 12, 0, 0).unwrap())
    );
    assert!(pin.metadata.place.is_none());
    assert!(pin.metadata.movie.is_none());
}

#[test]
fn deserialize_paginated_pins() {
    let json = load_fixture("board_pins_page1.json");
    let resp: Envelope<Vec<Pin>> = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.page.cursor(), Some("LT4xMDAy"));

    let pins = resp.data.unwrap();
    assert_eq!(pins.len(), 2);
    assert!(pins[0].link.is_none());
    assert_eq!(pins[1].link.as_deref(), Some("https://example.com/2"));
    // Fields the response left out decode as zero values.
    assert_eq!(pins[0].counts.likes, 0);
    assert!(pins[0].created_at.is_none());
}

#[test]
fn deserialize_last_page() {
    let json = load_fixture("board_pins_page2.json");
    let resp: Envelope<Vec<Pin>> = serde_json::from_str(&json).unwrap();
    assert!(resp.page.is_last());
    assert_eq!(resp.page.cursor(), None);
}

#[test]
fn deserialize_interests() {
    let json = load_fixture("interests.json");
    let resp: Envelope<Vec<Interest>> = serde_json::from_str(&json).unwrap();
    let interests = resp.data.unwrap();
    assert_eq!(interests.len(), 2);
    assert_eq!(interests[0].name, "Cooking");
    assert!(!resp.page.is_last());
}

#[test]
fn deserialize_access_token_top_level() {
    let json = load_fixture("access_token.json");
    let token: AccessToken = serde_json::from_str(&json).unwrap();
    assert_eq!(token.access_token, "AfakeTokenValue1234567890");
    assert_eq!(token.token_type, "bearer");
    assert_eq!(token.scope, vec!["read_public", "write_public"]);
    assert!(token.error.is_none());
}

#[test]
fn deserialize_error_envelope() {
    let json = load_fixture("not_found.json");
    let resp: Envelope<Board> = serde_json::from_str(&json).unwrap();
    assert!(resp.data.is_none());
    assert_eq!(resp.message.as_deref(), Some("Board not found."));
}

#[test]
fn deserialize_malformed_json_returns_error() {
    let bad_json = r#"{"data": not valid json}"#;
    let result = serde_json::from_str::<Envelope<User>>(bad_json);
    assert!(result.is_err());
}

#[test]
fn deserialize_invalid_timestamp_returns_error() {
    let json = r#"{"data": {"id": "1", "created_at": "last tuesday"}}"#;
    let result = serde_json::from_str::<Envelope<User>>(json);
    assert!(result.is_err());
}
