//! Rich pin metadata. Each pin carries at most a few of these sections.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{null_as_default, timestamp};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct PinMetadata {
    pub article: Option<Article>,
    pub link: Option<MetadataLink>,
    pub place: Option<Place>,
    pub movie: Option<Movie>,
    pub product: Option<Product>,
    pub recipe: Option<Recipe>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct MetadataPerson {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Article {
    #[serde(with = "timestamp")]
    pub published_at: Option<DateTime<Utc>>,
    pub description: Option<String>,
    pub name: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub authors: Vec<MetadataPerson>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct MetadataLink {
    pub locale: Option<String>,
    pub title: Option<String>,
    pub site_name: Option<String>,
    pub description: Option<String>,
    pub favicon: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Place {
    pub category: Option<String>,
    pub name: Option<String>,
    pub locality: Option<String>,
    pub country: Option<String>,
    pub region: Option<String>,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub source_url: Option<String>,
    pub street: Option<String>,
    pub postal_code: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Movie {
    pub rating: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub directors: Vec<MetadataPerson>,
    #[serde(deserialize_with = "null_as_default")]
    pub actors: Vec<MetadataPerson>,
    pub name: Option<String>,
    #[serde(with = "timestamp")]
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Product {
    pub name: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub offer: ProductOffer,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ProductOffer {
    /// Price as formatted by the merchant, e.g. `$12.99`.
    pub price: Option<String>,
    pub in_stock: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Recipe {
    #[serde(deserialize_with = "null_as_default")]
    pub servings: RecipeServings,
    pub name: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub ingredients: Vec<RecipeCategory>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct RecipeServings {
    pub serves: Option<String>,
    pub summary: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct RecipeCategory {
    pub category: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub ingredients: Vec<RecipeIngredient>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct RecipeIngredient {
    pub amount: Option<String>,
    pub name: Option<String>,
}
