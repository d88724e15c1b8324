//! Frontend Models
//!
//! Data structures matching backend and identity-provider payloads.

use serde::{Deserialize, Deserializer, Serialize};

use crate::config::FALLBACK_FOOD_IMAGE;

/// Food item as returned by `/allFoods`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FoodItem {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(rename = "FoodName")]
    pub name: String,
    /// Decimal string, parsed on demand; missing or null reads as ""
    #[serde(rename = "Price", default, deserialize_with = "lenient_text")]
    pub price: String,
    #[serde(rename = "Description", default)]
    pub description: String,
    #[serde(rename = "Image", default)]
    pub image_url: Option<String>,
    #[serde(rename = "Chef", default)]
    pub chef_name: Option<String>,
    #[serde(rename = "addedByName", default)]
    pub added_by_name: Option<String>,
    #[serde(rename = "addedByEmail", default)]
    pub owner_email: String,
    #[serde(rename = "Quantity", default, deserialize_with = "lenient_int")]
    pub quantity: i64,
    #[serde(rename = "SoldCount", default, deserialize_with = "lenient_opt_int")]
    pub sold_count: Option<i64>,
}

impl FoodItem {
    pub fn image_or_fallback(&self) -> &str {
        non_empty(self.image_url.as_deref()).unwrap_or(FALLBACK_FOOD_IMAGE)
    }

    pub fn chef_label(&self) -> &str {
        non_empty(self.chef_name.as_deref())
            .or_else(|| non_empty(self.added_by_name.as_deref()))
            .unwrap_or("Unknown chef")
    }

    /// Zero counts read as missing, same as an absent field
    pub fn sold_label(&self) -> String {
        match self.sold_count {
            Some(n) if n != 0 => n.to_string(),
            _ => "n/a".to_string(),
        }
    }
}

/// `/foodsCount` response
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct FoodsCount {
    #[serde(deserialize_with = "lenient_int")]
    pub count: i64,
}

/// Signed-in identity reported by the identity provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "photoURL", default)]
    pub photo_url: Option<String>,
}

impl SessionUser {
    pub fn email(&self) -> Option<&str> {
        non_empty(self.email.as_deref())
    }

    /// Photo URL without its query string (provider size hints)
    pub fn avatar_url(&self) -> Option<&str> {
        non_empty(self.photo_url.as_deref()).map(|url| url.split('?').next().unwrap_or(url))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(serde_json::Number),
}

impl TextOrNumber {
    fn into_text(self) -> String {
        match self {
            TextOrNumber::Text(s) => s,
            TextOrNumber::Number(n) => n.to_string(),
        }
    }

    fn to_int(&self) -> Option<i64> {
        match self {
            TextOrNumber::Text(s) => s.trim().parse().ok(),
            TextOrNumber::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        }
    }
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Option::<TextOrNumber>::deserialize(deserializer)?;
    Ok(value.map(TextOrNumber::into_text).unwrap_or_default())
}

fn lenient_int<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    Ok(lenient_opt_int(deserializer)?.unwrap_or_default())
}

fn lenient_opt_int<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    let value = Option::<TextOrNumber>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(TextOrNumber::to_int))
}
