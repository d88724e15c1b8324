//! Food Listing Requests

use gloo_net::http::Request;

use super::decode_json;
use crate::config::app_config;
use crate::error::ApiError;
use crate::models::{FoodItem, FoodsCount};

/// `GET /allFoods?page=&size=`
pub async fn fetch_foods(page: usize, size: usize) -> Result<Vec<FoodItem>, ApiError> {
    let url = app_config().endpoint("/allFoods");
    let response = Request::get(&url)
        .query([("page", page.to_string()), ("size", size.to_string())])
        .send()
        .await?;
    decode_json(response).await
}

/// `GET /foodsCount`
pub async fn fetch_foods_count() -> Result<usize, ApiError> {
    let url = app_config().endpoint("/foodsCount");
    let response = Request::get(&url).send().await?;
    let body: FoodsCount = decode_json(response).await?;
    Ok(usize::try_from(body.count).unwrap_or_default())
}
