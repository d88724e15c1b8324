//! Food Card Component
//!
//! One food item in the listing grid.

use leptos::prelude::*;

use crate::models::FoodItem;

#[component]
pub fn FoodCard(food: FoodItem) -> impl IntoView {
    let image = food.image_or_fallback().to_string();
    let chef = food.chef_label().to_string();
    let sold = food.sold_label();
    let details_href = format!("/allFoods/{}", food.id);

    view! {
        <div class="food-card">
            <div class="food-card-image">
                <img src=image alt=food.name.clone() />
                <div class="price-badge">"$" {food.price}</div>
            </div>

            <div class="food-card-body">
                <div class="food-card-header">
                    <div>
                        <h3 class="food-name">{food.name}</h3>
                        <p class="food-chef">"By " {chef}</p>
                    </div>
                    <div class="sold-badge">{sold} " sold"</div>
                </div>

                <p class="food-description">{food.description}</p>

                <div class="food-card-footer">
                    <div>"Quantity: " {food.quantity}</div>
                    <a href=details_href>
                        <button class="details-btn">"View Details"</button>
                    </a>
                </div>
            </div>
        </div>
    }
}
