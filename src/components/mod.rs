//! UI Components
//!
//! Leptos components for the storefront.

mod all_foods;
mod food_card;
mod login_panel;
mod nav_bar;
mod pagination_bar;
mod search_sort_bar;
mod toaster;

pub use all_foods::AllFoods;
pub use food_card::FoodCard;
pub use login_panel::LoginPanel;
pub use nav_bar::NavBar;
pub use pagination_bar::PaginationBar;
pub use search_sort_bar::SearchSortBar;
pub use toaster::Toaster;
