use crate::modules::restaurants::core::restaurant::{NewRestaurant, Restaurant, RestaurantPatch};
use async_trait::async_trait;

#[async_trait]
pub trait RestaurantRepository: Send + Sync {
    async fn insert(&self, restaurant: NewRestaurant) -> anyhow::Result<Restaurant>;

    /// Returns `None` when no restaurant has the given id.
    async fn update(&self, id: i32, patch: RestaurantPatch) -> anyhow::Result<Option<Restaurant>>;
}
