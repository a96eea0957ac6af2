use crate::modules::restaurants::core::restaurant::Restaurant;
use async_trait::async_trait;

#[async_trait]
pub trait RestaurantQueries: Send + Sync {
    /// All restaurants, ordered by id.
    async fn list_all(&self) -> anyhow::Result<Vec<Restaurant>>;
}
