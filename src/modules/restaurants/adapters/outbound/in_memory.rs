// In memory restaurant store.
//
// Purpose
// - Exercise use cases and the GraphQL schema without a database.
//
// Responsibilities
// - Keep rows in id order and hand out ids the way a serial column does.

use crate::modules::restaurants::adapters::outbound::restaurant_repository::RestaurantRepository;
use crate::modules::restaurants::core::restaurant::{NewRestaurant, Restaurant, RestaurantPatch};
use crate::modules::restaurants::use_cases::list_restaurants::queries_port::RestaurantQueries;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryRestaurantRepository {
    rows: RwLock<BTreeMap<i32, Restaurant>>,
    next_id: RwLock<i32>,
    is_offline: bool,
}

impl InMemoryRestaurantRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> anyhow::Result<()> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Restaurant repository offline"));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl RestaurantQueries for InMemoryRestaurantRepository {
    async fn list_all(&self) -> anyhow::Result<Vec<Restaurant>> {
        self.ensure_online()?;
        Ok(self.rows.read().await.values().cloned().collect())
    }
}

#[async_trait::async_trait]
impl RestaurantRepository for InMemoryRestaurantRepository {
    async fn insert(&self, restaurant: NewRestaurant) -> anyhow::Result<Restaurant> {
        self.ensure_online()?;

        let id = {
            let mut next_id = self.next_id.write().await;
            *next_id += 1;
            *next_id
        };
        let row = restaurant.with_id(id);
        self.rows.write().await.insert(id, row.clone());
        Ok(row)
    }

    async fn update(&self, id: i32, patch: RestaurantPatch) -> anyhow::Result<Option<Restaurant>> {
        self.ensure_online()?;

        let mut guard = self.rows.write().await;
        let Some(current) = guard.remove(&id) else {
            return Ok(None);
        };
        let updated = current.apply(patch);
        guard.insert(id, updated.clone());
        Ok(Some(updated))
    }
}
