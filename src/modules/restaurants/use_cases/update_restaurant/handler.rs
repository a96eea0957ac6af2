use crate::modules::restaurants::adapters::outbound::restaurant_repository::RestaurantRepository;
use crate::modules::restaurants::core::restaurant::Restaurant;
use crate::modules::restaurants::errors::RestaurantError;
use crate::modules::restaurants::use_cases::update_restaurant::command::UpdateRestaurant;
use std::sync::Arc;
use validator::Validate;

pub struct UpdateRestaurantHandler {
    repository: Arc<dyn RestaurantRepository>,
}

impl UpdateRestaurantHandler {
    pub fn new(repository: Arc<dyn RestaurantRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, command: UpdateRestaurant) -> Result<Restaurant, RestaurantError> {
        command.validate()?;
        let (id, patch) = command.into_parts();
        let restaurant = self
            .repository
            .update(id, patch)
            .await?
            .ok_or(RestaurantError::NotFound(id))?;
        tracing::info!(restaurant_id = id, "restaurant updated");
        Ok(restaurant)
    }
}
