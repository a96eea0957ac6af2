use crate::modules::restaurants::adapters::outbound::restaurant_repository::RestaurantRepository;
use crate::modules::restaurants::core::restaurant::Restaurant;
use crate::modules::restaurants::errors::RestaurantError;
use crate::modules::restaurants::use_cases::create_restaurant::command::CreateRestaurant;
use std::sync::Arc;
use validator::Validate;

pub struct CreateRestaurantHandler {
    repository: Arc<dyn RestaurantRepository>,
}

impl CreateRestaurantHandler {
    pub fn new(repository: Arc<dyn RestaurantRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, command: CreateRestaurant) -> Result<Restaurant, RestaurantError> {
        command.validate()?;
        let restaurant = self.repository.insert(command.into()).await?;
        tracing::info!(restaurant_id = restaurant.id, name = %restaurant.name, "restaurant created");
        Ok(restaurant)
    }
}

#[cfg(test)]
mod create_restaurant_handler_tests {
    use super::*;
    use crate::modules::restaurants::adapters::outbound::in_memory::InMemoryRestaurantRepository;
    use crate::modules::restaurants::use_cases::list_restaurants::queries_port::RestaurantQueries;
    use crate::tests::fixtures::commands::create_restaurant::CreateRestaurantBuilder;
    use rstest::{fixture, rstest};

    type BeforeEachReturn = (CreateRestaurant, InMemoryRestaurantRepository);

    #[fixture]
    fn before_each() -> BeforeEachReturn {
        (
            CreateRestaurantBuilder::new().build(),
            InMemoryRestaurantRepository::new(),
        )
    }

    #[rstest]
    #[tokio::test]
    async fn handle_create_persists_the_restaurant(before_each: BeforeEachReturn) {
        let (command, repository) = before_each;
        let repository = Arc::new(repository);
        let handler = CreateRestaurantHandler::new(repository.clone());

        let created = handler.handle(command.clone()).await.expect("handle failed");

        assert_eq!(created.id, 1);
        assert_eq!(created.name, command.name);
        assert_eq!(repository.list_all().await.unwrap(), vec![created]);
    }

    #[rstest]
    #[tokio::test]
    async fn handle_create_rejects_an_invalid_name(before_each: BeforeEachReturn) {
        let (_, repository) = before_each;
        let repository = Arc::new(repository);
        let handler = CreateRestaurantHandler::new(repository.clone());
        let command = CreateRestaurantBuilder::new().name("Pho").build();

        let result = handler.handle(command).await;

        assert!(matches!(result, Err(RestaurantError::Validation(_))));
        assert!(repository.list_all().await.unwrap().is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn handle_create_fails_if_repository_is_offline(before_each: BeforeEachReturn) {
        let (command, mut repository) = before_each;
        repository.toggle_offline();
        let handler = CreateRestaurantHandler::new(Arc::new(repository));

        let result = handler.handle(command).await;

        assert!(matches!(result, Err(RestaurantError::Repository(_))));
        assert_eq!(result.unwrap_err().to_string(), "Restaurant repository offline");
    }
}
