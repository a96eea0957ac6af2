use crate::modules::restaurants::adapters::outbound::in_memory::InMemoryRestaurantRepository;
use crate::modules::restaurants::adapters::outbound::postgres::PostgresRestaurantRepository;
use crate::modules::restaurants::adapters::outbound::restaurant_repository::RestaurantRepository;
use crate::modules::restaurants::use_cases::create_restaurant::handler::CreateRestaurantHandler;
use crate::modules::restaurants::use_cases::list_restaurants::queries_port::RestaurantQueries;
use crate::modules::restaurants::use_cases::update_restaurant::handler::UpdateRestaurantHandler;
use sqlx::postgres::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub queries: Arc<dyn RestaurantQueries>,
    pub create_restaurant: Arc<CreateRestaurantHandler>,
    pub update_restaurant: Arc<UpdateRestaurantHandler>,
}

impl AppState {
    pub fn from_store<S>(store: Arc<S>) -> Self
    where
        S: RestaurantQueries + RestaurantRepository + 'static,
    {
        Self {
            queries: store.clone(),
            create_restaurant: Arc::new(CreateRestaurantHandler::new(store.clone())),
            update_restaurant: Arc::new(UpdateRestaurantHandler::new(store)),
        }
    }

    pub fn postgres(pool: PgPool) -> Self {
        Self::from_store(Arc::new(PostgresRestaurantRepository::new(pool)))
    }

    pub fn in_memory() -> Self {
        Self::from_store(Arc::new(InMemoryRestaurantRepository::new()))
    }
}
