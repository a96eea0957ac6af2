// The restaurants feature module: its GraphQL roots and the tables it owns.

use async_graphql::MergedObject;

use crate::modules::restaurants::adapters::outbound::postgres::RESTAURANT_SCHEMA;
use crate::modules::restaurants::use_cases::create_restaurant::inbound::graphql::CreateRestaurantMutation;
use crate::modules::restaurants::use_cases::list_restaurants::inbound::graphql::ListRestaurantsQuery;
use crate::modules::restaurants::use_cases::update_restaurant::inbound::graphql::UpdateRestaurantMutation;
use crate::shared::core::feature_module::FeatureModule;
use crate::shared::infrastructure::database::EntitySchema;

#[derive(MergedObject, Default)]
pub struct RestaurantsQuery(ListRestaurantsQuery);

#[derive(MergedObject, Default)]
pub struct RestaurantsMutation(CreateRestaurantMutation, UpdateRestaurantMutation);

#[derive(Debug, Default, Clone, Copy)]
pub struct RestaurantsModule;

impl FeatureModule for RestaurantsModule {
    fn name(&self) -> &'static str {
        "restaurants"
    }

    fn entities(&self) -> Vec<EntitySchema> {
        vec![RESTAURANT_SCHEMA]
    }
}
