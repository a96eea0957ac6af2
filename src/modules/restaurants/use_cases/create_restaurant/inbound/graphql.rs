use async_graphql::{Context, InputObject, Object, Result as GqlResult};

use crate::modules::restaurants::errors::RestaurantError;
use crate::modules::restaurants::use_cases::create_restaurant::command::CreateRestaurant;
use crate::shell::state::AppState;

#[derive(InputObject)]
pub struct CreateRestaurantInput {
    pub name: String,
    #[graphql(default = true)]
    pub is_vegan: bool,
    pub address: String,
    pub owners_name: String,
    pub category_name: String,
}

impl From<CreateRestaurantInput> for CreateRestaurant {
    fn from(input: CreateRestaurantInput) -> Self {
        Self {
            name: input.name,
            is_vegan: input.is_vegan,
            address: input.address,
            owners_name: input.owners_name,
            category_name: input.category_name,
        }
    }
}

#[derive(Default)]
pub struct CreateRestaurantMutation;

#[Object]
impl CreateRestaurantMutation {
    /// Invalid input is reported as an error; a storage failure yields `false`.
    async fn create_restaurant(
        &self,
        context: &Context<'_>,
        input: CreateRestaurantInput,
    ) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();

        match state.create_restaurant.handle(input.into()).await {
            Ok(_) => Ok(true),
            Err(e @ RestaurantError::Validation(_)) => Err(async_graphql::Error::new(e.to_string())),
            Err(e) => {
                tracing::error!(error = %e, "could not create restaurant");
                Ok(false)
            }
        }
    }
}
