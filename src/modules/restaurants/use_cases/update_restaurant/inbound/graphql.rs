use async_graphql::{Context, InputObject, Object, Result as GqlResult};

use crate::modules::restaurants::errors::RestaurantError;
use crate::modules::restaurants::use_cases::update_restaurant::command::UpdateRestaurant;
use crate::shell::state::AppState;

#[derive(InputObject, Default)]
pub struct UpdateRestaurantData {
    pub name: Option<String>,
    pub is_vegan: Option<bool>,
    pub address: Option<String>,
    pub owners_name: Option<String>,
    pub category_name: Option<String>,
}

#[derive(InputObject)]
pub struct UpdateRestaurantInput {
    pub id: i32,
    #[graphql(default)]
    pub data: UpdateRestaurantData,
}

impl From<UpdateRestaurantInput> for UpdateRestaurant {
    fn from(input: UpdateRestaurantInput) -> Self {
        Self {
            id: input.id,
            name: input.data.name,
            is_vegan: input.data.is_vegan,
            address: input.data.address,
            owners_name: input.data.owners_name,
            category_name: input.data.category_name,
        }
    }
}

#[derive(Default)]
pub struct UpdateRestaurantMutation;

#[Object]
impl UpdateRestaurantMutation {
    async fn update_restaurant(
        &self,
        context: &Context<'_>,
        input: UpdateRestaurantInput,
    ) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();

        match state.update_restaurant.handle(input.into()).await {
            Ok(_) => Ok(true),
            Err(e @ RestaurantError::Validation(_)) => Err(async_graphql::Error::new(e.to_string())),
            Err(RestaurantError::NotFound(id)) => {
                tracing::warn!(restaurant_id = id, "update for unknown restaurant");
                Ok(false)
            }
            Err(e) => {
                tracing::error!(error = %e, "could not update restaurant");
                Ok(false)
            }
        }
    }
}
