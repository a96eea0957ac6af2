use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::restaurants::core::restaurant::Restaurant;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
#[graphql(name = "Restaurant")]
pub struct GqlRestaurant {
    pub id: i32,
    pub name: String,
    pub is_vegan: bool,
    pub address: String,
    pub owners_name: String,
    pub category_name: String,
}

impl From<Restaurant> for GqlRestaurant {
    fn from(r: Restaurant) -> Self {
        Self {
            id: r.id,
            name: r.name,
            is_vegan: r.is_vegan,
            address: r.address,
            owners_name: r.owners_name,
            category_name: r.category_name,
        }
    }
}

#[derive(Default)]
pub struct ListRestaurantsQuery;

#[Object]
impl ListRestaurantsQuery {
    async fn restaurants(&self, context: &Context<'_>) -> GqlResult<Vec<GqlRestaurant>> {
        let state = context.data_unchecked::<AppState>();
        let list = state.queries.list_all().await?;
        Ok(list.into_iter().map(Into::into).collect())
    }
}
