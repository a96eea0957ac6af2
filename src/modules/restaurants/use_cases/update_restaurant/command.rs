use crate::modules::restaurants::core::restaurant::RestaurantPatch;
use validator::Validate;

/// Partial update; absent fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct UpdateRestaurant {
    pub id: i32,
    #[validate(length(min = 5, max = 10))]
    pub name: Option<String>,
    pub is_vegan: Option<bool>,
    pub address: Option<String>,
    pub owners_name: Option<String>,
    pub category_name: Option<String>,
}

impl UpdateRestaurant {
    pub fn into_parts(self) -> (i32, RestaurantPatch) {
        (
            self.id,
            RestaurantPatch {
                name: self.name,
                is_vegan: self.is_vegan,
                address: self.address,
                owners_name: self.owners_name,
                category_name: self.category_name,
            },
        )
    }
}
