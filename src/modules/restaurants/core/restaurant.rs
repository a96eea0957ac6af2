#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Restaurant {
    pub id: i32,
    pub name: String,
    pub is_vegan: bool,
    pub address: String,
    pub owners_name: String,
    pub category_name: String,
}

/// A restaurant that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRestaurant {
    pub name: String,
    pub is_vegan: bool,
    pub address: String,
    pub owners_name: String,
    pub category_name: String,
}

impl NewRestaurant {
    pub fn with_id(self, id: i32) -> Restaurant {
        Restaurant {
            id,
            name: self.name,
            is_vegan: self.is_vegan,
            address: self.address,
            owners_name: self.owners_name,
            category_name: self.category_name,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestaurantPatch {
    pub name: Option<String>,
    pub is_vegan: Option<bool>,
    pub address: Option<String>,
    pub owners_name: Option<String>,
    pub category_name: Option<String>,
}

impl RestaurantPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl Restaurant {
    pub fn apply(mut self, patch: RestaurantPatch) -> Restaurant {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(is_vegan) = patch.is_vegan {
            self.is_vegan = is_vegan;
        }
        if let Some(address) = patch.address {
            self.address = address;
        }
        if let Some(owners_name) = patch.owners_name {
            self.owners_name = owners_name;
        }
        if let Some(category_name) = patch.category_name {
            self.category_name = category_name;
        }
        self
    }
}
