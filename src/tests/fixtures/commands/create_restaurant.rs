// Shared test fixture for the CreateRestaurant command.

use crate::modules::restaurants::use_cases::create_restaurant::command::CreateRestaurant;

pub struct CreateRestaurantBuilder {
    inner: CreateRestaurant,
}

impl Default for CreateRestaurantBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl CreateRestaurantBuilder {
    pub fn new() -> Self {
        Self {
            inner: CreateRestaurant {
                name: "Bistro".to_string(),
                is_vegan: true,
                address: "Main st 1".to_string(),
                owners_name: "Ada".to_string(),
                category_name: "French".to_string(),
            },
        }
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn is_vegan(mut self, v: bool) -> Self {
        self.inner.is_vegan = v;
        self
    }

    pub fn address(mut self, v: impl Into<String>) -> Self {
        self.inner.address = v.into();
        self
    }

    pub fn owners_name(mut self, v: impl Into<String>) -> Self {
        self.inner.owners_name = v.into();
        self
    }

    pub fn category_name(mut self, v: impl Into<String>) -> Self {
        self.inner.category_name = v.into();
        self
    }

    pub fn build(self) -> CreateRestaurant {
        self.inner
    }
}

#[cfg(test)]
mod create_restaurant_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = CreateRestaurantBuilder::default()
            .name("Trattoria")
            .is_vegan(false)
            .address("Canal 3")
            .owners_name("Luca")
            .category_name("Italian")
            .build();

        assert_eq!(custom.name, "Trattoria");
        assert!(!custom.is_vegan);
        assert_eq!(custom.address, "Canal 3");
        assert_eq!(custom.owners_name, "Luca");
        assert_eq!(custom.category_name, "Italian");
    }
}
