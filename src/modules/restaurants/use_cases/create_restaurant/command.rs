use crate::modules::restaurants::core::restaurant::NewRestaurant;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct CreateRestaurant {
    #[validate(length(min = 5, max = 10))]
    pub name: String,
    pub is_vegan: bool,
    pub address: String,
    pub owners_name: String,
    pub category_name: String,
}

impl From<CreateRestaurant> for NewRestaurant {
    fn from(command: CreateRestaurant) -> Self {
        Self {
            name: command.name,
            is_vegan: command.is_vegan,
            address: command.address,
            owners_name: command.owners_name,
            category_name: command.category_name,
        }
    }
}

#[cfg(test)]
mod create_restaurant_command_tests {
    use crate::tests::fixtures::commands::create_restaurant::CreateRestaurantBuilder;
    use rstest::rstest;
    use validator::Validate;

    #[rstest]
    #[case("Bistro")]
    #[case("12345")]
    #[case("1234567890")]
    fn it_should_accept_names_between_5_and_10_characters(#[case] name: &str) {
        let command = CreateRestaurantBuilder::new().name(name).build();
        assert!(command.validate().is_ok());
    }

    #[rstest]
    #[case("")]
    #[case("Shop")]
    #[case("The Big Kitchen")]
    fn it_should_reject_names_outside_the_length_range(#[case] name: &str) {
        let command = CreateRestaurantBuilder::new().name(name).build();
        let errors = command.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }
}
