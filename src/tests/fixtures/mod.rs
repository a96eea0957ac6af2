pub mod profile;

pub mod commands {
    pub mod create_restaurant;
}
