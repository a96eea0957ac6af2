pub mod shared {
    pub mod core {
        pub mod feature_module;
    }
    pub mod config {
        pub mod app_config;
        pub mod environment;
        pub mod error;
    }
    pub mod infrastructure {
        pub mod database;
    }
}

pub mod modules {
    pub mod restaurants {
        pub mod errors;
        pub mod module;
        pub mod core {
            pub mod restaurant;
        }
        pub mod use_cases {
            pub mod list_restaurants {
                pub mod queries_port;
                pub mod inbound {
                    pub mod graphql;
                }
            }
            pub mod create_restaurant {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                }
            }
            pub mod update_restaurant {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod in_memory;
                pub mod postgres;
                pub mod restaurant_repository;
            }
        }
    }
}

pub mod shell;
