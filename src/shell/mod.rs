// Composition root.
//
// Responsibilities
// - Read config from the environment profile selected by the run mode.
// - Connect the datastore and create the tables the feature modules own.
// - Build the GraphQL schema from the feature modules' resolvers.
// - Expose the HTTP router to the binary.

pub mod app_module;
pub mod graphql;
pub mod http;
pub mod state;
