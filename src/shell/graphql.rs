use async_graphql::{EmptySubscription, MergedObject, Schema};

use crate::modules::restaurants::module::{RestaurantsMutation, RestaurantsQuery};
use crate::shared::config::app_config::{AutoSchemaFile, GraphqlConfig};
pub use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(RestaurantsQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(RestaurantsMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

/// Writes the generated SDL when the config names a file; in-memory schemas are left alone.
pub async fn export_sdl(schema: &AppSchema, config: &GraphqlConfig) -> std::io::Result<()> {
    if let AutoSchemaFile::Path(path) = &config.auto_schema_file {
        tokio::fs::write(path, schema.sdl()).await?;
        tracing::info!(path = %path.display(), "GraphQL schema written");
    }
    Ok(())
}
