use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Extension, Router,
    response::Html,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::shared::config::app_config::{GraphqlConfig, GraphqlDriver};
use crate::shell::graphql::AppSchema;

pub fn router(schema: AppSchema, config: &GraphqlConfig) -> Router {
    let endpoint = config.path;
    let route = match config.driver {
        GraphqlDriver::AsyncGraphql if config.playground => {
            get(move || graphiql(endpoint)).post(graphql)
        }
        GraphqlDriver::AsyncGraphql => post(graphql),
    };

    Router::new()
        .route(endpoint, route)
        .layer(Extension(schema))
        .layer(TraceLayer::new_for_http())
}

async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql(endpoint: &'static str) -> Html<String> {
    Html(GraphiQLSource::build().endpoint(endpoint).finish())
}
