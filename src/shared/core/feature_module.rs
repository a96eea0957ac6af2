// A feature module is a unit of business logic included into the application graph.
//
// Each module names itself and lists the entity tables it owns so the datastore can
// create them at startup. Its GraphQL types are merged into the schema roots in
// `shell::graphql`.

use crate::shared::infrastructure::database::EntitySchema;

pub trait FeatureModule: Send + Sync {
    fn name(&self) -> &'static str;

    fn entities(&self) -> Vec<EntitySchema>;
}
