// Postgres restaurant store backed by sqlx.

use crate::modules::restaurants::adapters::outbound::restaurant_repository::RestaurantRepository;
use crate::modules::restaurants::core::restaurant::{NewRestaurant, Restaurant, RestaurantPatch};
use crate::modules::restaurants::use_cases::list_restaurants::queries_port::RestaurantQueries;
use crate::shared::infrastructure::database::EntitySchema;
use sqlx::postgres::PgPool;

pub const RESTAURANT_SCHEMA: EntitySchema = EntitySchema {
    table: "restaurant",
    ddl: r#"CREATE TABLE IF NOT EXISTS restaurant (
    id SERIAL PRIMARY KEY,
    name VARCHAR NOT NULL,
    is_vegan BOOLEAN NOT NULL DEFAULT TRUE,
    address VARCHAR NOT NULL,
    owners_name VARCHAR NOT NULL,
    category_name VARCHAR NOT NULL
)"#,
};

const COLUMNS: &str = "id, name, is_vegan, address, owners_name, category_name";

#[derive(sqlx::FromRow)]
struct RestaurantRow {
    id: i32,
    name: String,
    is_vegan: bool,
    address: String,
    owners_name: String,
    category_name: String,
}

impl From<RestaurantRow> for Restaurant {
    fn from(row: RestaurantRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            is_vegan: row.is_vegan,
            address: row.address,
            owners_name: row.owners_name,
            category_name: row.category_name,
        }
    }
}

pub struct PostgresRestaurantRepository {
    pool: PgPool,
}

impl PostgresRestaurantRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl RestaurantQueries for PostgresRestaurantRepository {
    async fn list_all(&self) -> anyhow::Result<Vec<Restaurant>> {
        let rows = sqlx::query_as::<_, RestaurantRow>(&format!(
            "SELECT {COLUMNS} FROM restaurant ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Restaurant::from).collect())
    }
}

#[async_trait::async_trait]
impl RestaurantRepository for PostgresRestaurantRepository {
    async fn insert(&self, restaurant: NewRestaurant) -> anyhow::Result<Restaurant> {
        let row = sqlx::query_as::<_, RestaurantRow>(&format!(
            "INSERT INTO restaurant (name, is_vegan, address, owners_name, category_name) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {COLUMNS}"
        ))
        .bind(restaurant.name)
        .bind(restaurant.is_vegan)
        .bind(restaurant.address)
        .bind(restaurant.owners_name)
        .bind(restaurant.category_name)
        .fetch_one(&self.pool)
        .await?;
        Ok(row.into())
    }

    async fn update(&self, id: i32, patch: RestaurantPatch) -> anyhow::Result<Option<Restaurant>> {
        let row = sqlx::query_as::<_, RestaurantRow>(&format!(
            "UPDATE restaurant SET \
             name = COALESCE($2, name), \
             is_vegan = COALESCE($3, is_vegan), \
             address = COALESCE($4, address), \
             owners_name = COALESCE($5, owners_name), \
             category_name = COALESCE($6, category_name) \
             WHERE id = $1 RETURNING {COLUMNS}"
        ))
        .bind(id)
        .bind(patch.name)
        .bind(patch.is_vegan)
        .bind(patch.address)
        .bind(patch.owners_name)
        .bind(patch.category_name)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(Restaurant::from))
    }
}

#[cfg(test)]
mod postgres_restaurant_repository_tests {
    use super::*;
    use crate::shared::config::environment::{EnvironmentProfile, process_env};
    use crate::shared::infrastructure::database::{DatabaseConfig, connect, synchronize};
    use crate::tests::fixtures::commands::create_restaurant::CreateRestaurantBuilder;
    use rstest::rstest;

    #[rstest]
    fn it_should_create_the_table_idempotently() {
        assert_eq!(RESTAURANT_SCHEMA.table, "restaurant");
        assert!(RESTAURANT_SCHEMA.ddl.starts_with("CREATE TABLE IF NOT EXISTS restaurant"));
        assert!(RESTAURANT_SCHEMA.ddl.contains("is_vegan BOOLEAN NOT NULL DEFAULT TRUE"));
    }

    // Needs a reachable Postgres; run with DB_HOST, DB_USERNAME and DB_PASSWORD exported.
    #[rstest]
    #[tokio::test]
    #[ignore]
    async fn integration_should_insert_update_and_list() {
        let profile = EnvironmentProfile::from_pairs(process_env());
        let config = DatabaseConfig::from_profile(&profile).expect("db credentials");
        let pool = connect(&config).await.expect("connect");
        synchronize(&pool, &[RESTAURANT_SCHEMA]).await.expect("synchronize");

        let repository = PostgresRestaurantRepository::new(pool);
        let created = repository
            .insert(CreateRestaurantBuilder::new().build().into())
            .await
            .expect("insert");
        let updated = repository
            .update(
                created.id,
                RestaurantPatch {
                    is_vegan: Some(false),
                    ..RestaurantPatch::default()
                },
            )
            .await
            .expect("update")
            .expect("row should exist");

        assert!(!updated.is_vegan);
        let listed = repository.list_all().await.expect("list");
        assert!(listed.contains(&updated));
    }
}
