//! Database Test Utilities
//!
//! Testcontainer management and seeding helpers for integration tests.
//! Tests that go through here need a running Docker daemon and are
//! expected to be `#[ignore]`d in CI environments without one.

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use testcontainers::core::IntoContainerPort;
use testcontainers::runners::AsyncRunner;
use testcontainers::ContainerAsync;
use testcontainers_modules::postgres::Postgres;
use tokio::sync::OnceCell;

const POSTGRES_USER: &str = "test_user";
const POSTGRES_PASSWORD: &str = "test_password";
const POSTGRES_DB: &str = "claims_intake_test";

/// Initial schema, shared with the server's startup migration
static INITIAL_SCHEMA: Lazy<&str> =
    Lazy::new(|| include_str!("../../../migrations/20250601000001_initial_schema.sql"));

/// Connection parameters for a test database
#[derive(Debug, Clone)]
pub struct TestDatabaseConfig {
    pub user: String,
    pub password: String,
    pub database: String,
    pub host: String,
    pub port: u16,
}

impl TestDatabaseConfig {
    /// Creates the database connection URL
    pub fn connection_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.user, self.password, self.host, self.port, self.database
        )
    }
}

/// A wrapper around a PostgreSQL test container
pub struct TestDatabase {
    _container: ContainerAsync<Postgres>,
    pub config: TestDatabaseConfig,
    pub pool: PgPool,
}

impl TestDatabase {
    /// Starts a new PostgreSQL container with the schema applied
    pub async fn new() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let container = Postgres::default()
            .with_db_name(POSTGRES_DB)
            .with_user(POSTGRES_USER)
            .with_password(POSTGRES_PASSWORD)
            .start()
            .await?;

        let port = container.get_host_port_ipv4(5432.tcp()).await?;
        let host = container.get_host().await?.to_string();

        let config = TestDatabaseConfig {
            user: POSTGRES_USER.to_string(),
            password: POSTGRES_PASSWORD.to_string(),
            database: POSTGRES_DB.to_string(),
            host,
            port,
        };

        let pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(30))
            .connect(&config.connection_url())
            .await?;

        sqlx::raw_sql(*INITIAL_SCHEMA).execute(&pool).await?;

        Ok(Self {
            _container: container,
            config,
            pool,
        })
    }

    /// Returns a reference to the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Clears all data while preserving the schema
    pub async fn clear_data(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        for table in ["claims", "procedures", "plans_benefits", "members", "benefits", "plans", "users"] {
            sqlx::query(&format!("TRUNCATE TABLE {} CASCADE", table))
                .execute(&self.pool)
                .await?;
        }
        Ok(())
    }
}

/// Global test database shared across integration tests
static SHARED_TEST_DB: OnceCell<Arc<TestDatabase>> = OnceCell::const_new();

/// Gets or creates a shared test database instance
///
/// # Panics
///
/// Panics if the container or schema fails to initialize.
pub async fn get_shared_test_database() -> Arc<TestDatabase> {
    SHARED_TEST_DB
        .get_or_init(|| async {
            Arc::new(
                TestDatabase::new()
                    .await
                    .expect("Failed to create shared test database"),
            )
        })
        .await
        .clone()
}

type SeedResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Seeds a plan, returning its id
pub async fn seed_plan(pool: &PgPool, name: &str) -> SeedResult<i32> {
    let (id,): (i32,) = sqlx::query_as("INSERT INTO plans (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await?;
    Ok(id)
}

/// Seeds a benefit, returning its id
pub async fn seed_benefit(
    pool: &PgPool,
    name: &str,
    annual_limit: Option<Decimal>,
) -> SeedResult<i32> {
    let (id,): (i32,) =
        sqlx::query_as("INSERT INTO benefits (name, annual_limit) VALUES ($1, $2) RETURNING id")
            .bind(name)
            .bind(annual_limit)
            .fetch_one(pool)
            .await?;
    Ok(id)
}

/// Links a benefit to a plan with its terms, returning the link id
pub async fn link_plan_benefit(
    pool: &PgPool,
    plan_id: i32,
    benefit_id: i32,
    annual_limit: Option<Decimal>,
    is_excluded: bool,
) -> SeedResult<i32> {
    let (id,): (i32,) = sqlx::query_as(
        r#"
        INSERT INTO plans_benefits (plan_id, benefit_id, annual_limit, is_excluded)
        VALUES ($1, $2, $3, $4)
        RETURNING id
        "#,
    )
    .bind(plan_id)
    .bind(benefit_id)
    .bind(annual_limit)
    .bind(is_excluded)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

/// Seeds a member on the given plan, returning their id
pub async fn seed_member(
    pool: &PgPool,
    plan_id: i32,
    member_number: &str,
    active: bool,
) -> SeedResult<i32> {
    let (id,): (i32,) = sqlx::query_as(
        "INSERT INTO members (member_number, active, plan_id) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(member_number)
    .bind(active)
    .bind(plan_id)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

/// Seeds a procedure under the given benefit, returning its id
pub async fn seed_procedure(
    pool: &PgPool,
    benefit_id: i32,
    code: &str,
    average_cost: Decimal,
) -> SeedResult<i32> {
    let (id,): (i32,) = sqlx::query_as(
        "INSERT INTO procedures (code, benefit_id, average_cost) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(code)
    .bind(benefit_id)
    .bind(average_cost)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

/// Seeds an activated user account, returning their id
pub async fn seed_activated_user(
    pool: &PgPool,
    email: &str,
    password_hash: &str,
) -> SeedResult<i32> {
    let (id,): (i32,) = sqlx::query_as(
        r#"
        INSERT INTO users (name, email, activated, password_hash)
        VALUES ('Test User', $1, TRUE, $2)
        RETURNING id
        "#,
    )
    .bind(email)
    .bind(password_hash)
    .fetch_one(pool)
    .await?;
    Ok(id)
}
