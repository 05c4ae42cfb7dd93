use std::time::Duration;

use actix_web::web;
use diesel::connection::SimpleConnection;
use diesel::r2d2::{self, ConnectionManager, CustomizeConnection, PooledConnection};
use diesel::sql_types::Text;
use diesel::{QueryResult, SqliteConnection};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

use crate::errors::{ServiceError, ServiceResult};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub type DbPool = r2d2::Pool<ConnectionManager<SqliteConnection>>;
pub type DbConn = PooledConnection<ConnectionManager<SqliteConnection>>;

// SQLite's built-in lower() only folds ASCII.
diesel::define_sql_function!(fn unicode_lower(x: Text) -> Text);

/// Install the application's SQL functions. Custom functions live on the
/// connection, so every new connection needs them.
pub fn register_functions(conn: &mut SqliteConnection) -> QueryResult<()> {
    unicode_lower_utils::register_impl(conn, |s: String| s.to_lowercase())
}

/// Per-connection setup. SQLite only enforces foreign keys when asked to,
/// and the setting does not persist across connections.
#[derive(Debug, Clone, Copy)]
pub struct ConnectionOptions {
    pub busy_timeout: Duration,
}

impl Default for ConnectionOptions {
    fn default() -> Self {
        Self { busy_timeout: Duration::from_secs(5) }
    }
}

impl CustomizeConnection<SqliteConnection, r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), r2d2::Error> {
        conn.batch_execute(&format!(
            "PRAGMA foreign_keys = ON; PRAGMA busy_timeout = {};",
            self.busy_timeout.as_millis()
        ))
        .map_err(r2d2::Error::QueryError)?;
        register_functions(conn).map_err(r2d2::Error::QueryError)
    }
}

pub fn build_pool(database_url: &str, max_size: u32) -> ServiceResult<DbPool> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let pool = r2d2::Pool::builder()
        .max_size(max_size)
        .connection_customizer(Box::new(ConnectionOptions::default()))
        .build(manager)?;
    Ok(pool)
}

pub fn run_migrations(conn: &mut SqliteConnection) -> ServiceResult<()> {
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| ServiceError::Migration(e.to_string()))?;
    for version in applied {
        log::info!("applied migration {version}");
    }
    Ok(())
}

/// Helper function to get a pooled DB connection
pub fn get_conn(pool: &DbPool) -> ServiceResult<DbConn> {
    Ok(pool.get()?)
}

/// Run `op` on the blocking thread pool with a connection checked out for
/// the duration of the call. The connection goes back to the pool when the
/// closure returns, whatever the outcome.
pub async fn run<T, F>(pool: &DbPool, op: F) -> ServiceResult<T>
where
    F: FnOnce(&mut SqliteConnection) -> ServiceResult<T> + Send + 'static,
    T: Send + 'static,
{
    let pool = pool.clone();
    web::block(move || {
        let mut conn = get_conn(&pool)?;
        op(&mut conn)
    })
    .await?
}
