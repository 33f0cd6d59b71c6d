use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Error, Pool, Sqlite};

/// Create a SQLite connection pool
///
/// # Parameters
/// - `database_url`: SQLite connection string, e.g. `sqlite://recruitment.db`
/// - `max_connections`: Upper bound on pooled connections
///
/// The database file is created if it does not exist. Foreign key
/// enforcement is switched on for every connection.
pub async fn get_connection(
    database_url: &str,
    max_connections: u32,
) -> Result<Pool<Sqlite>, Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}
