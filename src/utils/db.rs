use diesel::SqliteConnection;
use diesel::connection::SimpleConnection;
use diesel::r2d2::{self, ConnectionManager, CustomizeConnection, Pool, PoolError, PooledConnection};

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConn = PooledConnection<ConnectionManager<SqliteConnection>>;

pub const IN_MEMORY_URL: &str = ":memory:";

const SCHEMA_SQL: &str = "
PRAGMA foreign_keys = ON;
PRAGMA busy_timeout = 5000;
CREATE TABLE IF NOT EXISTS accounts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    balance TEXT NOT NULL,
    opened_at TIMESTAMP NOT NULL,
    kind TEXT NOT NULL CHECK (kind IN ('CHECKING', 'SAVINGS'))
);
CREATE TABLE IF NOT EXISTS transactions (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    amount TEXT NOT NULL,
    occurred_at TIMESTAMP NOT NULL,
    kind TEXT NOT NULL CHECK (kind IN ('DEPOSIT', 'WITHDRAWAL')),
    account_id INTEGER NOT NULL REFERENCES accounts (id)
);
CREATE INDEX IF NOT EXISTS transactions_account_id_idx ON transactions (account_id);
";

/// Applies pragmas and the schema to every connection the pool opens.
#[derive(Debug)]
struct SchemaSetup;

impl CustomizeConnection<SqliteConnection, r2d2::Error> for SchemaSetup {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), r2d2::Error> {
        conn.batch_execute(SCHEMA_SQL)
            .map_err(r2d2::Error::QueryError)
    }
}

/// Builds the SQLite pool. An in-memory database lives only as long as its
/// connection, so for `:memory:` the pool holds exactly one connection that
/// is never recycled.
pub fn build_pool(database_url: &str) -> Result<DbPool, PoolError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let builder = Pool::builder().connection_customizer(Box::new(SchemaSetup));

    let builder = if database_url == IN_MEMORY_URL {
        builder
            .max_size(1)
            .min_idle(Some(1))
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        builder.max_size(8)
    };

    builder.build(manager)
}

pub fn get_conn(pool: &DbPool) -> Result<DbConn, PoolError> {
    pool.get()
}
