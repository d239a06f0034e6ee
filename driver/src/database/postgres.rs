use error_stack::Report;
use sqlx::pool::PoolConnection;
use sqlx::{PgPool, Postgres};

use kernel::interface::database::DatabaseConnection;
use kernel::KernelError;

use crate::env;

pub use self::book::*;

mod book;

static POSTGRES_URL: &str = "POSTGRES_URL";

/// Connection pool created once at process start and shared by every request.
/// Dropping it at shutdown releases the connections.
pub struct PostgresDatabase {
    pool: PgPool,
}

impl PostgresDatabase {
    pub async fn new() -> error_stack::Result<Self, KernelError> {
        let url = env(POSTGRES_URL)?;
        let pool = PgPool::connect(&url).await.convert_error()?;
        tracing::debug!("connected to postgres");
        Ok(Self { pool })
    }
}

#[async_trait::async_trait]
impl DatabaseConnection for PostgresDatabase {
    type Connection = PoolConnection<Postgres>;

    async fn acquire(&self) -> error_stack::Result<Self::Connection, KernelError> {
        let con = self.pool.acquire().await.convert_error()?;
        Ok(con)
    }
}

pub(in crate::database) trait ConvertError {
    type Ok;
    fn convert_error(self) -> error_stack::Result<Self::Ok, KernelError>;
}

impl<T> ConvertError for Result<T, sqlx::Error> {
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(|error| match &error {
            sqlx::Error::PoolTimedOut => Report::from(error).change_context(KernelError::Timeout),
            sqlx::Error::Database(e)
                if matches!(e.kind(), sqlx::error::ErrorKind::UniqueViolation) =>
            {
                Report::from(error).change_context(KernelError::Conflict)
            }
            _ => Report::from(error).change_context(KernelError::Internal),
        })
    }
}
