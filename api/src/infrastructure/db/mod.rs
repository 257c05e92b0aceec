use sqlx::{Pool, Postgres};

use crate::application::ports::user_repository::RepoError;

pub type PgPool = Pool<Postgres>;

const UNIQUE_VIOLATION: &str = "23505";

pub async fn connect_pool(database_url: &str) -> anyhow::Result<PgPool> {
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;
    Ok(pool)
}

pub async fn migrate(pool: &PgPool) -> anyhow::Result<()> {
    // Uses compile-time embedded migrations under ./migrations
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

/// Maps unique-constraint violations to `RepoError::Conflict`.
pub fn repo_error(err: sqlx::Error) -> RepoError {
    if let sqlx::Error::Database(db) = &err {
        if db.code().as_deref() == Some(UNIQUE_VIOLATION) {
            return RepoError::Conflict(db.constraint().unwrap_or("unique").to_string());
        }
    }
    RepoError::Other(err.into())
}

/// `%q%` with LIKE wildcards in `q` escaped, for use with `ESCAPE '\'`.
pub fn contains_pattern(q: &str) -> String {
    let mut out = String::with_capacity(q.len() + 2);
    out.push('%');
    for ch in q.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(ch);
    }
    out.push('%');
    out
}

pub mod repositories;
