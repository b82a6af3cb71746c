//! One-shot maintenance against the users database: drop the stale
//! `username_1` / `username_1_1` indexes left behind by an earlier unique
//! constraint, then list what remains on the `users` table.

use crate::cli::actions::Action;
use anyhow::{anyhow, Context, Result};
use sqlx::{Connection, PgConnection, Row};
use tracing::{info, instrument};

const STALE_INDEXES: [&str; 2] = ["username_1", "username_1_1"];

/// Handle the maintenance action
#[instrument(skip(action))]
pub async fn handle(action: Action) -> Result<()> {
    let Action::FixUserIndexes { dsn } = action else {
        return Err(anyhow!("not a maintenance action"));
    };

    let mut conn = PgConnection::connect(&dsn)
        .await
        .context("could not connect to the users database")?;

    for index in STALE_INDEXES {
        // DROP INDEX takes no bind parameters; the names are fixed above.
        let dropped = sqlx::query(&format!("DROP INDEX IF EXISTS {index}"))
            .execute(&mut conn)
            .await
            .with_context(|| format!("failed to drop index {index}"))?;

        info!("dropped index {index} ({} objects)", dropped.rows_affected());
        println!("dropped index if present: {index}");
    }

    let remaining = sqlx::query("SELECT indexname FROM pg_indexes WHERE tablename = 'users'")
        .fetch_all(&mut conn)
        .await
        .context("failed to list remaining indexes on users")?;

    println!("remaining indexes on users:");
    for row in remaining {
        let name: String = row.try_get("indexname")?;
        println!("  {name}");
    }

    conn.close().await.context("error closing connection")?;

    Ok(())
}
