//! Embedded schema migrations.
//!
//! Migrations live in the workspace `migrations/` directory and are compiled
//! into the binary. They are reversible, which is what makes `Reset` possible.

use sqlx::migrate::{MigrateError, Migrator};
use tracing::{info, warn};

use super::pool::DatabasePool;

/// All schema migrations, embedded at compile time.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// How to bring the schema up to date at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MigrationMode {
    /// Apply pending migrations only. Existing data is kept.
    #[default]
    Apply,
    /// Revert every migration, then apply them all again.
    /// Drops all chats and messages.
    Reset,
}

impl DatabasePool {
    /// Run migrations according to `mode`.
    pub async fn migrate(&self, mode: MigrationMode) -> Result<(), MigrateError> {
        if mode == MigrationMode::Reset {
            warn!("Reverting all migrations; every chat and message will be dropped");
            MIGRATOR.undo(&self.pool, 0).await?;
        }

        MIGRATOR.run(&self.pool).await?;
        info!(
            migrations = MIGRATOR
                .iter()
                .filter(|m| m.migration_type.is_up_migration())
                .count(),
            reset = mode == MigrationMode::Reset,
            "Migrations completed"
        );
        Ok(())
    }
}
