use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Create the entry ledger table.
/// Timestamps are RFC 3339 UTC text; `end_at` is NULL only for records
/// imported from documents that carried an open interval.
fn create_entries_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS entries (
            id       TEXT PRIMARY KEY,
            start_at TEXT NOT NULL,
            end_at   TEXT,
            notes    TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_entries_start ON entries(start_at);
        "#,
    )?;
    Ok(())
}

/// Single-row settings record.
fn create_settings_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS settings (
            slot        INTEGER PRIMARY KEY CHECK (slot = 1),
            hourly_rate REAL NOT NULL DEFAULT 0
        );
        "#,
    )?;
    Ok(())
}

/// Single-row slot for the one permissible open session.
fn create_active_session_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS active_session (
            slot     INTEGER PRIMARY KEY CHECK (slot = 1),
            id       TEXT NOT NULL,
            start_at TEXT NOT NULL,
            notes    TEXT
        );
        "#,
    )?;
    Ok(())
}

/// Has a migration version already been applied?
fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut stmt = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(stmt.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_migration_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Older databases stored notes as an empty string; normalize to NULL once.
fn migrate_blank_notes_to_null(conn: &Connection) -> Result<()> {
    let version = "20250614_0001_blank_notes_to_null";

    if migration_applied(conn, version)? {
        return Ok(());
    }

    conn.execute("UPDATE entries SET notes = NULL WHERE notes = ''", [])?;
    mark_migration_applied(conn, version, "Normalized blank entry notes to NULL")?;

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked from db::initialize::init_db(). Every step is idempotent, so
/// calling this on an already current database is a no-op.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    create_entries_table(conn)?;
    create_settings_table(conn)?;
    create_active_session_table(conn)?;

    migrate_blank_notes_to_null(conn)?;

    Ok(())
}
