use anyhow::{Context, Result};
use rusqlite::Connection;

use super::migrations;

pub fn initialize_schema(conn: &Connection) -> Result<()> {
    create_settings_table(conn)?;
    run_settings_migrations(conn)?;
    insert_default_settings(conn)?;
    create_workers_table(conn)?;
    create_chantiers_table(conn)?;
    create_assignments_table(conn)?;
    Ok(())
}

fn create_settings_table(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS settings (
            id INTEGER PRIMARY KEY CHECK (id = 1),
            view_mode TEXT NOT NULL DEFAULT 'Week',
            show_weekend INTEGER NOT NULL DEFAULT 0,
            expanded_categories TEXT,
            created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        )",
        [],
    )
    .context("Failed to create settings table")?;

    Ok(())
}

fn run_settings_migrations(conn: &Connection) -> Result<()> {
    migrations::ensure_column(
        conn,
        "settings",
        "default_start_time",
        "ALTER TABLE settings ADD COLUMN default_start_time TEXT NOT NULL DEFAULT '07:30'",
    )?;

    migrations::ensure_column(
        conn,
        "settings",
        "default_end_time",
        "ALTER TABLE settings ADD COLUMN default_end_time TEXT NOT NULL DEFAULT '16:30'",
    )?;

    Ok(())
}

fn insert_default_settings(conn: &Connection) -> Result<()> {
    conn.execute(
        "INSERT OR IGNORE INTO settings (id, view_mode, show_weekend) VALUES (1, 'Week', 0)",
        [],
    )
    .context("Failed to insert default settings")?;

    Ok(())
}

fn create_workers_table(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS workers (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL,
            color TEXT,
            role TEXT NOT NULL DEFAULT '',
            worker_type TEXT,
            phone TEXT,
            created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        )",
        [],
    )
    .context("Failed to create workers table")?;

    Ok(())
}

fn create_chantiers_table(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS chantiers (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            color TEXT,
            address TEXT,
            created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        )",
        [],
    )
    .context("Failed to create chantiers table")?;

    Ok(())
}

fn create_assignments_table(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS assignments (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            worker_id INTEGER NOT NULL REFERENCES workers(id) ON DELETE CASCADE,
            chantier_id INTEGER NOT NULL REFERENCES chantiers(id) ON DELETE CASCADE,
            date TEXT NOT NULL,
            start_time TEXT,
            end_time TEXT,
            note TEXT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )",
        [],
    )
    .context("Failed to create assignments table")?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_assignments_date ON assignments(date)",
        [],
    )
    .context("Failed to create assignments date index")?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_assignments_block ON assignments(worker_id, chantier_id)",
        [],
    )
    .context("Failed to create assignments block index")?;

    Ok(())
}
