//! Worker roster storage. The planning board only reads it; creation exists
//! for seeding and tests.

use anyhow::{anyhow, Context, Result};
use rusqlite::{self, params, Connection, OptionalExtension, Row};

use crate::models::worker::Worker;

pub struct WorkerService<'a> {
    conn: &'a Connection,
}

fn map_worker_row(row: &Row) -> rusqlite::Result<Worker> {
    Ok(Worker {
        id: Some(row.get(0)?),
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        color: row.get(3)?,
        role: row.get(4)?,
        worker_type: row.get(5)?,
        phone: row.get(6)?,
    })
}

impl<'a> WorkerService<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    pub fn create(&self, mut worker: Worker) -> Result<Worker> {
        worker.validate()?;
        self.conn
            .execute(
                "INSERT INTO workers (first_name, last_name, color, role, worker_type, phone)
                 VALUES (?, ?, ?, ?, ?, ?)",
                params![
                    worker.first_name,
                    worker.last_name,
                    worker.color,
                    worker.role,
                    worker.worker_type,
                    worker.phone,
                ],
            )
            .context("Failed to insert worker")?;
        worker.id = Some(self.conn.last_insert_rowid());
        Ok(worker)
    }

    pub fn get(&self, id: i64) -> Result<Option<Worker>> {
        self.conn
            .query_row(
                "SELECT id, first_name, last_name, color, role, worker_type, phone
                 FROM workers WHERE id = ?",
                [id],
                map_worker_row,
            )
            .optional()
            .context("Failed to load worker")
    }

    /// Every worker, ordered by last then first name.
    pub fn list_all(&self) -> Result<Vec<Worker>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, first_name, last_name, color, role, worker_type, phone
             FROM workers
             ORDER BY last_name COLLATE NOCASE, first_name COLLATE NOCASE",
        )?;
        let workers = stmt
            .query_map([], map_worker_row)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .context("Failed to list workers")?;
        Ok(workers)
    }

    pub fn delete(&self, id: i64) -> Result<()> {
        let rows = self
            .conn
            .execute("DELETE FROM workers WHERE id = ?", [id])
            .context("Failed to delete worker")?;
        if rows == 0 {
            return Err(anyhow!("Worker with id {} not found", id));
        }
        Ok(())
    }
}
