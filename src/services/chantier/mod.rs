//! Chantier storage, read by the assignment dialog's site picker.

use anyhow::{Context, Result};
use rusqlite::{self, params, Connection, OptionalExtension, Row};

use crate::models::chantier::Chantier;

pub struct ChantierService<'a> {
    conn: &'a Connection,
}

fn map_chantier_row(row: &Row) -> rusqlite::Result<Chantier> {
    Ok(Chantier {
        id: Some(row.get(0)?),
        name: row.get(1)?,
        color: row.get(2)?,
        address: row.get(3)?,
    })
}

impl<'a> ChantierService<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    pub fn create(&self, mut chantier: Chantier) -> Result<Chantier> {
        chantier.validate()?;
        self.conn
            .execute(
                "INSERT INTO chantiers (name, color, address) VALUES (?, ?, ?)",
                params![chantier.name, chantier.color, chantier.address],
            )
            .context("Failed to insert chantier")?;
        chantier.id = Some(self.conn.last_insert_rowid());
        Ok(chantier)
    }

    pub fn get(&self, id: i64) -> Result<Option<Chantier>> {
        self.conn
            .query_row(
                "SELECT id, name, color, address FROM chantiers WHERE id = ?",
                [id],
                map_chantier_row,
            )
            .optional()
            .context("Failed to load chantier")
    }

    pub fn list_all(&self) -> Result<Vec<Chantier>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, color, address FROM chantiers ORDER BY name COLLATE NOCASE")?;
        let chantiers = stmt
            .query_map([], map_chantier_row)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .context("Failed to list chantiers")?;
        Ok(chantiers)
    }
}
