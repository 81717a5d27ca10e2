//! SQLite-backed catalog
//!
//! Layout: a `vehicle` table with one row per catalog record and a
//! `listing` table with one row per listing referencing `vehicle_id`.

use super::{AttributeColumn, Catalog, ListingCounts, VehicleRecord};
use crate::error::{CarMatchError, CarMatchResult};
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct SqliteCatalog {
    db_path: PathBuf,
}

impl SqliteCatalog {
    /// Open (and create if needed) a catalog database
    pub fn new(db_path: PathBuf) -> CarMatchResult<Self> {
        let catalog = Self { db_path };
        catalog.init_db()?;
        Ok(catalog)
    }

    /// Open an existing catalog database
    pub fn open(db_path: PathBuf) -> CarMatchResult<Self> {
        if !db_path.is_file() {
            return Err(CarMatchError::Catalog(format!(
                "catalog database not found: {}",
                db_path.display()
            )));
        }
        Self::new(db_path)
    }

    pub fn path(&self) -> &Path {
        &self.db_path
    }

    fn init_db(&self) -> CarMatchResult<()> {
        if let Some(parent) = self.db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(&self.db_path)?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS vehicle (
                id TEXT PRIMARY KEY,
                make TEXT,
                model TEXT,
                badge TEXT,
                transmission_type TEXT,
                fuel_type TEXT,
                drive_type TEXT
            )",
            [],
        )?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS listing (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                vehicle_id TEXT NOT NULL
            )",
            [],
        )?;
        Ok(())
    }

    /// Insert or replace a vehicle row
    pub fn insert_vehicle(&self, vehicle: &VehicleRecord) -> CarMatchResult<()> {
        let conn = Connection::open(&self.db_path)?;
        conn.execute(
            "INSERT OR REPLACE INTO vehicle (id, make, model, badge, transmission_type, fuel_type, drive_type)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
            (
                &vehicle.id,
                &vehicle.make,
                &vehicle.model,
                &vehicle.badge,
                &vehicle.transmission_type,
                &vehicle.fuel_type,
                &vehicle.drive_type,
            ),
        )?;
        Ok(())
    }

    /// Record one listing for a vehicle
    pub fn insert_listing(&self, vehicle_id: &str) -> CarMatchResult<()> {
        let conn = Connection::open(&self.db_path)?;
        conn.execute("INSERT INTO listing (vehicle_id) VALUES (?)", [vehicle_id])?;
        Ok(())
    }
}

impl Catalog for SqliteCatalog {
    fn distinct_values(&self, column: AttributeColumn) -> CarMatchResult<Vec<String>> {
        let conn = Connection::open(&self.db_path)?;
        // Column names come from a closed enum, never from user input
        let sql = format!(
            "SELECT DISTINCT {col} FROM vehicle WHERE {col} IS NOT NULL ORDER BY {col}",
            col = column.as_str()
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut values = Vec::new();
        for row in rows {
            values.push(row?);
        }
        debug!("{} distinct values for {}", values.len(), column);
        Ok(values)
    }

    fn vehicles(&self) -> CarMatchResult<Vec<VehicleRecord>> {
        let conn = Connection::open(&self.db_path)?;
        let mut stmt = conn.prepare(
            "SELECT CAST(id AS TEXT), make, model, badge, transmission_type, fuel_type, drive_type
             FROM vehicle
             ORDER BY rowid",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(VehicleRecord {
                id: row.get(0)?,
                make: row.get(1)?,
                model: row.get(2)?,
                badge: row.get(3)?,
                transmission_type: row.get(4)?,
                fuel_type: row.get(5)?,
                drive_type: row.get(6)?,
            })
        })?;

        let mut vehicles = Vec::new();
        for row in rows {
            vehicles.push(row?);
        }
        Ok(vehicles)
    }

    fn listing_counts(&self) -> CarMatchResult<ListingCounts> {
        let conn = Connection::open(&self.db_path)?;
        let mut stmt = conn.prepare(
            "SELECT CAST(vehicle_id AS TEXT), COUNT(*) AS listing_count
             FROM listing
             GROUP BY vehicle_id",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
        })?;

        let mut counts = ListingCounts::new();
        for row in rows {
            let (vehicle_id, count) = row?;
            counts.insert(vehicle_id, count.max(0) as u64);
        }
        Ok(counts)
    }
}
