use anyhow::{Context, Result};
use rusqlite::{OptionalExtension, params};

use super::{DAY_KEY, Store};
use crate::day::DayRecord;

/// Outcome of reading the stored day record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoredDay {
    Missing,
    /// A value exists under the key but does not deserialize.
    Malformed(String),
    Found(DayRecord),
}

impl Store {
    // ── Key-value ──

    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    pub fn put(&self, key: &str, value: &str) -> Result<()> {
        let now = chrono::Utc::now().to_rfc3339();
        self.conn.execute(
            "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, now],
        )?;
        Ok(())
    }

    // ── Day record ──

    pub fn load_day(&self) -> Result<StoredDay> {
        let Some(blob) = self.get(DAY_KEY)? else {
            return Ok(StoredDay::Missing);
        };
        match serde_json::from_str::<DayRecord>(&blob) {
            Ok(record) => Ok(StoredDay::Found(record)),
            Err(e) => Ok(StoredDay::Malformed(e.to_string())),
        }
    }

    pub fn save_day(&self, record: &DayRecord) -> Result<()> {
        let blob = serde_json::to_string(record).context("failed to serialize day record")?;
        self.put(DAY_KEY, &blob)
    }
}
