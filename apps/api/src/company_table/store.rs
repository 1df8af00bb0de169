//! Persistence for the company salary table.
//!
//! `AppState` holds an `Arc<dyn SalaryTableStore>`: PostgreSQL in production,
//! in-memory for tests.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::PgPool;
use tokio::sync::RwLock;
use tracing::info;

use crate::company_table::platforms::default_company_table;
use crate::company_table::table::{CompanySalaryTable, TableError, YearlySalaryTable};
use crate::models::company_table::SalaryBandRow;
use crate::models::profile::EducationLevel;
use crate::models::salary::SalaryBand;

#[async_trait]
pub trait SalaryTableStore: Send + Sync {
    /// The saved table, or the seeded default when nothing is saved.
    async fn load(&self) -> Result<CompanySalaryTable>;

    /// Replaces the saved table wholesale.
    async fn save(&self, table: &CompanySalaryTable) -> Result<()>;

    /// Discards the saved table and returns the default.
    async fn reset(&self) -> Result<CompanySalaryTable>;
}

// ────────────────────────────────────────────────────────────────────────────
// PostgreSQL
// ────────────────────────────────────────────────────────────────────────────

pub struct PgSalaryTableStore {
    pool: PgPool,
}

impl PgSalaryTableStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SalaryTableStore for PgSalaryTableStore {
    async fn load(&self) -> Result<CompanySalaryTable> {
        let rows = sqlx::query_as::<_, SalaryBandRow>(
            "SELECT * FROM company_salary_bands ORDER BY education, year",
        )
        .fetch_all(&self.pool)
        .await?;

        if rows.is_empty() {
            return Ok(default_company_table());
        }
        table_from_rows(rows)
    }

    async fn save(&self, table: &CompanySalaryTable) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM company_salary_bands")
            .execute(&mut *tx)
            .await?;

        let mut count = 0usize;
        for (education, year, band) in table.cells() {
            sqlx::query(
                r#"
                INSERT INTO company_salary_bands (education, year, low, middle, high, updated_at)
                VALUES ($1, $2, $3, $4, $5, now())
                "#,
            )
            .bind(education.as_str())
            .bind(year as i32)
            .bind(band.low)
            .bind(band.middle)
            .bind(band.high)
            .execute(&mut *tx)
            .await?;
            count += 1;
        }

        tx.commit().await?;
        info!("Saved company salary table ({count} cells)");
        Ok(())
    }

    async fn reset(&self) -> Result<CompanySalaryTable> {
        sqlx::query("DELETE FROM company_salary_bands")
            .execute(&self.pool)
            .await?;
        info!("Company salary table reset to default");
        Ok(default_company_table())
    }
}

fn table_from_rows(rows: Vec<SalaryBandRow>) -> Result<CompanySalaryTable> {
    let mut tiers: BTreeMap<EducationLevel, YearlySalaryTable> = BTreeMap::new();
    for row in rows {
        let education: EducationLevel = row
            .education
            .parse()
            .map_err(|_| TableError::UnknownEducation(row.education.clone()))?;
        let year = u32::try_from(row.year)
            .with_context(|| format!("stored year {} is negative", row.year))?;
        tiers.entry(education).or_default().insert(
            year,
            SalaryBand {
                low: row.low,
                middle: row.middle,
                high: row.high,
            },
        );
    }

    let table = CompanySalaryTable::from_tiers(tiers);
    table.validate()?;
    Ok(table)
}

// ────────────────────────────────────────────────────────────────────────────
// In-memory
// ────────────────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct InMemorySalaryTableStore {
    saved: RwLock<Option<CompanySalaryTable>>,
}

impl InMemorySalaryTableStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SalaryTableStore for InMemorySalaryTableStore {
    async fn load(&self) -> Result<CompanySalaryTable> {
        Ok(self
            .saved
            .read()
            .await
            .clone()
            .unwrap_or_else(default_company_table))
    }

    async fn save(&self, table: &CompanySalaryTable) -> Result<()> {
        *self.saved.write().await = Some(table.clone());
        Ok(())
    }

    async fn reset(&self) -> Result<CompanySalaryTable> {
        *self.saved.write().await = None;
        Ok(default_company_table())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::company_table::table::BandField;

    fn row(education: &str, year: i32, band: (i64, i64, i64)) -> SalaryBandRow {
        SalaryBandRow {
            education: education.to_string(),
            year,
            low: Some(band.0),
            middle: Some(band.1),
            high: Some(band.2),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_memory_store_defaults_then_persists() {
        let store = InMemorySalaryTableStore::new();
        let mut table = store.load().await.unwrap();
        assert_eq!(table, default_company_table());

        table
            .update_cell(EducationLevel::Master, 1, BandField::Middle, Some(9999))
            .unwrap();
        store.save(&table).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded.band(EducationLevel::Master, 1).middle, Some(9999));
    }

    #[tokio::test]
    async fn test_memory_store_reset() {
        let store = InMemorySalaryTableStore::new();
        store.save(&CompanySalaryTable::default()).await.unwrap();
        assert_eq!(store.load().await.unwrap(), CompanySalaryTable::default());

        let reset = store.reset().await.unwrap();
        assert_eq!(reset, default_company_table());
        assert_eq!(store.load().await.unwrap(), default_company_table());
    }

    #[test]
    fn test_rows_to_table() {
        let table = table_from_rows(vec![
            row("bachelor", 1, (3150, 3150, 3150)),
            row("bachelor", 2, (3150, 3250, 3350)),
        ])
        .unwrap();
        assert_eq!(table.band(EducationLevel::Bachelor, 2).high, Some(3350));
        assert!(table.band(EducationLevel::Master, 1).is_empty());
    }

    #[test]
    fn test_rows_with_unknown_tier_are_rejected() {
        assert!(table_from_rows(vec![row("phd", 1, (1, 2, 3))]).is_err());
        assert!(table_from_rows(vec![row("master", 21, (1, 2, 3))]).is_err());
    }
}
