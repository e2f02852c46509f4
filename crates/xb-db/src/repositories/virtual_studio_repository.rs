//! Virtual studio repository - services page listing.

use crate::{DbError, Result as DbErrorResult};

use xb_core::{StudioStatus, VirtualStudio};

use std::str::FromStr;

use chrono::DateTime;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct VirtualStudioRepository {
    pool: SqlitePool,
}

impl VirtualStudioRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, studio: &VirtualStudio) -> DbErrorResult<()> {
        let id = studio.id.to_string();
        let status = studio.status.as_str();
        let created_at = studio.created_at.timestamp();

        sqlx::query(
            r#"
                INSERT INTO virtual_studios (id, studio_name, studio_type, description,
                    status, created_at)
                VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(&studio.studio_name)
        .bind(&studio.studio_type)
        .bind(&studio.description)
        .bind(status)
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Studios shown on the public services page.
    pub async fn find_active(&self) -> DbErrorResult<Vec<VirtualStudio>> {
        let rows = sqlx::query(
            r#"
                SELECT id, studio_name, studio_type, description, status, created_at
                FROM virtual_studios
                WHERE status = 'active'
                ORDER BY studio_name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(decode_studio).collect()
    }
}

fn decode_studio(row: &SqliteRow) -> DbErrorResult<VirtualStudio> {
    let id: String = row.try_get("id")?;
    let status: String = row.try_get("status")?;
    let created_at: i64 = row.try_get("created_at")?;

    Ok(VirtualStudio {
        id: Uuid::parse_str(&id)
            .map_err(|e| DbError::decode(format!("Invalid UUID in virtual_studios.id: {}", e)))?,
        studio_name: row.try_get("studio_name")?,
        studio_type: row.try_get("studio_type")?,
        description: row.try_get("description")?,
        status: StudioStatus::from_str(&status).map_err(|e| {
            DbError::decode(format!("Invalid status in virtual_studios.status: {}", e))
        })?,
        created_at: DateTime::from_timestamp(created_at, 0)
            .ok_or_else(|| DbError::decode("Invalid timestamp in virtual_studios.created_at"))?,
    })
}
