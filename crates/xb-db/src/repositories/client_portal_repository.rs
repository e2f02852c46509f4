//! Client portal repository - dashboard listing of portal grants.

use crate::{DbError, Result as DbErrorResult};

use xb_core::ClientPortal;

use chrono::DateTime;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct ClientPortalRepository {
    pool: SqlitePool,
}

impl ClientPortalRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, portal: &ClientPortal) -> DbErrorResult<()> {
        let id = portal.id.to_string();
        let user_id = portal.user_id.to_string();
        let created_at = portal.created_at.timestamp();

        sqlx::query(
            r#"
                INSERT INTO client_portals (id, user_id, portal_type, portal_data,
                    access_level, created_at)
                VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(&user_id)
        .bind(&portal.portal_type)
        .bind(&portal.portal_data)
        .bind(&portal.access_level)
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_user(&self, user_id: Uuid) -> DbErrorResult<Vec<ClientPortal>> {
        let user_id_str = user_id.to_string();

        let rows = sqlx::query(
            r#"
                SELECT id, user_id, portal_type, portal_data, access_level, created_at
                FROM client_portals
                WHERE user_id = ?
                ORDER BY created_at ASC
            "#,
        )
        .bind(user_id_str)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(decode_portal).collect()
    }
}

fn decode_portal(row: &SqliteRow) -> DbErrorResult<ClientPortal> {
    let id: String = row.try_get("id")?;
    let user_id: String = row.try_get("user_id")?;
    let created_at: i64 = row.try_get("created_at")?;

    Ok(ClientPortal {
        id: Uuid::parse_str(&id)
            .map_err(|e| DbError::decode(format!("Invalid UUID in client_portals.id: {}", e)))?,
        user_id: Uuid::parse_str(&user_id).map_err(|e| {
            DbError::decode(format!("Invalid UUID in client_portals.user_id: {}", e))
        })?,
        portal_type: row.try_get("portal_type")?,
        portal_data: row.try_get("portal_data")?,
        access_level: row.try_get("access_level")?,
        created_at: DateTime::from_timestamp(created_at, 0)
            .ok_or_else(|| DbError::decode("Invalid timestamp in client_portals.created_at"))?,
    })
}
