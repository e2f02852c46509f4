//! User repository - upsert on login, lookups for gated handlers.

use crate::{DbError, Result as DbErrorResult};

use xb_core::{ExternalIdentity, User};

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert-or-refresh keyed by the provider's subject id.
    ///
    /// First resolution creates the row; every later one refreshes the
    /// profile fields and `last_login_at` while `id` and `created_at` stay
    /// stable. One statement, one persisted write.
    pub async fn upsert_from_identity(&self, identity: &ExternalIdentity) -> DbErrorResult<User> {
        let candidate = User::from_identity(identity);
        let id = candidate.id.to_string();
        let created_at = candidate.created_at.timestamp();
        let last_login_at = candidate.last_login_at.timestamp();

        sqlx::query(
            r#"
                INSERT INTO users (id, external_id, email, display_name, avatar_url,
                    created_at, last_login_at)
                VALUES (?, ?, ?, ?, ?, ?, ?)
                ON CONFLICT(external_id) DO UPDATE SET
                    email = excluded.email,
                    display_name = excluded.display_name,
                    avatar_url = excluded.avatar_url,
                    last_login_at = excluded.last_login_at
            "#,
        )
        .bind(&id)
        .bind(&identity.external_id)
        .bind(&identity.email)
        .bind(&identity.display_name)
        .bind(&identity.avatar_url)
        .bind(created_at)
        .bind(last_login_at)
        .execute(&self.pool)
        .await?;

        self.find_by_external_id(&identity.external_id)
            .await?
            .ok_or_else(|| DbError::decode("users row vanished after upsert"))
    }

    pub async fn find_by_external_id(&self, external_id: &str) -> DbErrorResult<Option<User>> {
        let row = sqlx::query(
            r#"
                SELECT id, external_id, email, display_name, avatar_url,
                    created_at, last_login_at
                FROM users
                WHERE external_id = ?
            "#,
        )
        .bind(external_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| decode_user(&r)).transpose()
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<User>> {
        let id_str = id.to_string();

        let row = sqlx::query(
            r#"
                SELECT id, external_id, email, display_name, avatar_url,
                    created_at, last_login_at
                FROM users
                WHERE id = ?
            "#,
        )
        .bind(id_str)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| decode_user(&r)).transpose()
    }
}

fn decode_user(row: &SqliteRow) -> DbErrorResult<User> {
    let id: String = row.try_get("id")?;
    let created_at: i64 = row.try_get("created_at")?;
    let last_login_at: i64 = row.try_get("last_login_at")?;

    Ok(User {
        id: Uuid::parse_str(&id)
            .map_err(|e| DbError::decode(format!("Invalid UUID in users.id: {}", e)))?,
        external_id: row.try_get("external_id")?,
        email: row.try_get("email")?,
        display_name: row.try_get("display_name")?,
        avatar_url: row.try_get("avatar_url")?,
        created_at: DateTime::from_timestamp(created_at, 0)
            .ok_or_else(|| DbError::decode("Invalid timestamp in users.created_at"))?,
        last_login_at: DateTime::from_timestamp(last_login_at, 0)
            .ok_or_else(|| DbError::decode("Invalid timestamp in users.last_login_at"))?,
    })
}
