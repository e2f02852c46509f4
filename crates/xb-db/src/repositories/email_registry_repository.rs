//! Email registry repository - owns every state transition on
//! `email_registry` rows.
//!
//! Transitions are single conditional UPDATEs scoped by the current status,
//! so two concurrent claims on the same address can never both succeed: the
//! second one matches zero rows. `rows_affected` decides the outcome; a
//! follow-up read only diagnoses which rejection to report.

use crate::{DbError, Result as DbErrorResult};

use xb_core::{ClaimOutcome, EmailRecord, EmailStatus, VerificationOutcome};

use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

/// Validity window for a verification token issued at claim time.
const VERIFICATION_TTL_HOURS: i64 = 24;

pub struct EmailRegistryRepository {
    pool: SqlitePool,
}

impl EmailRegistryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Register an address as a floater. Idempotent: an existing record in
    /// any state is left untouched and returned as-is.
    pub async fn register(&self, email_address: &str) -> DbErrorResult<EmailRecord> {
        let candidate = EmailRecord::floater(email_address.to_string());
        let id = candidate.id.to_string();
        let status = candidate.status.as_str();
        let created_at = candidate.created_at.timestamp();
        let updated_at = candidate.updated_at.timestamp();

        sqlx::query(
            r#"
                INSERT INTO email_registry (id, email_address, status, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?)
                ON CONFLICT(email_address) DO NOTHING
            "#,
        )
        .bind(&id)
        .bind(email_address)
        .bind(status)
        .bind(created_at)
        .bind(updated_at)
        .execute(&self.pool)
        .await?;

        // Read back whichever row won: the fresh floater or the pre-existing record
        self.find_by_address(email_address)
            .await?
            .ok_or_else(|| DbError::decode("email_registry row vanished after insert"))
    }

    pub async fn find_by_address(&self, email_address: &str) -> DbErrorResult<Option<EmailRecord>> {
        let row = sqlx::query(
            r#"
                SELECT id, email_address, status, claimed_by_user_id, claimed_at,
                    verification_token, verification_expires, created_at, updated_at
                FROM email_registry
                WHERE email_address = ?
            "#,
        )
        .bind(email_address)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| decode_record(&r)).transpose()
    }

    /// All floater records, oldest first.
    pub async fn list_floaters(&self) -> DbErrorResult<Vec<EmailRecord>> {
        let rows = sqlx::query(
            r#"
                SELECT id, email_address, status, claimed_by_user_id, claimed_at,
                    verification_token, verification_expires, created_at, updated_at
                FROM email_registry
                WHERE status = 'floater'
                ORDER BY created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(decode_record).collect()
    }

    /// Attempt to claim a floater for `claimant`.
    ///
    /// The UPDATE is scoped by `status = 'floater'`, which is the atomic
    /// guard: of N concurrent claims on one address, exactly one matches.
    /// On success a verification token is issued alongside the transition.
    pub async fn claim(&self, email_address: &str, claimant: Uuid) -> DbErrorResult<ClaimOutcome> {
        let now = Utc::now();
        let claimed_by = claimant.to_string();
        let claimed_at = now.timestamp();
        let token = Uuid::new_v4().simple().to_string();
        let expires = (now + Duration::hours(VERIFICATION_TTL_HOURS)).timestamp();

        let result = sqlx::query(
            r#"
                UPDATE email_registry
                SET status = 'claimed', claimed_by_user_id = ?, claimed_at = ?,
                    verification_token = ?, verification_expires = ?, updated_at = ?
                WHERE email_address = ? AND status = 'floater'
            "#,
        )
        .bind(&claimed_by)
        .bind(claimed_at)
        .bind(&token)
        .bind(expires)
        .bind(claimed_at)
        .bind(email_address)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 1 {
            return Ok(ClaimOutcome::Claimed);
        }

        // Nothing matched: distinguish a missing record from a wrong state
        match self.find_by_address(email_address).await? {
            None => Ok(ClaimOutcome::NotFound),
            Some(_) => Ok(ClaimOutcome::AlreadyClaimed),
        }
    }

    /// Attempt the `claimed -> verified` transition with the issued token.
    pub async fn verify(
        &self,
        email_address: &str,
        token: &str,
    ) -> DbErrorResult<VerificationOutcome> {
        let now = Utc::now().timestamp();

        let result = sqlx::query(
            r#"
                UPDATE email_registry
                SET status = 'verified', verification_token = NULL,
                    verification_expires = NULL, updated_at = ?
                WHERE email_address = ? AND status = 'claimed'
                    AND verification_token = ? AND verification_expires >= ?
            "#,
        )
        .bind(now)
        .bind(email_address)
        .bind(token)
        .bind(now)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 1 {
            return Ok(VerificationOutcome::Verified);
        }

        let record = match self.find_by_address(email_address).await? {
            None => return Ok(VerificationOutcome::NotFound),
            Some(record) => record,
        };

        if record.status != EmailStatus::Claimed {
            return Ok(VerificationOutcome::WrongState);
        }
        if record.verification_token.as_deref() != Some(token) {
            return Ok(VerificationOutcome::TokenMismatch);
        }
        Ok(VerificationOutcome::Expired)
    }

    /// Privileged transition: any non-suspended state -> `suspended`.
    /// Returns false when no record exists for the address.
    pub async fn suspend(&self, email_address: &str) -> DbErrorResult<bool> {
        let now = Utc::now().timestamp();

        let result = sqlx::query(
            r#"
                UPDATE email_registry
                SET status = 'suspended', updated_at = ?
                WHERE email_address = ? AND status != 'suspended'
            "#,
        )
        .bind(now)
        .bind(email_address)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 1 {
            return Ok(true);
        }

        // Already suspended counts as done; only a missing row is reported
        Ok(self.find_by_address(email_address).await?.is_some())
    }
}

fn decode_record(row: &SqliteRow) -> DbErrorResult<EmailRecord> {
    let id: String = row.try_get("id")?;
    let status: String = row.try_get("status")?;
    let claimed_by: Option<String> = row.try_get("claimed_by_user_id")?;
    let claimed_at: Option<i64> = row.try_get("claimed_at")?;
    let verification_expires: Option<i64> = row.try_get("verification_expires")?;
    let created_at: i64 = row.try_get("created_at")?;
    let updated_at: i64 = row.try_get("updated_at")?;

    Ok(EmailRecord {
        id: Uuid::parse_str(&id)
            .map_err(|e| DbError::decode(format!("Invalid UUID in email_registry.id: {}", e)))?,
        email_address: row.try_get("email_address")?,
        status: EmailStatus::from_str(&status).map_err(|e| {
            DbError::decode(format!("Invalid status in email_registry.status: {}", e))
        })?,
        claimed_by: claimed_by
            .map(|s| {
                Uuid::parse_str(&s).map_err(|e| {
                    DbError::decode(format!(
                        "Invalid UUID in email_registry.claimed_by_user_id: {}",
                        e
                    ))
                })
            })
            .transpose()?,
        claimed_at: claimed_at.and_then(|ts| DateTime::from_timestamp(ts, 0)),
        verification_token: row.try_get("verification_token")?,
        verification_expires: verification_expires.and_then(|ts| DateTime::from_timestamp(ts, 0)),
        created_at: DateTime::from_timestamp(created_at, 0)
            .ok_or_else(|| DbError::decode("Invalid timestamp in email_registry.created_at"))?,
        updated_at: DateTime::from_timestamp(updated_at, 0)
            .ok_or_else(|| DbError::decode("Invalid timestamp in email_registry.updated_at"))?,
    })
}
