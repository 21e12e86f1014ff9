//! PostgreSQL implementation of MemberRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::instrument;

use gym_core::{DomainError, Member, MemberId, MemberRepository, NewMember, RepoResult};

use crate::models::MemberModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of MemberRepository
#[derive(Clone)]
pub struct PgMemberRepository {
    pool: PgPool,
}

impl PgMemberRepository {
    /// Create a new PgMemberRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberRepository for PgMemberRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: MemberId) -> RepoResult<Option<Member>> {
        let result = sqlx::query_as::<_, MemberModel>(
            r"
            SELECT id, name, age, gender, address, program, membership_type, mobile, email,
                   fitness_goals, medical_conditions, is_paid, payment_date, created_at
            FROM members
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Member::from))
    }

    #[instrument(skip(self))]
    async fn find_by_mobile(&self, mobile: &str) -> RepoResult<Option<Member>> {
        let result = sqlx::query_as::<_, MemberModel>(
            r"
            SELECT id, name, age, gender, address, program, membership_type, mobile, email,
                   fitness_goals, medical_conditions, is_paid, payment_date, created_at
            FROM members
            WHERE mobile = $1
            ",
        )
        .bind(mobile)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Member::from))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Member>> {
        let rows = sqlx::query_as::<_, MemberModel>(
            r"
            SELECT id, name, age, gender, address, program, membership_type, mobile, email,
                   fitness_goals, medical_conditions, is_paid, payment_date, created_at
            FROM members
            ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Member::from).collect())
    }

    #[instrument(skip(self, member), fields(mobile = %member.mobile))]
    async fn create(&self, member: &NewMember, created_at: DateTime<Utc>) -> RepoResult<Member> {
        let row = sqlx::query_as::<_, MemberModel>(
            r"
            INSERT INTO members (name, age, gender, address, program, membership_type, mobile,
                                 email, fitness_goals, medical_conditions, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING id, name, age, gender, address, program, membership_type, mobile, email,
                      fitness_goals, medical_conditions, is_paid, payment_date, created_at
            ",
        )
        .bind(&member.name)
        .bind(member.age)
        .bind(&member.gender)
        .bind(&member.address)
        .bind(&member.program)
        .bind(&member.membership_type)
        .bind(&member.mobile)
        .bind(&member.email)
        .bind(Json(&member.fitness_goals))
        .bind(&member.medical_conditions)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || {
                DomainError::MobileAlreadyRegistered(member.mobile.clone())
            })
        })?;

        Ok(row.into())
    }

    #[instrument(skip(self, member), fields(member_id = %member.id))]
    async fn update(&self, member: &Member) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE members
            SET name = $2, age = $3, gender = $4, address = $5, program = $6,
                membership_type = $7, mobile = $8, email = $9
            WHERE id = $1
            ",
        )
        .bind(member.id.into_inner())
        .bind(&member.name)
        .bind(member.age)
        .bind(&member.gender)
        .bind(&member.address)
        .bind(&member.program)
        .bind(&member.membership_type)
        .bind(&member.mobile)
        .bind(&member.email)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || {
                DomainError::MobileAlreadyRegistered(member.mobile.clone())
            })
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::MemberNotFound(member.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: MemberId) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM members WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::MemberNotFound(id));
        }

        Ok(())
    }
}
