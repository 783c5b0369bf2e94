//! Repository for the `enrollments` table.

use sqlx::PgPool;

use scherzo_core::types::DbId;

use crate::models::course::CourseSummary;

/// Provides enrollment operations.
pub struct EnrollmentRepo;

impl EnrollmentRepo {
    /// Enroll a user in a course. Idempotent: returns `true` when a new
    /// row was inserted, `false` when the enrollment already existed.
    pub async fn enroll(pool: &PgPool, course_id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO enrollments (course_id, user_id) VALUES ($1, $2) \
             ON CONFLICT DO NOTHING",
        )
        .bind(course_id)
        .bind(user_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List the courses a student is enrolled in, newest first.
    pub async fn courses_for_student(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<CourseSummary>, sqlx::Error> {
        sqlx::query_as::<_, CourseSummary>(
            "SELECT c.id, c.track_id, c.title, c.slug, c.overview, c.created_at, \
                    COUNT(m.id) AS module_count \
             FROM courses c \
             JOIN enrollments e ON e.course_id = c.id \
             LEFT JOIN modules m ON m.course_id = c.id \
             WHERE e.user_id = $1 \
             GROUP BY c.id \
             ORDER BY c.created_at DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }
}
