use sqlx::{Connection, PgConnection};

use crate::dto::competition::CreateCompetitionRequest;
use crate::error::{Result, StorageError};
use crate::models::{Competition, CompetitionProject};

const COMPETITION_COLUMNS: &str = "id, created_at, updated_at, deleted_at, name, description, \
                                   image_url, home_page_url, time";

/// Repository for Competition database operations.
///
/// Borrows a connection owned by the caller. Passing a `Transaction` (it
/// derefs to `PgConnection`) makes every call part of that transaction;
/// commit and rollback stay with the caller.
pub struct CompetitionRepository<'a> {
    conn: &'a mut PgConnection,
}

impl<'a> CompetitionRepository<'a> {
    /// Create a new CompetitionRepository
    pub fn new(conn: &'a mut PgConnection) -> Self {
        Self { conn }
    }

    /// List all competitions, or an empty list if the query fails.
    ///
    /// Associations are not loaded; use [`Self::find_detailed_by_name`].
    pub async fn list(&mut self) -> Vec<Competition> {
        match self.try_list().await {
            Ok(competitions) => competitions,
            Err(e) => {
                tracing::debug!("Failed to list competitions: {:?}", e);
                Vec::new()
            }
        }
    }

    /// List all competitions
    pub async fn try_list(&mut self) -> Result<Vec<Competition>> {
        let sql = format!(
            "SELECT {COMPETITION_COLUMNS} FROM competitions WHERE deleted_at IS NULL ORDER BY id"
        );
        let competitions = sqlx::query_as::<_, Competition>(&sql)
            .fetch_all(&mut *self.conn)
            .await?;

        Ok(competitions)
    }

    /// Get a competition by its exact name, or the zero value.
    ///
    /// A miss on the business key is logged at error level.
    pub async fn find_by_name(&mut self, name: &str) -> Competition {
        match self.try_find_by_name(name).await {
            Ok(Some(competition)) => competition,
            Ok(None) => {
                tracing::error!("Competition not found: {}", name);
                Competition::default()
            }
            Err(e) => {
                tracing::error!("Failed to find competition {}: {:?}", name, e);
                Competition::default()
            }
        }
    }

    /// Get a competition by name
    pub async fn try_find_by_name(&mut self, name: &str) -> Result<Option<Competition>> {
        let sql = format!(
            "SELECT {COMPETITION_COLUMNS} FROM competitions \
             WHERE name = $1 AND deleted_at IS NULL ORDER BY id LIMIT 1"
        );
        let competition = sqlx::query_as::<_, Competition>(&sql)
            .bind(name)
            .fetch_optional(&mut *self.conn)
            .await?;

        Ok(competition)
    }

    /// Get a competition by ID
    pub async fn find_by_id(&mut self, id: i64) -> Result<Competition> {
        let sql = format!(
            "SELECT {COMPETITION_COLUMNS} FROM competitions WHERE id = $1 AND deleted_at IS NULL"
        );
        let competition = sqlx::query_as::<_, Competition>(&sql)
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await?
            .ok_or(StorageError::NotFound)?;

        Ok(competition)
    }

    /// Get a competition by name with its files and projects loaded
    pub async fn find_detailed_by_name(&mut self, name: &str) -> Result<Competition> {
        let mut competition = self
            .try_find_by_name(name)
            .await?
            .ok_or(StorageError::NotFound)?;

        competition.files = self.file_ids(competition.id).await?;
        competition.projects = self.project_ids(competition.id).await?;

        Ok(competition)
    }

    /// Create a new competition together with its file references and
    /// project links.
    ///
    /// Runs inside a savepoint, so a failing association insert leaves no
    /// competition row behind.
    pub async fn create(&mut self, req: &CreateCompetitionRequest) -> Result<Competition> {
        let mut tx = self.conn.begin().await?;

        let sql = format!(
            r#"
            INSERT INTO competitions (name, description, image_url, home_page_url, time)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {COMPETITION_COLUMNS}
            "#
        );
        let mut competition = sqlx::query_as::<_, Competition>(&sql)
            .bind(&req.name)
            .bind(&req.description)
            .bind(&req.image_url)
            .bind(&req.home_page_url)
            .bind(&req.time)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| StorageError::from_insert(e, "Competition name already exists"))?;

        if !req.file_ids.is_empty() {
            sqlx::query(
                r#"
                INSERT INTO competition_files (competition_id, file_id, position)
                SELECT $1, f.file_id, (f.ord - 1)::int
                FROM UNNEST($2::bigint[]) WITH ORDINALITY AS f(file_id, ord)
                "#,
            )
            .bind(competition.id)
            .bind(&req.file_ids)
            .execute(&mut *tx)
            .await?;
        }

        if !req.project_ids.is_empty() {
            sqlx::query(
                r#"
                INSERT INTO competition_projects (project_id, competition_id)
                SELECT p.project_id, $1
                FROM UNNEST($2::bigint[]) AS p(project_id)
                ON CONFLICT DO NOTHING
                "#,
            )
            .bind(competition.id)
            .bind(&req.project_ids)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        competition.files = req.file_ids.clone();
        competition.projects = dedup_preserving_order(&req.project_ids);

        Ok(competition)
    }

    /// Link a project to a competition. Linking twice is a no-op.
    ///
    /// Returns `NotFound` when the competition does not exist.
    pub async fn add_project(&mut self, link: CompetitionProject) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO competition_projects (project_id, competition_id)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(link.project_id)
        .bind(link.competition_id)
        .execute(&mut *self.conn)
        .await
        .map_err(|e| {
            let err = StorageError::from(e);
            if err.is_foreign_key_violation() {
                return StorageError::NotFound;
            }
            err
        })?;

        Ok(())
    }

    /// Ids of the files attached to a competition, in upload order
    pub async fn file_ids(&mut self, competition_id: i64) -> Result<Vec<i64>> {
        let ids = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT file_id
            FROM competition_files
            WHERE competition_id = $1
            ORDER BY position
            "#,
        )
        .bind(competition_id)
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(ids)
    }

    /// Ids of the projects entered in a competition
    pub async fn project_ids(&mut self, competition_id: i64) -> Result<Vec<i64>> {
        let ids = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT project_id
            FROM competition_projects
            WHERE competition_id = $1
            ORDER BY project_id
            "#,
        )
        .bind(competition_id)
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(ids)
    }

    /// Ids of the competitions a project is entered in, for filtering
    /// project listings by competition.
    pub async fn competition_ids_for_project(&mut self, project_id: i64) -> Result<Vec<i64>> {
        let ids = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT cp.competition_id
            FROM competition_projects cp
            JOIN competitions c ON c.id = cp.competition_id
            WHERE cp.project_id = $1 AND c.deleted_at IS NULL
            ORDER BY cp.competition_id
            "#,
        )
        .bind(project_id)
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(ids)
    }
}

fn dedup_preserving_order(ids: &[i64]) -> Vec<i64> {
    let mut seen = Vec::with_capacity(ids.len());
    for id in ids {
        if !seen.contains(id) {
            seen.push(*id);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        assert_eq!(dedup_preserving_order(&[4, 2, 4, 1, 2]), vec![4, 2, 1]);
        assert!(dedup_preserving_order(&[]).is_empty());
    }
}
