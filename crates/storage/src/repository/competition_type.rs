use sqlx::PgConnection;

use crate::dto::competition_type::CreateTypeRequest;
use crate::error::Result;
use crate::models::CompetitionType;

const TYPE_COLUMNS: &str = "id, created_at, updated_at, deleted_at, name, describe";

pub struct TypeRepository<'a> {
    conn: &'a mut PgConnection,
}

impl<'a> TypeRepository<'a> {
    pub fn new(conn: &'a mut PgConnection) -> Self {
        Self { conn }
    }

    /// List all types, or an empty list if the query fails
    pub async fn list(&mut self) -> Vec<CompetitionType> {
        match self.try_list().await {
            Ok(types) => types,
            Err(e) => {
                tracing::debug!("Failed to list types: {:?}", e);
                Vec::new()
            }
        }
    }

    pub async fn try_list(&mut self) -> Result<Vec<CompetitionType>> {
        let sql = format!("SELECT {TYPE_COLUMNS} FROM types WHERE deleted_at IS NULL ORDER BY id");
        let types = sqlx::query_as::<_, CompetitionType>(&sql)
            .fetch_all(&mut *self.conn)
            .await?;

        Ok(types)
    }

    /// Find a type by ID, or the zero value if it does not exist
    pub async fn find_by_id(&mut self, id: i64) -> CompetitionType {
        match self.try_find_by_id(id).await {
            Ok(Some(competition_type)) => competition_type,
            Ok(None) => {
                tracing::debug!("Type not found: {}", id);
                CompetitionType::default()
            }
            Err(e) => {
                tracing::debug!("Failed to find type {}: {:?}", id, e);
                CompetitionType::default()
            }
        }
    }

    pub async fn try_find_by_id(&mut self, id: i64) -> Result<Option<CompetitionType>> {
        let sql =
            format!("SELECT {TYPE_COLUMNS} FROM types WHERE id = $1 AND deleted_at IS NULL");
        let competition_type = sqlx::query_as::<_, CompetitionType>(&sql)
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await?;

        Ok(competition_type)
    }

    /// Create a new type. Names are not unique.
    pub async fn create(&mut self, req: &CreateTypeRequest) -> Result<CompetitionType> {
        let sql = format!(
            r#"
            INSERT INTO types (name, describe)
            VALUES ($1, $2)
            RETURNING {TYPE_COLUMNS}
            "#
        );
        let competition_type = sqlx::query_as::<_, CompetitionType>(&sql)
            .bind(&req.name)
            .bind(&req.describe)
            .fetch_one(&mut *self.conn)
            .await?;

        Ok(competition_type)
    }
}
