use async_trait::async_trait;
use sea_orm::{
    sea_query::Expr, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, Set,
};

use crate::entity::project::{self, ActiveModel, Column, Entity as ProjectEntity};
use crate::error::StoreResult;
use crate::models::{Project, ProjectFields};
use crate::repositories::ProjectRepository;

/// Project repository backed by SeaORM
#[derive(Clone)]
pub struct SeaOrmProjectRepository {
    db: DatabaseConnection,
}

impl SeaOrmProjectRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectRepository for SeaOrmProjectRepository {
    async fn list(&self) -> StoreResult<Vec<Project>> {
        let models = ProjectEntity::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_id(&self, id: i32) -> StoreResult<Option<Project>> {
        let model = ProjectEntity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(|m| m.into()))
    }

    async fn insert(&self, fields: &ProjectFields) -> StoreResult<i32> {
        let model = ActiveModel {
            id: NotSet,
            name: Set(fields.name.clone()),
            description: Set(fields.description.clone()),
        };

        let result = ProjectEntity::insert(model).exec(&self.db).await?;
        tracing::debug!(project_id = result.last_insert_id, "Inserted project row");
        Ok(result.last_insert_id)
    }

    async fn update(&self, id: i32, fields: &ProjectFields) -> StoreResult<u64> {
        let result = ProjectEntity::update_many()
            .col_expr(Column::Name, Expr::value(fields.name.clone()))
            .col_expr(Column::Description, Expr::value(fields.description.clone()))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected)
    }

    async fn delete(&self, id: i32) -> StoreResult<u64> {
        let result = ProjectEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected)
    }
}

// Conversion from SeaORM model to our domain model
impl From<project::Model> for Project {
    fn from(m: project::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            description: m.description,
        }
    }
}
