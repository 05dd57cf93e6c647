use async_trait::async_trait;
use sea_orm::{
    sea_query::Expr, ActiveValue::NotSet, ColumnTrait, Condition, DatabaseConnection,
    EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::entity::task::{self, ActiveModel, Column, Entity as TaskEntity};
use crate::error::{StoreError, StoreResult};
use crate::models::{Task, TaskFields, TaskFilter};
use crate::repositories::TaskRepository;

/// Task repository backed by SeaORM
#[derive(Clone)]
pub struct SeaOrmTaskRepository {
    db: DatabaseConnection,
}

impl SeaOrmTaskRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Build the WHERE clause for a task listing; absent filters add no predicate
fn filter_condition(filter: &TaskFilter) -> Condition {
    Condition::all()
        .add_option(filter.status.clone().map(|s| Column::Status.eq(s)))
        .add_option(filter.priority.clone().map(|p| Column::Priority.eq(p)))
        .add_option(filter.due_date.map(|d| Column::DueDate.eq(d)))
}

#[async_trait]
impl TaskRepository for SeaOrmTaskRepository {
    async fn list(&self, filter: &TaskFilter) -> StoreResult<Vec<Task>> {
        let models = TaskEntity::find()
            .filter(filter_condition(filter))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn list_by_project(&self, project_id: i32) -> StoreResult<Vec<Task>> {
        let models = TaskEntity::find()
            .filter(Column::ProjectId.eq(project_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_id(&self, id: i32) -> StoreResult<Option<Task>> {
        let model = TaskEntity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(|m| m.into()))
    }

    async fn insert(&self, fields: &TaskFields) -> StoreResult<i32> {
        let project_id = fields
            .project_id
            .ok_or_else(|| StoreError::Constraint("task.project_id cannot be null".to_string()))?;

        let model = ActiveModel {
            id: NotSet,
            title: Set(fields.title.clone()),
            description: Set(fields.description.clone()),
            status: Set(fields.status.clone()),
            priority: Set(fields.priority.clone()),
            project_id: Set(project_id),
            due_date: Set(fields.due_date),
        };

        let result = TaskEntity::insert(model).exec(&self.db).await?;
        tracing::debug!(task_id = result.last_insert_id, "Inserted task row");
        Ok(result.last_insert_id)
    }

    async fn update(&self, id: i32, fields: &TaskFields) -> StoreResult<u64> {
        // A missing project_id is bound as NULL and left for the column constraint to reject.
        let result = TaskEntity::update_many()
            .col_expr(Column::Title, Expr::value(fields.title.clone()))
            .col_expr(Column::Description, Expr::value(fields.description.clone()))
            .col_expr(Column::Status, Expr::value(fields.status.clone()))
            .col_expr(Column::Priority, Expr::value(fields.priority.clone()))
            .col_expr(Column::ProjectId, Expr::value(fields.project_id))
            .col_expr(Column::DueDate, Expr::value(fields.due_date))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected)
    }

    async fn delete(&self, id: i32) -> StoreResult<u64> {
        let result = TaskEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected)
    }
}

impl From<task::Model> for Task {
    fn from(m: task::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            description: m.description,
            status: m.status,
            priority: m.priority,
            project_id: m.project_id,
            due_date: m.due_date,
        }
    }
}
