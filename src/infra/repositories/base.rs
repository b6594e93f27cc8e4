//! Base repository trait shared by the SeaORM-backed stores.
//!
//! Stores implement it once per entity they own and build their
//! domain-facing methods on top of these row-level helpers.

use async_trait::async_trait;
use sea_orm::{
    DatabaseConnection, DbErr, EntityTrait, Iterable, PrimaryKeyToColumn, PrimaryKeyTrait,
    QueryOrder,
};

use crate::errors::AppResult;

type PrimaryKeyOf<E> = <<E as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType;

#[async_trait]
pub trait BaseRepository<E>: Send + Sync
where
    E: EntityTrait,
    E::Model: Send + Sync,
{
    /// Get database connection reference
    fn db(&self) -> &DatabaseConnection;

    /// Find a row by primary key
    async fn find_model(&self, id: PrimaryKeyOf<E>) -> AppResult<Option<E::Model>>
    where
        PrimaryKeyOf<E>: Send + 'static,
    {
        E::find_by_id(id).one(self.db()).await.map_err(Into::into)
    }

    /// All rows, ordered by primary key
    async fn find_all_models(&self) -> AppResult<Vec<E::Model>> {
        let mut select = E::find();
        for key in E::PrimaryKey::iter() {
            select = select.order_by_asc(key.into_column());
        }
        select.all(self.db()).await.map_err(Into::into)
    }

    /// Delete a row by primary key, returning the affected row count.
    ///
    /// The raw `DbErr` is returned so callers can tell constraint
    /// violations apart from other failures.
    async fn delete_model(&self, id: PrimaryKeyOf<E>) -> Result<u64, DbErr>
    where
        PrimaryKeyOf<E>: Send + 'static,
    {
        let result = E::delete_by_id(id).exec(self.db()).await?;
        Ok(result.rows_affected)
    }
}
