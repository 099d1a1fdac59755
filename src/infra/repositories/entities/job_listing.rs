//! Job listing database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::JobListing;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "job_listing")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub job_name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Text")]
    pub location: String,
    pub busy: String,
    /// Unix seconds
    pub time_publication: i64,
    pub how_many_people: i32,
    #[sea_orm(column_type = "Text")]
    pub salary: String,
    #[sea_orm(column_type = "Text")]
    pub favorites: String,
    #[sea_orm(column_type = "Text")]
    pub question: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for JobListing {
    fn from(model: Model) -> Self {
        JobListing {
            id: model.id,
            job_name: model.job_name,
            description: model.description,
            location: model.location,
            busy: model.busy,
            time_publication: model.time_publication,
            how_many_people: model.how_many_people,
            salary: model.salary,
            favorites: model.favorites,
            question: model.question,
        }
    }
}
