use crate::modules::entry::application::ports::outgoing::{EntryQueryResult, EntryResult};
use sea_orm::entity::prelude::*;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "entries")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub topic_id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub text: String,

    pub slug: String,

    pub date_added: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_repository_result(&self) -> EntryResult {
        EntryResult {
            id: self.id,
            topic_id: self.topic_id,
            text: self.text.clone(),
            slug: self.slug.clone(),
            date_added: self.date_added.into(),
            updated_at: self.updated_at.into(),
        }
    }

    pub fn to_query_result(&self) -> EntryQueryResult {
        EntryQueryResult {
            id: self.id,
            topic_id: self.topic_id,
            text: self.text.clone(),
            slug: self.slug.clone(),
            date_added: self.date_added.into(),
            updated_at: self.updated_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::topic::adapter::outgoing::sea_orm_entity::Entity",
        from = "Column::TopicId",
        to = "crate::modules::topic::adapter::outgoing::sea_orm_entity::Column::Id",
        on_delete = "Cascade"
    )]
    Topic,
}

impl Related<crate::modules::topic::adapter::outgoing::sea_orm_entity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Topic.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if !insert {
            self.updated_at = sea_orm::ActiveValue::Set(chrono::Utc::now().into());
        }

        Ok(self)
    }
}
