use crate::auth::application::domain::entities::UserId;
use crate::modules::topic::application::ports::outgoing::{TopicQueryResult, TopicResult};
use sea_orm::entity::prelude::*;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "topics")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub user_id: Uuid,

    pub text: String,

    pub slug: String,

    pub date_added: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_repository_result(&self) -> TopicResult {
        TopicResult {
            id: self.id,
            owner: UserId::from(self.user_id),
            text: self.text.clone(),
            slug: self.slug.clone(),
            date_added: self.date_added.into(),
        }
    }

    pub fn to_query_result(&self) -> TopicQueryResult {
        TopicQueryResult {
            id: self.id,
            owner: UserId::from(self.user_id),
            text: self.text.clone(),
            slug: self.slug.clone(),
            date_added: self.date_added.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "crate::modules::entry::adapter::outgoing::sea_orm_entity::Entity")]
    Entries,
}

impl Related<crate::modules::entry::adapter::outgoing::sea_orm_entity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Entries.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
