use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sessions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Owning user id. A reference by value only; the schema carries
    /// no foreign-key constraint for it.
    pub user_id: i64,
    #[sea_orm(unique)]
    pub token: String,
    /// Advisory expiry. Lookups never filter on it and no background
    /// reaping happens.
    pub expires_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Pure reading of the advisory expiry field.
    pub fn is_expired(&self, now: DateTimeUtc) -> bool {
        self.expires_at <= now
    }
}
