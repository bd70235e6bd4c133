use sea_orm::entity::prelude::*;

/// Account row. `password` holds an Argon2id PHC string.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password: String,
    pub role: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::users_details::Entity")]
    UsersDetails,
    #[sea_orm(has_many = "super::users_notes::Entity")]
    UsersNotes,
}

impl Related<super::users_details::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UsersDetails.def()
    }
}

impl Related<super::users_notes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UsersNotes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
