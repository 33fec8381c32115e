//! Restaurant entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "restaurants")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Account that created the restaurant; never changes
    pub created_by_id: String,

    pub name: String,

    #[sea_orm(nullable)]
    pub description: Option<String>,

    #[sea_orm(nullable)]
    pub category: Option<String>,

    pub has_delivery: bool,

    #[sea_orm(nullable)]
    pub contact_email: Option<String>,

    #[sea_orm(nullable)]
    pub contact_number: Option<String>,

    pub city: String,
    pub street: String,

    #[sea_orm(nullable)]
    pub postal_code: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::dish::Entity")]
    Dishes,
}

impl Related<super::dish::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Dishes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
