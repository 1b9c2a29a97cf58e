//! Booking entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bookings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub chef_id: Uuid,
    pub diner_id: Uuid,

    /// Target calendar day
    pub day: Date,

    pub time: String,

    /// JSON-encoded list of selected dishes
    pub dishes: String,

    pub party_size: i32,

    /// Decimal price, stored as text (SQLite has no decimal type)
    pub price: String,

    #[sea_orm(nullable)]
    pub comment: Option<String>,

    /// Lifecycle status: Pending, Accepted, Rejected, Completed, Cancelled
    pub status: String,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::chef::Entity",
        from = "Column::ChefId",
        to = "super::chef::Column::Id"
    )]
    Chef,
}

impl Related<super::chef::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Chef.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
