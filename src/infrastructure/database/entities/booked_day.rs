//! Booked day entity (ledger rows)
//!
//! One row per committed (chef, day) pair. The UNIQUE index on
//! `(chef_id, day)` is the conditional-insert primitive that makes
//! `commit_day` atomic.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "booked_days")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub chef_id: Uuid,
    pub day: Date,

    /// The booking holding this day
    pub booking_id: Uuid,

    pub created_at: DateTimeUtc,
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
