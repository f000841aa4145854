use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Join row linking a submitted file field to one uploaded file.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "submitted_file_upload")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub field_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub file_id: Uuid,
    #[sea_orm(belongs_to, from = "field_id", to = "id")]
    pub field: BelongsTo<super::submitted_file_field::Entity>,

    /// Preserves upload order within the field.
    #[sea_orm(default_value = 0)]
    pub position: i32,
}

impl ActiveModelBehavior for ActiveModel {}
