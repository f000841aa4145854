use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A single historical submission of a user-built form.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "submitted_form")]
pub struct Model {
    /// UUIDv7 primary key.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Title of the form this submission was made against.
    pub form_title: String,

    /// CMS member id of the submitter. NULL for anonymous submissions.
    pub submitted_by: Option<i32>,

    #[sea_orm(has_many)]
    pub file_fields: HasMany<super::submitted_file_field::Entity>,

    pub created_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
