use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A file-upload answer within one submitted form.
///
/// File references are written once when the submission is persisted and
/// never mutated afterwards.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "submitted_file_field")]
pub struct Model {
    /// UUIDv7 primary key.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub submitted_form_id: Uuid,
    #[sea_orm(belongs_to, from = "submitted_form_id", to = "id")]
    pub submitted_form: HasOne<super::submitted_form::Entity>,

    /// Field name from the form definition (e.g. "file-upload-1").
    pub name: String,

    /// Human-readable field label shown in reports.
    pub title: String,

    /// Legacy single-upload reference. Ignored at read time whenever the
    /// field has join rows.
    pub uploaded_file_id: Option<Uuid>,

    #[sea_orm(has_many)]
    pub uploads: HasMany<super::submitted_file_upload::Entity>,

    pub created_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
