use chrono::Utc;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use tracing::instrument;
use uuid::Uuid;

use crate::entity::{submitted_file_field, submitted_file_upload, submitted_form};
use crate::error::FieldError;
use crate::field::SubmittedFileField;
use crate::filename::validate_upload_filename;

/// One uploaded file attached at submission time.
///
/// The display name lives in the file engine, not in our rows; it is passed
/// here because field creation is the last stop before the reference becomes
/// immutable, so the name is validated now or never.
#[derive(Clone, Debug)]
pub struct NewUpload {
    pub file_id: Uuid,
    pub filename: String,
}

/// A file field to persist as part of a submission.
#[derive(Clone, Debug, Default)]
pub struct NewFileField {
    /// Field name from the form definition (e.g. "file-upload-1").
    pub name: String,
    /// Human-readable field label shown in reports.
    pub title: String,
    /// Multi-upload references, in upload order.
    pub uploads: Vec<NewUpload>,
    /// Legacy single-upload reference.
    pub uploaded_file_id: Option<Uuid>,
}

/// Persist a new submission row and return its id.
#[instrument(skip(db))]
pub async fn create_submission<C: ConnectionTrait>(
    db: &C,
    form_title: &str,
    submitted_by: Option<i32>,
) -> Result<Uuid, FieldError> {
    let id = Uuid::now_v7();
    let row = submitted_form::ActiveModel {
        id: Set(id),
        form_title: Set(form_title.to_string()),
        submitted_by: Set(submitted_by),
        created_at: Set(Utc::now()),
    };
    submitted_form::Entity::insert(row)
        .exec_without_returning(db)
        .await?;
    Ok(id)
}

/// Persist a file field and its upload join rows, validating every upload
/// filename first. Nothing is written if any name is rejected.
#[instrument(skip(db, field))]
pub async fn create_file_field<C: ConnectionTrait>(
    db: &C,
    submission_id: Uuid,
    field: NewFileField,
) -> Result<Uuid, FieldError> {
    for upload in &field.uploads {
        validate_upload_filename(&upload.filename)?;
    }

    let id = Uuid::now_v7();
    let row = submitted_file_field::ActiveModel {
        id: Set(id),
        submitted_form_id: Set(submission_id),
        name: Set(field.name),
        title: Set(field.title),
        uploaded_file_id: Set(field.uploaded_file_id),
        created_at: Set(Utc::now()),
    };
    submitted_file_field::Entity::insert(row)
        .exec_without_returning(db)
        .await?;

    for (position, upload) in field.uploads.iter().enumerate() {
        let join = submitted_file_upload::ActiveModel {
            field_id: Set(id),
            file_id: Set(upload.file_id),
            position: Set(i32::try_from(position).unwrap_or(i32::MAX)),
        };
        submitted_file_upload::Entity::insert(join)
            .exec_without_returning(db)
            .await?;
    }

    Ok(id)
}

/// Load one file field as the domain record the resolver consumes.
pub async fn load_file_field<C: ConnectionTrait>(
    db: &C,
    id: Uuid,
) -> Result<Option<SubmittedFileField>, FieldError> {
    let Some(row) = submitted_file_field::Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };
    Ok(Some(assemble(db, row).await?))
}

/// All file fields of a submission, in creation order.
pub async fn file_fields_for_submission<C: ConnectionTrait>(
    db: &C,
    submission_id: Uuid,
) -> Result<Vec<SubmittedFileField>, FieldError> {
    let rows = submitted_file_field::Entity::find()
        .filter(submitted_file_field::Column::SubmittedFormId.eq(submission_id))
        .order_by_asc(submitted_file_field::Column::CreatedAt)
        .all(db)
        .await?;

    let mut fields = Vec::with_capacity(rows.len());
    for row in rows {
        fields.push(assemble(db, row).await?);
    }
    Ok(fields)
}

/// Delete a submission and everything it owns: upload join rows, then field
/// rows, then the form row. Returns the number of rows removed.
///
/// The stored assets themselves are the file engine's to clean up.
#[instrument(skip(db))]
pub async fn delete_submission<C: ConnectionTrait>(
    db: &C,
    submission_id: Uuid,
) -> Result<u64, FieldError> {
    let field_ids: Vec<Uuid> = submitted_file_field::Entity::find()
        .filter(submitted_file_field::Column::SubmittedFormId.eq(submission_id))
        .all(db)
        .await?
        .into_iter()
        .map(|f| f.id)
        .collect();

    let mut deleted = 0;
    if !field_ids.is_empty() {
        deleted += submitted_file_upload::Entity::delete_many()
            .filter(submitted_file_upload::Column::FieldId.is_in(field_ids.clone()))
            .exec(db)
            .await?
            .rows_affected;
        deleted += submitted_file_field::Entity::delete_many()
            .filter(submitted_file_field::Column::Id.is_in(field_ids))
            .exec(db)
            .await?
            .rows_affected;
    }
    deleted += submitted_form::Entity::delete_by_id(submission_id)
        .exec(db)
        .await?
        .rows_affected;

    Ok(deleted)
}

async fn assemble<C: ConnectionTrait>(
    db: &C,
    row: submitted_file_field::Model,
) -> Result<SubmittedFileField, FieldError> {
    let uploads = submitted_file_upload::Entity::find()
        .filter(submitted_file_upload::Column::FieldId.eq(row.id))
        .order_by_asc(submitted_file_upload::Column::Position)
        .all(db)
        .await?;

    Ok(SubmittedFileField {
        id: row.id,
        uploaded_file_id: row.uploaded_file_id,
        uploaded_file_ids: uploads.into_iter().map(|u| u.file_id).collect(),
    })
}
