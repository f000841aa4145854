pub mod submitted_file_field;
pub mod submitted_file_upload;
pub mod submitted_form;
