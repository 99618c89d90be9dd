use std::collections::HashMap;

use axum::{body::Bytes, extract::Multipart};

use crate::server::error::AppError;

/// A file part of a multipart form.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Client supplied file name.
    pub file_name: Option<String>,
    /// Client supplied MIME type.
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

/// Fully buffered multipart form: text fields by name and file parts by name.
#[derive(Debug, Default)]
pub struct FormData {
    fields: HashMap<String, String>,
    files: HashMap<String, UploadedFile>,
}

impl FormData {
    /// Reads every part of a multipart body.
    ///
    /// Parts carrying a file name are stored as files; empty file parts (an untouched
    /// file input) are skipped. Repeated names keep the last value.
    ///
    /// # Returns
    /// - `Ok(FormData)` - All parts buffered
    /// - `Err(AppError::MultipartErr)` - Malformed body or body over the size limit
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await? {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            if field.file_name().is_some() {
                let file_name = field.file_name().map(str::to_string);
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await?;

                if !bytes.is_empty() {
                    form.insert_file(
                        name,
                        UploadedFile {
                            file_name,
                            content_type,
                            bytes,
                        },
                    );
                }
            } else {
                let value = field.text().await?;
                form.insert_text(name, value);
            }
        }

        Ok(form)
    }

    pub fn insert_text(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn insert_file(&mut self, name: impl Into<String>, file: UploadedFile) {
        self.files.insert(name.into(), file);
    }

    /// Text value of a field, if present.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Text value of a field that must be present.
    pub fn required(&self, name: &str) -> Result<&str, AppError> {
        self.text(name)
            .ok_or_else(|| AppError::BadRequest(format!("Missing required field: {}", name)))
    }

    /// Removes and returns a file part.
    pub fn take_file(&mut self, name: &str) -> Option<UploadedFile> {
        self.files.remove(name)
    }
}
