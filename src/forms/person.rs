use actix_multipart::form::MultipartForm;
use actix_multipart::form::tempfile::TempFile;
use actix_multipart::form::text::Text;
use chrono::{NaiveDate, Utc};
use thiserror::Error;

use crate::domain::tip::{NewTip, TipPhoto};
use crate::domain::types::{
    TIP_DESCRIPTION_MAX_LEN, TIP_MESSAGE_MAX_LEN, TipDescription, TipMessage, TypeConstraintError,
};

/// Maximum number of photos accepted with one tip.
pub const MAX_TIP_PHOTOS: usize = 6;
/// Maximum size of a single photo in bytes.
pub const MAX_TIP_PHOTO_BYTES: usize = 5 * 1024 * 1024;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TipFormError {
    #[error("please describe where the person was seen")]
    EmptyMessage,
    #[error("the sighting message is limited to {TIP_MESSAGE_MAX_LEN} characters")]
    MessageTooLong,
    #[error("please provide a short description of the information")]
    EmptyDescription,
    #[error("the description is limited to {TIP_DESCRIPTION_MAX_LEN} characters")]
    DescriptionTooLong,
    #[error("the sighting date is not a valid date")]
    InvalidDate,
    #[error("the sighting date cannot be in the future")]
    FutureDate,
    #[error("at most {MAX_TIP_PHOTOS} photos can be attached")]
    TooManyPhotos,
    #[error("each photo is limited to 5 MB")]
    PhotoTooLarge,
    #[error("attachments must be image files")]
    NotAnImage,
    #[error("failed to read an uploaded photo")]
    UnreadablePhoto,
}

/// Raw metadata and bytes of one uploaded photo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoUpload {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub size: usize,
    pub bytes: Vec<u8>,
}

/// Multipart form data for submitting a tip on a record.
#[derive(MultipartForm)]
pub struct TipForm {
    pub message: Text<String>,
    pub description: Text<String>,
    /// Sighting date as `YYYY-MM-DD`.
    pub sighted_on: Text<String>,
    #[multipart(limit = "5MB")]
    pub photos: Vec<TempFile>,
}

impl TipForm {
    /// Validates the submitted fields and bundles them into a [`NewTip`].
    pub fn into_new_tip(self, record_id: i64) -> Result<NewTip, TipFormError> {
        if self.photos.len() > MAX_TIP_PHOTOS {
            return Err(TipFormError::TooManyPhotos);
        }

        let mut photos = Vec::with_capacity(self.photos.len());
        for file in self.photos {
            let bytes =
                std::fs::read(file.file.path()).map_err(|_| TipFormError::UnreadablePhoto)?;
            photos.push(PhotoUpload {
                file_name: file.file_name.clone(),
                content_type: file
                    .content_type
                    .as_ref()
                    .map(|m| m.essence_str().to_string()),
                size: file.size,
                bytes,
            });
        }

        build_new_tip(
            record_id,
            &self.message.0,
            &self.description.0,
            &self.sighted_on.0,
            photos,
            Utc::now().date_naive(),
        )
    }
}

/// Validates raw tip fields against the submission rules.
pub fn build_new_tip(
    record_id: i64,
    message: &str,
    description: &str,
    sighted_on: &str,
    photos: Vec<PhotoUpload>,
    today: NaiveDate,
) -> Result<NewTip, TipFormError> {
    let message = TipMessage::new(message).map_err(|err| match err {
        TypeConstraintError::EmptyString => TipFormError::EmptyMessage,
        TypeConstraintError::TooLong(_) => TipFormError::MessageTooLong,
    })?;
    let description = TipDescription::new(description).map_err(|err| match err {
        TypeConstraintError::EmptyString => TipFormError::EmptyDescription,
        TypeConstraintError::TooLong(_) => TipFormError::DescriptionTooLong,
    })?;

    let sighted_on = NaiveDate::parse_from_str(sighted_on.trim(), "%Y-%m-%d")
        .map_err(|_| TipFormError::InvalidDate)?;
    if sighted_on > today {
        return Err(TipFormError::FutureDate);
    }

    if photos.len() > MAX_TIP_PHOTOS {
        return Err(TipFormError::TooManyPhotos);
    }

    let photos = photos
        .into_iter()
        .map(|photo| {
            if photo.size > MAX_TIP_PHOTO_BYTES || photo.bytes.len() > MAX_TIP_PHOTO_BYTES {
                return Err(TipFormError::PhotoTooLarge);
            }

            let content_type = photo.content_type.unwrap_or_default();
            let mime: mime::Mime = content_type.parse().map_err(|_| TipFormError::NotAnImage)?;
            if mime.type_() != mime::IMAGE {
                return Err(TipFormError::NotAnImage);
            }

            Ok(TipPhoto {
                file_name: photo.file_name.unwrap_or_else(|| "photo".to_string()),
                content_type,
                bytes: photo.bytes,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(NewTip {
        record_id,
        message,
        description,
        sighted_on,
        photos,
    })
}
