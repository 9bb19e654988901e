//! Shared multipart parsing for photo-backed submissions.

use axum::extract::Multipart;

use crate::error::AppError;

/// A parsed photo upload: the accompanying text field plus the image bytes.
pub struct PhotoUpload {
    pub text: String,
    pub photo: Vec<u8>,
    pub extension: &'static str,
}

/// Reads a multipart form containing one text field named `text_field` and
/// one file field named `photo`. Unknown fields are ignored.
pub async fn read_photo_form(
    mut multipart: Multipart,
    text_field: &str,
) -> Result<PhotoUpload, AppError> {
    let mut text: Option<String> = None;
    let mut photo: Option<(Vec<u8>, &'static str)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| AppError::BadRequest(format!("Malformed multipart body: {}", err)))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        if name == text_field {
            let value = field
                .text()
                .await
                .map_err(|err| AppError::BadRequest(format!("Unreadable field: {}", err)))?;
            text = Some(value);
        } else if name == "photo" {
            let extension = extension_for(field.content_type());
            let bytes = field
                .bytes()
                .await
                .map_err(|err| AppError::BadRequest(format!("Unreadable photo: {}", err)))?;
            photo = Some((bytes.to_vec(), extension));
        }
    }

    let text = text
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .ok_or_else(|| AppError::BadRequest(format!("Field '{}' is required", text_field)))?;

    let (photo, extension) = photo
        .filter(|(bytes, _)| !bytes.is_empty())
        .ok_or_else(|| AppError::BadRequest("A photo is required".into()))?;

    Ok(PhotoUpload {
        text,
        photo,
        extension,
    })
}

fn extension_for(content_type: Option<&str>) -> &'static str {
    match content_type {
        Some("image/png") => "png",
        Some("image/webp") => "webp",
        _ => "jpg",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_maps_known_content_types() {
        assert_eq!(extension_for(Some("image/png")), "png");
        assert_eq!(extension_for(Some("image/webp")), "webp");
        assert_eq!(extension_for(Some("image/jpeg")), "jpg");
        assert_eq!(extension_for(None), "jpg");
    }
}
