use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::image::model::ImageData;
use business::domain::image::use_cases::crop::{CropImageParams, CropImageUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::images::dto::{CropImageRequest, CropImageResponse};
use crate::api::tags::ApiTags;

pub struct ImageApi {
    crop_use_case: Arc<dyn CropImageUseCase>,
}

impl ImageApi {
    pub fn new(crop_use_case: Arc<dyn CropImageUseCase>) -> Self {
        Self { crop_use_case }
    }
}

#[OpenApi]
impl ImageApi {
    /// Crop a photo to its subject
    ///
    /// Uses the bounding box when given, otherwise trims transparent
    /// borders. Images with nothing visible come back unchanged.
    #[oai(path = "/images/crop", method = "post", tag = "ApiTags::Images")]
    async fn crop(&self, body: Json<CropImageRequest>) -> CropImageApiResponse {
        let request = body.0;
        let result = match ImageData::from_base64(&request.image_base64) {
            Ok(image) => {
                self.crop_use_case
                    .execute(CropImageParams {
                        image,
                        bounding_box: request.bounding_box.map(Into::into),
                    })
                    .await
            }
            Err(err) => Err(err),
        };

        match result {
            Ok(image) => CropImageApiResponse::Ok(Json(image.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CropImageApiResponse::BadRequest(json),
                    _ => CropImageApiResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CropImageApiResponse {
    #[oai(status = 200)]
    Ok(Json<CropImageResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
