use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::image::model::ImageData;
use business::domain::product::errors::ProductError;
use business::domain::product::use_cases::analyze_image::{
    AnalyzeFoodImageParams, AnalyzeFoodImageUseCase,
};
use business::domain::product::use_cases::identify::{IdentifyFoodParams, IdentifyFoodUseCase};
use business::domain::product::use_cases::resolve::{ResolveProductParams, ResolveProductUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::products::dto::{
    AnalyzeImageRequest, FoodImageSuggestionResponse, IdentifyFoodRequest,
    ItemSuggestionResponse, ProductMatchResponse, ResolveProductRequest,
};
use crate::api::tags::ApiTags;

pub struct ProductApi {
    resolve_use_case: Arc<dyn ResolveProductUseCase>,
    analyze_image_use_case: Arc<dyn AnalyzeFoodImageUseCase>,
    identify_use_case: Arc<dyn IdentifyFoodUseCase>,
}

impl ProductApi {
    pub fn new(
        resolve_use_case: Arc<dyn ResolveProductUseCase>,
        analyze_image_use_case: Arc<dyn AnalyzeFoodImageUseCase>,
        identify_use_case: Arc<dyn IdentifyFoodUseCase>,
    ) -> Self {
        Self {
            resolve_use_case,
            analyze_image_use_case,
            identify_use_case,
        }
    }
}

/// Product identification API
///
/// Barcode lookup against the product databases and photo recognition.
#[OpenApi]
impl ProductApi {
    /// Resolve a barcode
    ///
    /// Queries the product databases in order and returns the first match.
    /// Responds 404 when no database knows the barcode.
    #[oai(path = "/products/resolve", method = "post", tag = "ApiTags::Products")]
    async fn resolve(&self, body: Json<ResolveProductRequest>) -> ResolveProductResponse {
        let params = ResolveProductParams {
            barcode: body.0.barcode,
        };

        match self.resolve_use_case.execute(params).await {
            Ok(Some(product)) => ResolveProductResponse::Ok(Json(product.into())),
            Ok(None) => ResolveProductResponse::NotFound(ErrorResponse::json(
                "NotFound",
                "product.not_registered",
            )),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => ResolveProductResponse::BadRequest(json),
                    _ => ResolveProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Recognize food in a photo
    ///
    /// Asks the vision model for name, category, shelf life and the
    /// subject's bounding box. The expiry date is today plus the shelf life.
    #[oai(
        path = "/products/analyze-image",
        method = "post",
        tag = "ApiTags::Products"
    )]
    async fn analyze_image(&self, body: Json<AnalyzeImageRequest>) -> AnalyzeImageResponse {
        let result = match ImageData::from_base64(&body.0.image_base64) {
            Ok(image) => {
                self.analyze_image_use_case
                    .execute(AnalyzeFoodImageParams { image })
                    .await
            }
            Err(err) => Err(ProductError::Image(err)),
        };

        match result {
            Ok(suggestion) => AnalyzeImageResponse::Ok(Json(suggestion.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AnalyzeImageResponse::BadRequest(json),
                    422 => AnalyzeImageResponse::UnprocessableEntity(json),
                    503 => AnalyzeImageResponse::ServiceUnavailable(json),
                    _ => AnalyzeImageResponse::InternalError(json),
                }
            }
        }
    }

    /// Identify food from a barcode and/or photo
    ///
    /// Tries the barcode first, then the photo. Responds 404 when the barcode
    /// is unknown and no photo was sent.
    #[oai(path = "/products/identify", method = "post", tag = "ApiTags::Products")]
    async fn identify(&self, body: Json<IdentifyFoodRequest>) -> IdentifyFoodResponse {
        let request = body.0;
        let image = match request
            .image_base64
            .as_deref()
            .map(ImageData::from_base64)
            .transpose()
        {
            Ok(image) => image,
            Err(err) => {
                let (_, json) = err.into_error_response();
                return IdentifyFoodResponse::BadRequest(json);
            }
        };

        let params = IdentifyFoodParams {
            barcode: request.barcode,
            image,
        };

        match self.identify_use_case.execute(params).await {
            Ok(Some(suggestion)) => IdentifyFoodResponse::Ok(Json(suggestion.into())),
            Ok(None) => IdentifyFoodResponse::NotFound(ErrorResponse::json(
                "NotFound",
                "product.not_identified",
            )),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => IdentifyFoodResponse::BadRequest(json),
                    422 => IdentifyFoodResponse::UnprocessableEntity(json),
                    503 => IdentifyFoodResponse::ServiceUnavailable(json),
                    _ => IdentifyFoodResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ResolveProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductMatchResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum AnalyzeImageResponse {
    #[oai(status = 200)]
    Ok(Json<FoodImageSuggestionResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum IdentifyFoodResponse {
    #[oai(status = 200)]
    Ok(Json<ItemSuggestionResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
