use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;
use serde::Deserialize;
use serde_json::json;

use business::domain::image::model::{BoundingBox, ImageData};
use business::domain::product::category::FoodCategory;
use business::domain::product::services::{
    AnalysisFailure, FoodImageAnalyzerService, FoodSuggestion, ImageAnalysis,
};

use crate::client::OpenAIClient;

const SYSTEM_PROMPT: &str = r#"You are a food recognizer for a Korean household fridge inventory app.
Identify the single main food item in the image.
Return ONLY a JSON object with these fields:
- "name": a short Korean name for the food (no brand, no weight, no price)
- "category": exactly one of "fruit", "vegetable", "meat", "dairy", "frozen", "drink", "sauce", "snack", "pantry"
- "shelfLifeDays": estimated number of days (integer) until it should be eaten, assuming typical fridge storage
- "boundingBox": pixel rectangle around the food, {"x":..,"y":..,"width":..,"height":..} (optional)

Example outputs:
{"name":"사과","category":"fruit","shelfLifeDays":21,"boundingBox":{"x":40,"y":32,"width":410,"height":388}}
{"name":"두부","category":"pantry","shelfLifeDays":5}"#;

static CODE_FENCE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"```[A-Za-z]*").ok());
static JSON_OBJECT: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\{[\s\S]*\}").ok());

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct VisionFood {
    name: String,
    category: Option<String>,
    shelf_life_days: f64,
    bounding_box: Option<VisionBox>,
}

#[derive(Deserialize)]
struct VisionBox {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl VisionBox {
    fn into_bounding_box(self) -> Option<BoundingBox> {
        let px = |v: f64| {
            if v.is_finite() {
                v.max(0.0).round().min(u32::MAX as f64) as u32
            } else {
                0
            }
        };
        let bbox = BoundingBox::new(px(self.x), px(self.y), px(self.width), px(self.height));
        (bbox.width > 0 && bbox.height > 0).then_some(bbox)
    }
}

/// Vision adapter for food photos.
///
/// Without a client (no API key configured) every call reports
/// `ImageAnalysis::Unavailable` and no request is sent.
pub struct FoodImageAnalyzerOpenAI {
    client: Option<OpenAIClient>,
}

impl FoodImageAnalyzerOpenAI {
    pub fn new(client: Option<OpenAIClient>) -> Self {
        Self { client }
    }

    fn strip_code_fences(content: &str) -> String {
        CODE_FENCE
            .as_ref()
            .map(|re| re.replace_all(content, "").to_string())
            .unwrap_or_else(|| content.to_string())
    }

    pub(crate) fn parse_response(content: &str) -> ImageAnalysis {
        let unfenced = Self::strip_code_fences(content);
        let json_str = match JSON_OBJECT.as_ref().and_then(|re| re.find(&unfenced)) {
            Some(m) => m.as_str(),
            None => return ImageAnalysis::Failed(AnalysisFailure::MalformedResponse),
        };

        let parsed: VisionFood = match serde_json::from_str(json_str) {
            Ok(v) => v,
            Err(_) => return ImageAnalysis::Failed(AnalysisFailure::MalformedResponse),
        };

        let name = parsed.name.trim().to_string();
        if name.is_empty() || !parsed.shelf_life_days.is_finite() {
            return ImageAnalysis::Failed(AnalysisFailure::MalformedResponse);
        }

        let category = parsed
            .category
            .and_then(|c| c.trim().to_lowercase().parse::<FoodCategory>().ok())
            .unwrap_or_default();

        ImageAnalysis::Identified(FoodSuggestion {
            name,
            category,
            shelf_life_days: parsed.shelf_life_days.round() as i64,
            bounding_box: parsed.bounding_box.and_then(VisionBox::into_bounding_box),
        })
    }

    fn output_text(data: &serde_json::Value) -> Option<&str> {
        data["output"]
            .as_array()
            .and_then(|outputs| outputs.iter().find(|o| o["type"] == "message"))
            .and_then(|msg| msg["content"].as_array())
            .and_then(|contents| contents.iter().find(|c| c["type"] == "output_text"))
            .and_then(|c| c["text"].as_str())
    }
}

#[async_trait]
impl FoodImageAnalyzerService for FoodImageAnalyzerOpenAI {
    async fn analyze(&self, image: &ImageData) -> ImageAnalysis {
        let Some(client) = &self.client else {
            return ImageAnalysis::Unavailable;
        };

        let body = json!({
            "model": client.model,
            "input": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {
                    "role": "user",
                    "content": [
                        {
                            "type": "input_image",
                            "image_url": image.to_data_url(),
                            "detail": "low",
                        },
                        {
                            "type": "input_text",
                            "text": "Identify this food.",
                        },
                    ],
                },
            ],
            "temperature": 0.1,
        });

        let response = match client
            .client
            .post(client.responses_url())
            .header("Content-Type", "application/json")
            .header("Authorization", client.auth_header())
            .json(&body)
            .send()
            .await
        {
            Ok(resp) if resp.status().is_success() => resp,
            _ => return ImageAnalysis::Failed(AnalysisFailure::RequestFailed),
        };

        let data: serde_json::Value = match response.json().await {
            Ok(data) => data,
            Err(_) => return ImageAnalysis::Failed(AnalysisFailure::MalformedResponse),
        };

        match Self::output_text(&data) {
            Some(text) => Self::parse_response(text),
            None => ImageAnalysis::Failed(AnalysisFailure::MalformedResponse),
        }
    }
}
