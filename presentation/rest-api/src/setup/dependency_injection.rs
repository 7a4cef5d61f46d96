use std::sync::Arc;

use imaging::ContentCropper;
use logger::TracingLogger;
use openai::client::OpenAIClient;
use openai::food_image_analyzer::FoodImageAnalyzerOpenAI;
use providers::food_safety_korea::FoodSafetyKoreaProvider;
use providers::open_food_facts::OpenFoodFactsProvider;

use business::application::image::crop::CropImageUseCaseImpl;
use business::application::item::get_expiry_overview::GetExpiryOverviewUseCaseImpl;
use business::application::product::analyze_image::AnalyzeFoodImageUseCaseImpl;
use business::application::product::identify::IdentifyFoodUseCaseImpl;
use business::application::product::resolve::ResolveProductUseCaseImpl;
use business::domain::calendar::normalizer::DateNormalizer;
use business::domain::item::expiry::ExpiryClassifier;
use business::domain::product::services::ProductProvider;
use business::domain::settings::context::SettingsContext;
use business::domain::shared::clock::SystemClock;

use crate::config::calendar_config::CalendarConfig;
use crate::config::openai_config::OpenAIConfig;
use crate::config::provider_config::ProviderConfig;
use crate::config::settings_config::SettingsConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub date_api: crate::api::dates::routes::DateApi,
    pub item_api: crate::api::items::routes::ItemApi,
    pub product_api: crate::api::products::routes::ProductApi,
    pub image_api: crate::api::images::routes::ImageApi,
    pub settings_api: crate::api::settings::routes::SettingsApi,
    pub settings: Arc<SettingsContext>,
}

impl DependencyContainer {
    pub fn new() -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);

        // Calendar
        let calendar_config = CalendarConfig::from_env();
        let normalizer = Arc::new(DateNormalizer::new(
            calendar_config.zone,
            Arc::new(SystemClock),
            logger.clone(),
        ));
        let classifier = Arc::new(ExpiryClassifier::new(normalizer.clone()));

        // Settings session
        let settings = Arc::new(SettingsContext::begin(SettingsConfig::from_env().initial));

        // Infrastructure adapters
        let provider_config = ProviderConfig::from_env();
        let open_food_facts: Arc<dyn ProductProvider> = Arc::new(OpenFoodFactsProvider::new(
            provider_config.open_food_facts_url,
        ));
        let food_safety_korea: Arc<dyn ProductProvider> = Arc::new(FoodSafetyKoreaProvider::new(
            provider_config.food_safety_korea_url,
            provider_config.food_safety_korea_api_key,
        ));

        let openai_config = OpenAIConfig::from_env();
        if openai_config.api_key.is_none() {
            tracing::warn!("OPENAI_API_KEY not set, image analysis is unavailable");
        }
        let vision_model = openai_config.vision_model;
        let openai_client = openai_config
            .api_key
            .map(|key| OpenAIClient::new(key).with_model(vision_model));
        let image_analyzer = Arc::new(FoodImageAnalyzerOpenAI::new(openai_client));

        let content_cropper = Arc::new(ContentCropper::new());

        // Use cases
        let overview_use_case = Arc::new(GetExpiryOverviewUseCaseImpl {
            classifier,
            logger: logger.clone(),
        });
        let resolve_use_case = Arc::new(ResolveProductUseCaseImpl {
            providers: vec![open_food_facts, food_safety_korea],
            logger: logger.clone(),
        });
        let analyze_image_use_case = Arc::new(AnalyzeFoodImageUseCaseImpl {
            analyzer: image_analyzer,
            normalizer: normalizer.clone(),
            logger: logger.clone(),
        });
        let crop_use_case = Arc::new(CropImageUseCaseImpl {
            cropper: content_cropper,
            logger: logger.clone(),
        });
        let identify_use_case = Arc::new(IdentifyFoodUseCaseImpl {
            resolver: resolve_use_case.clone(),
            analyzer: analyze_image_use_case.clone(),
            cropper: crop_use_case.clone(),
            logger,
        });

        Ok(Self {
            health_api: crate::api::health::routes::Api::new(normalizer.clone()),
            date_api: crate::api::dates::routes::DateApi::new(normalizer),
            item_api: crate::api::items::routes::ItemApi::new(overview_use_case, settings.clone()),
            product_api: crate::api::products::routes::ProductApi::new(
                resolve_use_case,
                analyze_image_use_case,
                identify_use_case,
            ),
            image_api: crate::api::images::routes::ImageApi::new(crop_use_case),
            settings_api: crate::api::settings::routes::SettingsApi::new(settings.clone()),
            settings,
        })
    }
}
