use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::item::use_cases::get_expiry_overview::{
    GetExpiryOverviewParams, GetExpiryOverviewUseCase,
};
use business::domain::settings::context::SettingsContext;

use crate::api::items::dto::{ClassifiedItemResponse, ExpiryOverviewRequest, ExpiryOverviewResponse};
use crate::api::tags::ApiTags;

pub struct ItemApi {
    overview_use_case: Arc<dyn GetExpiryOverviewUseCase>,
    settings: Arc<SettingsContext>,
}

impl ItemApi {
    pub fn new(
        overview_use_case: Arc<dyn GetExpiryOverviewUseCase>,
        settings: Arc<SettingsContext>,
    ) -> Self {
        Self {
            overview_use_case,
            settings,
        }
    }
}

/// Inventory views
#[OpenApi]
impl ItemApi {
    /// Classify inventory items by expiry
    ///
    /// Normalizes every stored date, assigns expiry buckets and badges,
    /// applies the filter and sorts by urgency. Items without an expiry date
    /// come last.
    #[oai(path = "/items/expiry-overview", method = "post", tag = "ApiTags::Items")]
    async fn expiry_overview(
        &self,
        body: Json<ExpiryOverviewRequest>,
    ) -> Json<ExpiryOverviewResponse> {
        let request = body.0;
        let params = GetExpiryOverviewParams {
            items: request.items.into_iter().map(Into::into).collect(),
            filter: request.filter.unwrap_or_default().into(),
        };

        let overview = self.overview_use_case.execute(params);
        // A closed session falls back to the category codes.
        let settings = self.settings.snapshot().ok();

        let items = overview
            .items
            .into_iter()
            .map(|classified| {
                let category = classified.item.category;
                let label = settings
                    .as_ref()
                    .map_or_else(|| category.to_string(), |s| s.label_for(category));
                ClassifiedItemResponse::new(classified, label)
            })
            .collect();

        Json(ExpiryOverviewResponse {
            items,
            counts: overview.counts.into(),
        })
    }
}
