use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::calendar::date_input::DateInput;
use business::domain::calendar::normalizer::DateNormalizer;

use crate::api::dates::dto::{
    NormalizeDateRequest, NormalizeDateResponse, ParseDayRequest, ParseDayResponse,
};
use crate::api::tags::ApiTags;

pub struct DateApi {
    normalizer: Arc<DateNormalizer>,
}

impl DateApi {
    pub fn new(normalizer: Arc<DateNormalizer>) -> Self {
        Self { normalizer }
    }
}

/// Local calendar day conversions
#[OpenApi]
impl DateApi {
    /// Normalize a date to a local calendar day
    ///
    /// Missing or unreadable values resolve to today.
    #[oai(path = "/dates/normalize", method = "post", tag = "ApiTags::Dates")]
    async fn normalize(&self, body: Json<NormalizeDateRequest>) -> Json<NormalizeDateResponse> {
        let input = body.0.value.as_ref().and_then(DateInput::from_json);
        let day = self.normalizer.to_calendar_day(input.as_ref());

        Json(NormalizeDateResponse {
            day: day.to_string(),
            days_from_today: self.normalizer.today().days_until(day),
        })
    }

    /// Parse a stored calendar day back to local midnight
    #[oai(path = "/dates/parse", method = "post", tag = "ApiTags::Dates")]
    async fn parse(&self, body: Json<ParseDayRequest>) -> Json<ParseDayResponse> {
        let local_midnight = self
            .normalizer
            .parse_calendar_day_string(body.0.day.as_deref())
            .map(|dt| dt.to_rfc3339());

        Json(ParseDayResponse { local_midnight })
    }
}
