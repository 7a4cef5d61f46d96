use poem_openapi::Object;

/// Any date representation: canonical `YYYY-MM-DD`, ISO-8601 text,
/// epoch milliseconds, or a `{seconds, nanoseconds}` timestamp.
#[derive(Debug, Clone, Object)]
pub struct NormalizeDateRequest {
    #[oai(skip_serializing_if_is_none)]
    pub value: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Object)]
pub struct NormalizeDateResponse {
    /// Canonical local calendar day, `YYYY-MM-DD`
    pub day: String,
    /// Whole calendar days from today (negative in the past)
    pub days_from_today: i64,
}

#[derive(Debug, Clone, Object)]
pub struct ParseDayRequest {
    #[oai(skip_serializing_if_is_none)]
    pub day: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct ParseDayResponse {
    /// Local midnight of the day (RFC 3339), absent when the input is not a date
    #[oai(skip_serializing_if_is_none)]
    pub local_midnight: Option<String>,
}
