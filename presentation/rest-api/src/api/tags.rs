use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    Health,
    Dates,
    Items,
    Products,
    Images,
    Settings,
}
