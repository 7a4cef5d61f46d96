pub mod client;
pub mod food_image_analyzer;
