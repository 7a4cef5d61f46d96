pub mod food_safety_korea;
pub mod http;
pub mod open_food_facts;
