pub mod chefs;
pub mod error_shape;
pub mod meal_categories;
