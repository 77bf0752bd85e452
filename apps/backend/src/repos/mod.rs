pub mod chefs;
pub mod documents;
pub mod meal_categories;

pub use documents::Document;
