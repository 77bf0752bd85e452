pub mod best_chefs;
pub mod meal_categories;

pub use best_chefs::Entity as BestChefs;
pub use best_chefs::Model as BestChef;
pub use meal_categories::Entity as MealCategories;
pub use meal_categories::Model as MealCategory;
