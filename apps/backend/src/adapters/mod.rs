//! SeaORM adapters. Functions here return `DbErr`; the repos layer maps
//! them to `DomainError`.

pub mod best_chefs_sea;
pub mod meal_categories_sea;
