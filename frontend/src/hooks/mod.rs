pub mod use_categories;
