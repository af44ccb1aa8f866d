pub mod category_card;
pub mod category_modal;
pub mod create_category_form;
