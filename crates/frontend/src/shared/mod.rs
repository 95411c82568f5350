pub mod api_utils;
pub mod crud;
pub mod editor;
pub mod form_fields;
pub mod format;
pub mod icons;
pub mod line_items;
pub mod list_toolbar;
pub mod list_utils;
pub mod notify;
pub mod page_frame;
pub mod page_standard;
