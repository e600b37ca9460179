pub mod api_utils;
pub mod browser;
pub mod components;
pub mod date_utils;
pub mod icons;
pub mod network;
pub mod number_format;
pub mod page_frame;
pub mod recipient_selector;
