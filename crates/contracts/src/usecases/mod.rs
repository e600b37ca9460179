pub mod common;
pub mod u501_send_campaign;
pub mod u502_send_sms;
