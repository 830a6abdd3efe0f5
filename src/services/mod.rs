pub mod notification_service;
pub mod order_reference;
pub mod order_service;
pub mod order_validation;
