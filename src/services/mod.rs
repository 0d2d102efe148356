pub mod navigation_service;
pub mod staging_service;
