pub mod export_config;
pub mod export_controller;
