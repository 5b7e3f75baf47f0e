pub mod app_config;
pub mod clock;
pub mod db;
pub mod orm;
pub mod web;
