pub mod cmake;
pub mod config;
pub mod desktop;
pub mod paths;
