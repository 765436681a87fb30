pub mod category;
pub mod config;
pub mod department;
pub mod staff;
