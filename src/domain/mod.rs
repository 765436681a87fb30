pub mod category;
pub mod department;
pub mod staff;
pub mod suggestion;
pub mod types;
