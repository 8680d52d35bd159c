pub mod info;
pub mod initialize;
pub mod pool;
pub mod repository;
pub mod slots;
