pub mod logger;
pub mod repositories;
pub mod seed;
