pub mod app;
pub mod endpoints;
pub mod mappers;
pub mod middleware;
pub mod requests;
pub mod responses;
