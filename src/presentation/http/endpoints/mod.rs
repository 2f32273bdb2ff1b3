pub mod root;
pub mod users;
