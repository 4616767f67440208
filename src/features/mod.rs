pub mod catalogue;
pub mod pollutions;
pub mod users;
