pub mod models;

pub use error_location::ErrorLocation;
pub use models::user::User;

#[cfg(test)]
mod tests;
