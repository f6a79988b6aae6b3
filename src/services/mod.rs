/// HTTP health check endpoints
pub mod health;
/// Daily reminder broadcast scheduling
pub mod reminder;
