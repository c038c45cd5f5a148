pub mod health;
pub mod hello;
pub mod not_found;
pub mod ping;

pub use health::health_handler;
pub use hello::hello_handler;
pub use not_found::not_found_handler;
pub use ping::ping_handler;
