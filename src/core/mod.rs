pub mod app;
pub mod greeter;
