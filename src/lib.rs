pub mod config;
pub mod constants;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod page;
pub mod presentation;
pub mod services;

#[cfg(test)]
pub mod test_utils;
