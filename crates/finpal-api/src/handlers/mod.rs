//! HTTP request handlers

pub mod expense;
pub mod export;
pub mod health;
pub mod income;
pub mod news;
pub mod recommendation;
pub mod summary;
