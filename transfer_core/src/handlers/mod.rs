//! HTTP handlers for the transfer endpoints

pub mod docs;
pub mod files;
pub mod health;
pub mod pages;
pub mod routes;
