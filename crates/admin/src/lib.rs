//! Hibhana Admin library.
//!
//! This crate provides the admin back-office functionality as a library,
//! allowing it to be tested and reused.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cloudinary;
pub mod config;
pub mod db;
pub mod error;
pub mod firebase;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
