//! HTTP API
//!
//! Client for the Train Delay Predictor REST API.
//!
//! # Endpoints
//!
//! - `GET /profile` - Username of the current session, if any
//! - `POST /login` - Open a session
//! - `POST /register` - Create an account (opens a session on 201)
//! - `POST /logout` - Close the session
//! - `POST /predict` - Predict a delay from weather features
//! - `GET /history` - Past predictions of the current user
//!
//! Every call carries the browser's session cookie.

pub mod client;

pub use client::*;
