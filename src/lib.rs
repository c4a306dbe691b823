// src/lib.rs

//! Order-processing backend: product catalog CRUD plus the order → invoice →
//! payment workflow over Postgres.

pub mod config;
pub mod errors;
pub mod models;
pub mod pipelines;
pub mod repos;
pub mod services;
pub mod state;
pub mod web;
