// src/models/mod.rs

//! Contains data structures representing database entities.

// Declare child modules for each model
pub mod invoice;
pub mod order;
pub mod payment;
pub mod product;

// Re-export the model structs for convenient access
pub use invoice::Invoice;
pub use order::{Order, OrderStatus};
pub use payment::{Payment, PaymentStatus};
pub use product::Product;
