//! Repositories over the products table

mod products;

pub use products::{DbError, Product, ProductRepo};
