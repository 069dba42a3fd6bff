#[cfg(test)]
pub mod memory;
pub mod product;
pub mod user;
