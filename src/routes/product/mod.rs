mod handler;
mod model;

#[cfg(test)]
mod tests;

pub use handler::{get_product, get_products};
pub use model::ProductsResponse;
