//! Product catalog domain.
//!
//! A pricing tier maps one-to-one onto a catalog product. Products are defined
//! statically and are read-only at request time.

mod category;
mod product;

pub use category::ProductCategory;
pub use product::Product;
