//! Domain layer - checkout rules and the product line they apply to.
//!
//! - `catalog` - Products, pricing tiers and product categories
//! - `checkout` - Checkout request value objects and errors

pub mod catalog;
pub mod checkout;
