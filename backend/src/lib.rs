//! Cipher Checkout - Hosted checkout sessions for the OmniPanel storefront
//!
//! This crate turns a storefront purchase request into a Stripe Checkout
//! session and hands the redirect URL back to the browser.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
