//! Storefront core for the Curio client
//!
//! The two client-side subsystems over the backend collaborators:
//!
//! - **catalog**: in-memory filter engine deriving the visible product list
//! - **checkout**: pending-order reconciliation and the checkout state machine
//! - **draft**: durable single-slot pending-order storage
//!
//! # Data Flow
//!
//! ```text
//! Product Directory → FilterEngine → visible list
//!
//! Cart / custom build → DraftStore → CheckoutFlow → Order Finalization
//!                                        ↑
//!                              Delivery Profile Service
//! ```

pub mod catalog;
pub mod checkout;
pub mod draft;

pub use catalog::FilterEngine;
pub use checkout::{
    CheckoutError, CheckoutFlow, CheckoutGateway, CheckoutState, HttpCheckoutGateway, LoadOutcome,
    Redirect,
};
pub use draft::{DraftError, DraftStore};
