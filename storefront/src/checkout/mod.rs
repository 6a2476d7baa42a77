//! Checkout Module
//!
//! Reconciles a Pending Order of either shape into a unified line-item
//! view, and drives the linear checkout flow:
//!
//! ```text
//! Loading → Ready ⇄ Editing(profile)
//!             ↓
//!        Submitting → Done | Failed (retryable)
//! ```
//!
//! Submission branches by order type: stock carts go to the stock
//! finalization endpoint with a full delivery snapshot; customized
//! requests go to the custom finalization endpoint with a derived
//! payment status.

pub mod flow;
pub mod gateway;
pub mod money;
pub mod reconcile;
pub mod traits;

pub use flow::{CheckoutFlow, CheckoutState, LoadOutcome, Redirect};
pub use gateway::HttpCheckoutGateway;
pub use reconcile::{line_items, resolve_image};
pub use traits::{CheckoutError, CheckoutGateway};
