//! Checkout state machine
//!
//! Drives one checkout instance from loading through finalization. The
//! pending-order read and the profile fetch are sequential: the profile
//! is only fetched once a pending order is known to exist. The draft slot
//! is the source of truth for retries - it is deleted only after a
//! finalization call succeeds.

use curio_client::Identity;
use shared::models::{
    CustomOrderFinalize, DeliveryProfile, LineItem, PaymentMethod, PaymentStatus, PendingOrder,
    StockOrderRequest,
};

use super::money;
use super::reconcile;
use super::traits::{CheckoutError, CheckoutGateway};
use crate::draft::DraftStore;

/// Checkout flow state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutState {
    /// Reading the pending order and fetching the delivery profile
    Loading,
    /// Pending order and profile loaded; awaiting confirmation
    Ready,
    /// Holding a draft copy of the delivery profile
    Editing,
    /// A finalization call is in flight
    Submitting,
    /// Finalization succeeded; the flow instance is finished
    Done(Redirect),
    /// Finalization failed; the pending order is preserved for retry
    Failed,
}

/// Outcome of the loading phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Checkout can proceed
    Ready,
    /// No pending order or no authenticated identity
    RedirectHome,
    /// Delivery profile needs completion first
    RedirectProfile,
}

/// Post-checkout navigation target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redirect {
    Home,
    CustomOrders,
}

/// One checkout flow instance
pub struct CheckoutFlow<G: CheckoutGateway> {
    gateway: G,
    drafts: DraftStore,
    asset_base: String,
    state: CheckoutState,
    pending: Option<PendingOrder>,
    profile: Option<DeliveryProfile>,
    edit_draft: Option<DeliveryProfile>,
    payment_method: PaymentMethod,
    items: Vec<LineItem>,
    total: f64,
}

impl<G: CheckoutGateway> CheckoutFlow<G> {
    /// Create a flow in the Loading state
    pub fn new(gateway: G, drafts: DraftStore, asset_base: impl Into<String>) -> Self {
        Self {
            gateway,
            drafts,
            asset_base: asset_base.into(),
            state: CheckoutState::Loading,
            pending: None,
            profile: None,
            edit_draft: None,
            payment_method: PaymentMethod::default(),
            items: Vec::new(),
            total: 0.0,
        }
    }

    /// Load the pending order and delivery profile.
    ///
    /// Returns a redirect outcome when checkout cannot proceed (no pending
    /// order, no identity, incomplete profile). A transient profile-fetch
    /// failure is returned as an error and leaves the flow in Loading so
    /// the caller can retry.
    pub async fn load(&mut self, identity: Option<&Identity>) -> Result<LoadOutcome, CheckoutError> {
        if self.state != CheckoutState::Loading {
            return Err(CheckoutError::InvalidOperation(
                "load is only valid from the Loading state".to_string(),
            ));
        }

        // 1. Read the pending order; absent means checkout is not possible.
        //    No network call is made in that case.
        let Some(pending) = self.drafts.load() else {
            tracing::info!("No pending order, redirecting home");
            return Ok(LoadOutcome::RedirectHome);
        };

        // 2. Checkout requires an authenticated identity
        let Some(identity) = identity else {
            tracing::info!("Not authenticated, redirecting home");
            return Ok(LoadOutcome::RedirectHome);
        };

        // 3. Fetch the delivery profile (sequential, after the order read)
        let profile = match self.gateway.fetch_profile().await {
            Ok(profile) => profile,
            Err(CheckoutError::ProfileIncomplete) => {
                tracing::info!(user = %identity.id, "Profile incomplete, redirecting to completion");
                return Ok(LoadOutcome::RedirectProfile);
            }
            Err(CheckoutError::Unauthorized) => {
                return Ok(LoadOutcome::RedirectHome);
            }
            Err(e) => return Err(e),
        };

        // 4. Compute the unified line-item view and total
        self.items = reconcile::line_items(&pending, &self.asset_base);
        self.total = money::order_total(&self.items);
        self.payment_method = profile.payment_method;
        self.pending = Some(pending);
        self.profile = Some(profile);
        self.state = CheckoutState::Ready;

        tracing::info!(user = %identity.id, total = self.total, "Checkout ready");
        Ok(LoadOutcome::Ready)
    }

    // ========== Profile editing ==========

    /// Start editing the delivery profile (draft copy)
    pub fn begin_edit(&mut self) -> Result<(), CheckoutError> {
        if self.state != CheckoutState::Ready {
            return Err(CheckoutError::InvalidOperation(
                "profile editing is only available from Ready".to_string(),
            ));
        }
        self.edit_draft = self.profile.clone();
        self.state = CheckoutState::Editing;
        Ok(())
    }

    /// Mutable access to the profile draft while editing
    pub fn edit_draft_mut(&mut self) -> Option<&mut DeliveryProfile> {
        self.edit_draft.as_mut()
    }

    /// Persist the profile draft and make it authoritative.
    ///
    /// On failure the flow stays in Editing with the draft intact.
    pub async fn save_edit(&mut self) -> Result<(), CheckoutError> {
        if self.state != CheckoutState::Editing {
            return Err(CheckoutError::InvalidOperation(
                "no profile edit in progress".to_string(),
            ));
        }
        let draft = self
            .edit_draft
            .clone()
            .ok_or_else(|| CheckoutError::InvalidOperation("no profile draft".to_string()))?;

        self.gateway.save_profile(&draft).await?;

        self.profile = Some(draft);
        self.edit_draft = None;
        self.state = CheckoutState::Ready;
        tracing::debug!("Delivery profile saved");
        Ok(())
    }

    /// Discard the profile draft and return to Ready unchanged
    pub fn cancel_edit(&mut self) {
        if self.state == CheckoutState::Editing {
            self.edit_draft = None;
            self.state = CheckoutState::Ready;
        }
    }

    // ========== Payment / confirmation ==========

    /// Choose the payment method (ignored outside Ready/Failed)
    pub fn set_payment_method(&mut self, method: PaymentMethod) {
        if matches!(self.state, CheckoutState::Ready | CheckoutState::Failed) {
            self.payment_method = method;
        }
    }

    /// Whether the confirm affordance should be enabled.
    ///
    /// A customized order whose admin-set price is still absent cannot
    /// be submitted.
    pub fn can_confirm(&self) -> bool {
        matches!(self.state, CheckoutState::Ready | CheckoutState::Failed)
            && self.pending.as_ref().is_some_and(PendingOrder::is_priced)
    }

    /// Submit the order, branching by pending-order type.
    ///
    /// A second call while a finalization is in flight is rejected without
    /// issuing another request. On success the draft slot is cleared; on
    /// failure it is preserved and the flow can retry via another call.
    pub async fn confirm(&mut self) -> Result<Redirect, CheckoutError> {
        if self.state == CheckoutState::Submitting {
            return Err(CheckoutError::SubmitInFlight);
        }
        if !matches!(self.state, CheckoutState::Ready | CheckoutState::Failed) {
            return Err(CheckoutError::InvalidOperation(format!(
                "cannot confirm from {:?}",
                self.state
            )));
        }

        let pending = self.pending.clone().ok_or(CheckoutError::NoPendingOrder)?;
        if !pending.is_priced() {
            return Err(CheckoutError::Unpriced);
        }
        let profile = self.profile.clone().ok_or(CheckoutError::ProfileIncomplete)?;

        // Validate before going in flight so a rejection leaves the state intact
        if let PendingOrder::Product { items } = &pending {
            for line in items {
                money::validate_stock_line(line)?;
            }
        }

        self.state = CheckoutState::Submitting;

        let result = match &pending {
            PendingOrder::Customized { order } => {
                let request = CustomOrderFinalize {
                    payment_method: self.payment_method,
                    payment_status: PaymentStatus::derive(self.payment_method),
                };
                self.gateway
                    .finalize_custom(&order.id, &request)
                    .await
                    .map(|()| Redirect::CustomOrders)
            }
            PendingOrder::Product { items } => {
                let request = StockOrderRequest {
                    delivery: profile,
                    payment_method: self.payment_method,
                    items: items.clone(),
                };
                self.gateway
                    .finalize_stock(&request)
                    .await
                    .map(|()| Redirect::Home)
            }
        };

        match result {
            Ok(redirect) => {
                if let Err(e) = self.drafts.clear() {
                    tracing::warn!(error = %e, "Failed to clear pending order draft");
                }
                self.state = CheckoutState::Done(redirect);
                tracing::info!(?redirect, "Order finalized");
                Ok(redirect)
            }
            Err(e) => {
                // Draft is preserved so the user can retry
                self.state = CheckoutState::Failed;
                tracing::warn!(error = %e, "Order finalization failed");
                Err(e)
            }
        }
    }

    // ========== Accessors ==========

    /// Current flow state
    pub fn state(&self) -> CheckoutState {
        self.state
    }

    /// Normalized line items for display
    pub fn line_items(&self) -> &[LineItem] {
        &self.items
    }

    /// Order total
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Loaded delivery profile
    pub fn profile(&self) -> Option<&DeliveryProfile> {
        self.profile.as_ref()
    }

    /// Loaded pending order
    pub fn pending(&self) -> Option<&PendingOrder> {
        self.pending.as_ref()
    }

    /// Chosen payment method
    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }
}
