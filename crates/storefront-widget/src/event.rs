//! UI events in, reactions out.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::sections::CartView;

/// A user interaction with the page.
///
/// Products are referred to by their derived product id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum UiEvent {
    /// Cart button clicked.
    OpenCart,
    /// Cart close button clicked.
    CloseCart,
    /// "Add" button on a listing card.
    AddToCart { product: String },
    /// "Quick view" button on a listing card.
    QuickView { product: String },
    /// Modal add button, with the raw quantity field value.
    ModalAdd {
        #[serde(default)]
        quantity: String,
    },
    /// Modal close button.
    CloseModal,
    /// Remove button on a cart row.
    RemoveItem { id: String },
    /// Product link on a cart row.
    FollowCartLink { href: String },
    /// One of the listing selects changed.
    FiltersChanged {
        #[serde(default)]
        gender: String,
        #[serde(default)]
        family: String,
        #[serde(default)]
        max_price: String,
    },
    /// Search button clicked.
    ToggleSearch,
    /// Search box input.
    SearchInput { term: String },
    /// Escape key pressed.
    Escape,
    /// Checkout button clicked.
    Checkout,
}

/// A delayed visual effect for the host to run.
///
/// Effects are not cancellable. Following the same link twice schedules the
/// same effects twice, which is harmless.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledEffect {
    /// Delay from the triggering event, in milliseconds.
    pub delay_ms: u64,
    /// What to do when the delay elapses.
    pub action: EffectAction,
}

impl ScheduledEffect {
    /// Create an effect after `delay`.
    pub fn after(delay: Duration, action: EffectAction) -> Self {
        Self {
            delay_ms: u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
            action,
        }
    }

    /// The delay as a `Duration`.
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// Delayed actions on listing cards, by element id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EffectAction {
    /// Scroll the card into view and highlight it.
    ScrollAndFlash { target: String },
    /// Remove the highlight.
    Unflash { target: String },
}

/// Change to the quick-view modal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ModalUpdate {
    /// Show the modal with this body.
    Open { html: String },
    /// Hide the modal.
    Close,
}

/// What the host must update after an event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reaction {
    /// Fresh cart rendering; present after every cart mutation and on open.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cart: Option<CartView>,
    /// Blocking notice to show the user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    /// New per-card visibility of the listing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Vec<bool>>,
    /// Quick-view modal change.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modal: Option<ModalUpdate>,
    /// Delayed effects.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub scheduled: Vec<ScheduledEffect>,
}

impl Reaction {
    /// A reaction that changes nothing.
    pub fn none() -> Self {
        Self::default()
    }

    /// A reaction carrying a cart rendering.
    pub fn render(view: CartView) -> Self {
        Self {
            cart: Some(view),
            ..Default::default()
        }
    }

    /// A reaction carrying a notice.
    pub fn notice(message: impl Into<String>) -> Self {
        Self {
            notice: Some(message.into()),
            ..Default::default()
        }
    }

    /// Attach a modal change.
    pub fn with_modal(mut self, modal: ModalUpdate) -> Self {
        self.modal = Some(modal);
        self
    }

    /// Check whether the host has nothing to do.
    pub fn is_empty(&self) -> bool {
        self.cart.is_none()
            && self.notice.is_none()
            && self.visibility.is_none()
            && self.modal.is_none()
            && self.scheduled.is_empty()
    }
}
