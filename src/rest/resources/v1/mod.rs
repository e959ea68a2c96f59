//! REST resources for the `/v1` Creem API.
//!
//! # Endpoints
//!
//! Each resource module adds typed methods to
//! [`CreemClient`](crate::CreemClient):
//!
//! - [`checkout`]: `create_checkout_session`, `get_checkout_session`
//! - [`product`]: `create_product`, `get_product`, `list_products`
//! - [`customer`]: `create_customer`, `get_customer`, `update_customer`,
//!   `delete_customer`, `list_customers`
//! - [`customer_portal`]: `create_customer_portal_session`
//! - [`transaction`]: `list_transactions`
//! - [`license`]: `validate_license`, `activate_license`, `deactivate_license`
//! - [`discount_code`]: `create_discount_code`, `get_discount_code`,
//!   `delete_discount_code`
//! - [`subscription`]: `get_subscription`, `update_subscription`,
//!   `upgrade_subscription`, `cancel_subscription`
//!
//! # Shapes only
//!
//! [`Order`], [`Refund`], [`Invoice`], [`PaymentMethod`], [`Account`],
//! [`Report`] and [`Webhook`] appear in webhook payloads and exports and are
//! modelled for decoding them.
//!
//! # Conventions
//!
//! - Every entity decodes with missing fields defaulted, so partial bodies
//!   (including error bodies) still decode.
//! - Optional request fields are `Option` and left out of the JSON when
//!   `None`.
//! - Fields named `type` by the service are called `kind`.

pub mod account;
pub mod checkout;
pub mod common;
pub mod customer;
pub mod customer_portal;
pub mod discount_code;
pub mod license;
pub mod order;
pub mod payment_method;
pub mod product;
pub mod subscription;
pub mod transaction;
pub mod webhook;

pub use account::{Account, Report};
pub use checkout::{CheckoutSession, CheckoutSessionCreateRequest, CheckoutSessionUpdateRequest};
pub use common::{Address, Metadata, OperationResult};
pub use customer::{Customer, CustomerCreateRequest, CustomerUpdateRequest};
pub use customer_portal::{CustomerPortalCreateRequest, CustomerPortalSession};
pub use discount_code::{DiscountCode, DiscountCodeCreateRequest};
pub use license::{
    LicenseActivateRequest, LicenseDeactivateRequest, LicenseValidateRequest, LicenseValidation,
};
pub use order::{Invoice, InvoiceItem, Order, OrderUpdateRequest, Refund, RefundCreateRequest};
pub use payment_method::{Bank, Card, PaymentMethod};
pub use product::{Product, ProductCreateRequest, ProductUpdateRequest};
pub use subscription::{
    Subscription, SubscriptionCreateRequest, SubscriptionUpdateRequest, SubscriptionUpgradeRequest,
};
pub use transaction::Transaction;
pub use webhook::{Webhook, WebhookCreateRequest, WebhookUpdateRequest};
