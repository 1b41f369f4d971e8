//! Typed binary message router.
//!
//! [`MessageRouter`] sits between a transport that delivers raw frames and
//! application handlers that consume typed messages. Its contract:
//!
//! - **Setup**: `register::<M>` once per message type, in a fixed order.
//!   The registration order *is* the identifier assignment — the N-th
//!   registered type gets identifier N-1, densely from 0.
//! - **Operation**: the transport feeds complete frames to `route`, which
//!   reads the 2-byte identifier prefix, decodes the body into a fresh
//!   value of the registered type, and hands it one-way to the dispatcher.
//!   Outbound code calls `marshal`, which looks up the identifier for a
//!   typed message and returns it with the encoded, unprefixed body.
//!
//! Registration requires `&mut self`, route/marshal take `&self`, so the
//! setup/operation phase split is enforced by ownership: once the router is
//! shared, its message table can no longer change.
//!
//! Type identity uses [`TypeToken`] (a `TypeId` plus type name) and a
//! per-type monomorphized decode thunk; there is no runtime type
//! introspection beyond the token lookup.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod registry;
pub mod router;

pub use config::RouterConfig;
pub use dispatch::{Dispatch, Envelope, MpscDispatch};
pub use error::{RegistryError, RouteError};
pub use registry::{HandlerRef, TypeToken, MAX_MESSAGES};
pub use router::MessageRouter;
