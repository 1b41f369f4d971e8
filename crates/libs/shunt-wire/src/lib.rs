//! Wire-level building blocks for the shunt message router.
//!
//! A shunt frame is `[2-byte identifier][encoded message body]`. This crate
//! owns everything below the router's registry:
//!
//! - [`ByteOrder`] — how the 2-byte identifier prefix is read and written
//! - [`frame`] — splitting an inbound frame and assembling an outbound one
//! - [`WireCodec`] — the seam to the message serialization format, with
//!   [`MsgpackCodec`] as the MessagePack implementation
//!
//! The body's binary layout belongs entirely to the codec; the frame helpers
//! treat it as opaque bytes.

mod byte_order;
mod codec;
mod error;

pub mod frame;

pub use byte_order::ByteOrder;
pub use codec::{MsgpackCodec, WireCodec};
pub use error::WireError;
