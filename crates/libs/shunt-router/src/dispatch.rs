//! One-way hand-off from the decode path to handler execution.
//!
//! The router never runs handlers inline: a successful decode is submitted
//! to a [`Dispatch`] implementation and forgotten, so decode-path latency is
//! independent of handler execution time. [`MpscDispatch`] is the stock
//! implementation — an unbounded channel whose receiver side owns the
//! handler loop.

use std::any::Any;
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::registry::{HandlerRef, TypeToken};

/// The unit handed to a dispatcher: one decoded message plus everything the
/// handler side needs to act on it.
pub struct Envelope {
    pub id: u16,
    pub token: TypeToken,
    pub message: Box<dyn Any + Send>,
    pub handler: HandlerRef,
}

impl Envelope {
    /// Recovers the typed message and its handler reference, or gives the
    /// envelope back unchanged if `M` is not the registered type.
    pub fn downcast<M: Send + 'static>(self) -> Result<(M, HandlerRef), Self> {
        let Self {
            id,
            token,
            message,
            handler,
        } = self;
        match message.downcast::<M>() {
            Ok(message) => Ok((*message, handler)),
            Err(message) => Err(Self {
                id,
                token,
                message,
                handler,
            }),
        }
    }
}

impl std::fmt::Debug for Envelope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Envelope")
            .field("id", &self.id)
            .field("type_name", &self.token.type_name())
            .finish_non_exhaustive()
    }
}

/// Fire-and-forget dispatch seam.
///
/// Implementations must not block: the router calls `dispatch` on the
/// decode path and does not await or inspect the outcome.
pub trait Dispatch: Send + Sync {
    fn dispatch(&self, envelope: Envelope);
}

/// Channel-backed dispatcher.
///
/// `send` on an unbounded channel never blocks; a closed receiver means the
/// handler side has shut down, in which case the message is dropped with a
/// warning rather than surfaced as a route failure.
#[derive(Clone)]
pub struct MpscDispatch {
    tx: mpsc::UnboundedSender<Envelope>,
}

impl MpscDispatch {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Envelope>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Dispatch for MpscDispatch {
    fn dispatch(&self, envelope: Envelope) {
        let type_name = envelope.token.type_name();
        if self.tx.send(envelope).is_err() {
            log::warn!("dispatch: handler channel closed, dropping {type_name}");
        }
    }
}

/// Dispatcher shared behind an `Arc`, for handler contexts wired up once and
/// referenced from several routers.
impl<D: Dispatch + ?Sized> Dispatch for Arc<D> {
    fn dispatch(&self, envelope: Envelope) {
        (**self).dispatch(envelope);
    }
}
