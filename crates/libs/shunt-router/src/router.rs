use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use shunt_wire::{frame, ByteOrder, WireCodec};

use crate::config::RouterConfig;
use crate::dispatch::{Dispatch, Envelope};
use crate::error::{RegistryError, RouteError};
use crate::registry::{HandlerRef, Registry, TypeToken};

/// Binary message router: identifier assignment, frame decode dispatch, and
/// encode lookup. See the crate docs for the setup/operation contract.
///
/// Generic over the codec `C` (the serialization seam) and the dispatcher
/// `D` (the handler hand-off seam). The router is `Send + Sync` whenever
/// both are, so a registration-complete router can be shared behind an
/// `Arc` and driven concurrently.
pub struct MessageRouter<C, D> {
    config: RouterConfig,
    codec: C,
    dispatch: D,
    registry: Registry<C>,
}

impl<C, D> MessageRouter<C, D>
where
    C: WireCodec,
    D: Dispatch,
{
    /// Router with default configuration (big-endian identifier prefix).
    pub fn new(codec: C, dispatch: D) -> Self {
        Self::with_config(RouterConfig::default(), codec, dispatch)
    }

    pub fn with_config(config: RouterConfig, codec: C, dispatch: D) -> Self {
        Self {
            config,
            codec,
            dispatch,
            registry: Registry::new(),
        }
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.config.byte_order
    }

    /// Number of registered message types.
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.len() == 0
    }

    /// Registers `M`, assigning it the next sequential identifier.
    ///
    /// Pass `None` for messages that should be decoded but not dispatched
    /// further. Duplicate types and a full identifier space are rejected;
    /// both mean a broken message table, so callers normally abort startup
    /// on any error from here.
    pub fn register<M>(&mut self, handler: Option<HandlerRef>) -> Result<u16, RegistryError>
    where
        M: Serialize + DeserializeOwned + Send + 'static,
    {
        let id = self.registry.register::<M>(handler)?;
        log::debug!(
            "router: registered {} as id {id}",
            TypeToken::of::<M>().type_name()
        );
        Ok(id)
    }

    /// Decodes one complete inbound frame and hands the result to the
    /// dispatcher.
    ///
    /// Success means dispatch was *initiated*; the router does not observe
    /// the handler's outcome. On any error nothing has been dispatched.
    pub fn route(&self, data: &[u8]) -> Result<(), RouteError> {
        let (id, body) = frame::split(self.config.byte_order, data)
            .map_err(|_| RouteError::FrameTooShort { len: data.len() })?;

        let Some(descriptor) = self.registry.get(id) else {
            return Err(RouteError::UnknownMessageId { id });
        };

        let message =
            (descriptor.decode)(&self.codec, body).map_err(|source| RouteError::Decode {
                type_name: descriptor.token.type_name(),
                source,
            })?;

        if let Some(handler) = &descriptor.handler {
            log::trace!(
                "router: dispatching {} (id {id}, {} body bytes)",
                descriptor.token.type_name(),
                body.len()
            );
            self.dispatch.dispatch(Envelope {
                id,
                token: descriptor.token,
                message,
                handler: Arc::clone(handler),
            });
        }

        Ok(())
    }

    /// Looks up the identifier for `M` and encodes the message body.
    ///
    /// The returned body carries no identifier prefix; callers frame it
    /// with [`shunt_wire::frame::assemble`]. An unregistered type fails
    /// before the codec is invoked.
    pub fn marshal<M>(&self, message: &M) -> Result<(u16, Vec<u8>), RouteError>
    where
        M: Serialize + Send + 'static,
    {
        let token = TypeToken::of::<M>();
        let Some(id) = self.registry.id_of(token.type_id()) else {
            return Err(RouteError::Unregistered {
                type_name: token.type_name(),
            });
        };

        let body = self
            .codec
            .encode(message)
            .map_err(|source| RouteError::Encode {
                type_name: token.type_name(),
                source,
            })?;

        Ok((id, body))
    }

    /// Lowers the registration capacity below the real identifier space so
    /// capacity exhaustion is testable without 65536 distinct types.
    pub fn set_capacity_for_test(&mut self, capacity: usize) {
        self.registry.set_capacity_for_test(capacity);
    }
}
