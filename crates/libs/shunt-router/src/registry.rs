//! Message table: ordered descriptors plus the type-token reverse index.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use shunt_wire::{WireCodec, WireError};

use crate::error::RegistryError;

/// Identifier space of the 2-byte prefix.
pub const MAX_MESSAGES: usize = 1 << 16;

/// Opaque handler reference.
///
/// The router never inspects or invokes it; it is forwarded verbatim inside
/// the dispatch [`Envelope`](crate::dispatch::Envelope) for the handler's
/// execution context to interpret.
pub type HandlerRef = Arc<dyn Any + Send + Sync>;

/// Static identity of a registered message type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeToken {
    type_id: TypeId,
    type_name: &'static str,
}

impl TypeToken {
    pub fn of<M: 'static>() -> Self {
        Self {
            type_id: TypeId::of::<M>(),
            type_name: std::any::type_name::<M>(),
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

/// Monomorphized decode entry point for one registered type.
///
/// A plain fn pointer, so descriptors stay `Send + Sync` for free and each
/// call produces a fresh boxed value with no shared decode buffer.
type DecodeFn<C> = fn(&C, &[u8]) -> Result<Box<dyn Any + Send>, WireError>;

fn decode_into_fresh<C, M>(codec: &C, bytes: &[u8]) -> Result<Box<dyn Any + Send>, WireError>
where
    C: WireCodec,
    M: DeserializeOwned + Send + 'static,
{
    let message: M = codec.decode(bytes)?;
    Ok(Box::new(message))
}

pub(crate) struct MessageDescriptor<C> {
    pub(crate) token: TypeToken,
    pub(crate) decode: DecodeFn<C>,
    pub(crate) handler: Option<HandlerRef>,
}

/// Append-only message table. The index of a descriptor *is* its identifier.
pub(crate) struct Registry<C> {
    entries: Vec<MessageDescriptor<C>>,
    ids: HashMap<TypeId, u16>,
    capacity: usize,
}

impl<C: WireCodec> Registry<C> {
    pub(crate) fn new() -> Self {
        Self {
            entries: Vec::new(),
            ids: HashMap::new(),
            capacity: MAX_MESSAGES,
        }
    }

    pub(crate) fn register<M>(
        &mut self,
        handler: Option<HandlerRef>,
    ) -> Result<u16, RegistryError>
    where
        M: DeserializeOwned + Send + 'static,
    {
        if self.entries.len() >= self.capacity {
            return Err(RegistryError::Full { max: self.capacity });
        }

        let token = TypeToken::of::<M>();
        if self.ids.contains_key(&token.type_id()) {
            return Err(RegistryError::Duplicate {
                type_name: token.type_name(),
            });
        }

        // len < capacity <= MAX_MESSAGES, so the cast cannot truncate.
        let id = self.entries.len() as u16;
        self.entries.push(MessageDescriptor {
            token,
            decode: decode_into_fresh::<C, M>,
            handler,
        });
        self.ids.insert(token.type_id(), id);

        Ok(id)
    }

    pub(crate) fn get(&self, id: u16) -> Option<&MessageDescriptor<C>> {
        self.entries.get(usize::from(id))
    }

    pub(crate) fn id_of(&self, type_id: TypeId) -> Option<u16> {
        self.ids.get(&type_id).copied()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn set_capacity_for_test(&mut self, capacity: usize) {
        self.capacity = capacity.min(MAX_MESSAGES);
    }
}
