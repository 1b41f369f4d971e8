use shunt_wire::WireError;

/// Registration failures.
///
/// Both variants are configuration mistakes: registration runs once at
/// startup, so callers should treat either as fatal rather than continue
/// with an inconsistent message table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum RegistryError {
    #[error("too many registered messages (max {max})")]
    Full { max: usize },

    #[error("message type {type_name} already registered")]
    Duplicate { type_name: &'static str },
}

/// Per-call failures from `route` and `marshal`.
///
/// Never retried or suppressed internally — every failure surfaces to the
/// caller, who decides whether to log, drop the frame, or close the
/// connection. A failed route dispatches nothing and mutates nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum RouteError {
    #[error("frame too short: {len} bytes")]
    FrameTooShort { len: usize },

    #[error("message id {id} not registered")]
    UnknownMessageId { id: u16 },

    #[error("decoding {type_name} failed")]
    Decode {
        type_name: &'static str,
        #[source]
        source: WireError,
    },

    #[error("encoding {type_name} failed")]
    Encode {
        type_name: &'static str,
        #[source]
        source: WireError,
    },

    #[error("message type {type_name} not registered")]
    Unregistered { type_name: &'static str },
}
