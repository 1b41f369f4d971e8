use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::WireError;

/// Seam to the message serialization format.
///
/// The router never touches message bytes directly; it hands the frame body
/// to its codec and gets back a freshly decoded value. Implementations must
/// be stateless per call so concurrent `route`/`marshal` calls cannot
/// observe each other's buffers.
pub trait WireCodec: Send + Sync + 'static {
    fn encode<M: Serialize>(&self, message: &M) -> Result<Vec<u8>, WireError>;

    fn decode<M: DeserializeOwned>(&self, bytes: &[u8]) -> Result<M, WireError>;
}

/// MessagePack codec over `rmp-serde`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MsgpackCodec;

impl WireCodec for MsgpackCodec {
    fn encode<M: Serialize>(&self, message: &M) -> Result<Vec<u8>, WireError> {
        rmp_serde::to_vec(message).map_err(|err| WireError::Encode(err.to_string()))
    }

    fn decode<M: DeserializeOwned>(&self, bytes: &[u8]) -> Result<M, WireError> {
        rmp_serde::from_slice(bytes).map_err(|err| WireError::Decode(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    use super::{MsgpackCodec, WireCodec};
    use crate::error::WireError;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Ping {
        seq: u32,
        note: String,
    }

    #[test]
    fn msgpack_round_trips_a_struct() {
        let codec = MsgpackCodec;
        let ping = Ping {
            seq: 42,
            note: "hello".into(),
        };
        let bytes = codec.encode(&ping).unwrap();
        let decoded: Ping = codec.decode(&bytes).unwrap();
        assert_eq!(decoded, ping);
    }

    #[test]
    fn msgpack_surfaces_decode_failures() {
        let codec = MsgpackCodec;
        let err = codec.decode::<Ping>(&[0xc1]).unwrap_err();
        assert!(matches!(err, WireError::Decode(_)));
    }
}
