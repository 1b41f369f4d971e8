//! Identifier-prefix framing.
//!
//! `split` is the inbound half (used by the router on every frame) and
//! `assemble` is the outbound half (used by callers after `marshal`, which
//! returns the identifier and the unprefixed body separately).

use crate::byte_order::ByteOrder;
use crate::error::WireError;

/// Splits a frame into its identifier and body.
///
/// Fails with [`WireError::FrameTooShort`] when fewer than 2 bytes are
/// present, regardless of byte order.
pub fn split(order: ByteOrder, frame: &[u8]) -> Result<(u16, &[u8]), WireError> {
    let (prefix, body) = match frame {
        [hi, lo, rest @ ..] => ([*hi, *lo], rest),
        _ => return Err(WireError::FrameTooShort { len: frame.len() }),
    };
    Ok((order.read_u16(prefix), body))
}

/// Builds a complete frame from an identifier and an encoded body.
pub fn assemble(order: ByteOrder, id: u16, body: &[u8]) -> Vec<u8> {
    let mut frame = Vec::with_capacity(2 + body.len());
    frame.extend_from_slice(&order.write_u16(id));
    frame.extend_from_slice(body);
    frame
}

#[cfg(test)]
mod tests {
    use super::{assemble, split};
    use crate::byte_order::ByteOrder;
    use crate::error::WireError;

    #[test]
    fn split_rejects_empty_and_one_byte_input() {
        for order in [ByteOrder::BigEndian, ByteOrder::LittleEndian] {
            assert_eq!(
                split(order, &[]),
                Err(WireError::FrameTooShort { len: 0 })
            );
            assert_eq!(
                split(order, &[0x07]),
                Err(WireError::FrameTooShort { len: 1 })
            );
        }
    }

    #[test]
    fn split_accepts_prefix_only_frame_with_empty_body() {
        let (id, body) = split(ByteOrder::BigEndian, &[0x00, 0x03]).unwrap();
        assert_eq!(id, 3);
        assert!(body.is_empty());
    }

    #[test]
    fn assemble_then_split_round_trips() {
        let frame = assemble(ByteOrder::LittleEndian, 0x0102, b"payload");
        assert_eq!(frame[..2], [0x02, 0x01]);
        let (id, body) = split(ByteOrder::LittleEndian, &frame).unwrap();
        assert_eq!(id, 0x0102);
        assert_eq!(body, b"payload");
    }

    #[test]
    fn byte_orders_disagree_on_asymmetric_prefix() {
        let frame = assemble(ByteOrder::BigEndian, 1, &[]);
        let (le_id, _) = split(ByteOrder::LittleEndian, &frame).unwrap();
        assert_eq!(le_id, 256);
    }
}
