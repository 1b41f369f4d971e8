use serde::{Deserialize, Serialize};
use shunt_wire::ByteOrder;

/// Router construction settings.
///
/// One knob: the byte order of the identifier prefix. It is fixed for the
/// router's lifetime — there is deliberately no setter, so the unsynchronized
/// mutable-flag hazard of a process-wide toggle cannot arise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    pub byte_order: ByteOrder,
}
