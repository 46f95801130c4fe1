use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Globally unique 64-bit identity of a mesh node, stable for the lifetime
/// of the device.
///
/// The textual form is the usual colon-separated hex rendering:
///
/// ```
/// use std::str::FromStr;
/// use trellis::concepts::identity::NodeId;
///
/// let id = NodeId::from_str("00:0d:6f:00:01:02:03:04").unwrap();
/// assert_eq!(id, NodeId(0x000d_6f00_0102_0304));
/// assert_eq!(id.to_string(), "00:0d:6f:00:01:02:03:04");
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct NodeId(pub u64);

impl Display for NodeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let b = self.0.to_be_bytes();
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]
        )
    }
}

#[derive(Error, Debug, Eq, PartialEq)]
#[error("malformed node identity, expected 8 colon-separated hex octets")]
pub struct ParseNodeIdError;

impl FromStr for NodeId {
    type Err = ParseNodeIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0u8; 8];
        let mut count = 0;
        for (i, part) in s.split(':').enumerate() {
            if i >= 8 || part.len() != 2 {
                return Err(ParseNodeIdError);
            }
            bytes[i] = u8::from_str_radix(part, 16).map_err(|_| ParseNodeIdError)?;
            count += 1;
        }
        if count != 8 {
            return Err(ParseNodeIdError);
        }
        Ok(NodeId(u64::from_be_bytes(bytes)))
    }
}

/// Transient 16-bit network address of a node. Assigned by the network and
/// free to change over time, so never usable as a key; it exists because
/// source-route headers carry the short form to keep per-hop overhead low.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Nwk(pub u16);

impl Display for Nwk {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{:04x}", self.0)
    }
}
