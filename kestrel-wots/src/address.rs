//! Hash addresses for domain separation.
//!
//! The 32-byte address structure names the position of every hash call
//! (which chain, which step, key or bitmask) so that no two calls in a
//! key's lifetime absorb the same input. This is the multi-target
//! hardening of WOTS-T: an attacker must target one specific hash call
//! rather than any of them at once.
//!
//! Layer, tree, type and OTS index are supplied by an enclosing scheme
//! (XMSS, SPHINCS+) and have public setters. Chain, hash and
//! key-and-mask are owned by the chain kernel and only mutated
//! internally; the kernel always works on a private copy, so a caller's
//! address is never modified.

use kestrel_core::{Error, Result};
use zeroize::Zeroize;

use crate::params::ADDRESS_BYTES;

/// A 32-byte structured hash address.
///
/// Field layout (all integers big-endian):
///
/// - Bytes 0-3: layer
/// - Bytes 4-11: tree
/// - Bytes 12-15: type (0 for W-OTS+)
/// - Bytes 16-19: OTS key-pair index
/// - Bytes 20-23: chain index
/// - Bytes 24-27: hash index within the chain
/// - Bytes 28-31: key/mask selector (0 = key, 1 = bitmask)
#[derive(Clone, Copy, PartialEq, Eq, Zeroize)]
pub struct Address {
    bytes: [u8; ADDRESS_BYTES],
}

impl Default for Address {
    fn default() -> Self {
        Self::new()
    }
}

impl Address {
    /// Create a new zeroed address.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bytes: [0u8; ADDRESS_BYTES],
        }
    }

    /// Deserialise an address from exactly 32 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; ADDRESS_BYTES] =
            bytes.try_into().map_err(|_| Error::InvalidAddress {
                expected: ADDRESS_BYTES,
                actual: bytes.len(),
            })?;
        Ok(Self { bytes })
    }

    /// Serialise the address to its 32-byte form.
    #[must_use]
    pub const fn to_bytes(&self) -> [u8; ADDRESS_BYTES] {
        self.bytes
    }

    /// Borrow the raw bytes of the address.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; ADDRESS_BYTES] {
        &self.bytes
    }

    /// Set the layer address (bytes 0-3).
    pub fn set_layer(&mut self, layer: u32) {
        self.bytes[0..4].copy_from_slice(&layer.to_be_bytes());
    }

    /// Get the layer address.
    #[must_use]
    pub fn layer(&self) -> u32 {
        u32::from_be_bytes(self.bytes[0..4].try_into().expect("4-byte window"))
    }

    /// Set the tree address (bytes 4-11).
    pub fn set_tree(&mut self, tree: u64) {
        self.bytes[4..12].copy_from_slice(&tree.to_be_bytes());
    }

    /// Get the tree address.
    #[must_use]
    pub fn tree(&self) -> u64 {
        u64::from_be_bytes(self.bytes[4..12].try_into().expect("8-byte window"))
    }

    /// Set the address type (bytes 12-15). W-OTS+ uses type 0.
    pub fn set_type(&mut self, ty: u32) {
        self.bytes[12..16].copy_from_slice(&ty.to_be_bytes());
    }

    /// Set the OTS key-pair index (bytes 16-19).
    pub fn set_ots(&mut self, ots: u32) {
        self.bytes[16..20].copy_from_slice(&ots.to_be_bytes());
    }

    /// Get the OTS key-pair index.
    #[must_use]
    pub fn ots(&self) -> u32 {
        u32::from_be_bytes(self.bytes[16..20].try_into().expect("4-byte window"))
    }

    /// Set the chain index (bytes 20-23). Owned by the chain scheduler.
    pub(crate) fn set_chain(&mut self, chain: u32) {
        self.bytes[20..24].copy_from_slice(&chain.to_be_bytes());
    }

    /// Set the hash index within the chain (bytes 24-27). Owned by the
    /// chain kernel.
    pub(crate) fn set_hash(&mut self, hash: u32) {
        self.bytes[24..28].copy_from_slice(&hash.to_be_bytes());
    }

    /// Set the key/mask selector (bytes 28-31). Owned by the chain
    /// kernel: 0 selects the key, 1 the bitmask.
    pub(crate) fn set_key_and_mask(&mut self, key_and_mask: u32) {
        self.bytes[28..32].copy_from_slice(&key_and_mask.to_be_bytes());
    }
}

impl core::fmt::Debug for Address {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Address")
            .field("layer", &self.layer())
            .field("tree", &self.tree())
            .field("ots", &self.ots())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_all_zero() {
        assert_eq!(Address::new().to_bytes(), [0u8; 32]);
    }

    #[test]
    fn setters_write_documented_windows() {
        let mut adrs = Address::new();
        adrs.set_layer(0x0102_0304);
        adrs.set_tree(0x1112_1314_1516_1718);
        adrs.set_type(0x2122_2324);
        adrs.set_ots(0x3132_3334);
        adrs.set_chain(0x4142_4344);
        adrs.set_hash(0x5152_5354);
        adrs.set_key_and_mask(0x6162_6364);

        let mut expected = [0u8; 32];
        expected[0..4].copy_from_slice(&[0x01, 0x02, 0x03, 0x04]);
        expected[4..12].copy_from_slice(&[0x11, 0x12, 0x13, 0x14, 0x15, 0x16, 0x17, 0x18]);
        expected[12..16].copy_from_slice(&[0x21, 0x22, 0x23, 0x24]);
        expected[16..20].copy_from_slice(&[0x31, 0x32, 0x33, 0x34]);
        expected[20..24].copy_from_slice(&[0x41, 0x42, 0x43, 0x44]);
        expected[24..28].copy_from_slice(&[0x51, 0x52, 0x53, 0x54]);
        expected[28..32].copy_from_slice(&[0x61, 0x62, 0x63, 0x64]);
        assert_eq!(adrs.to_bytes(), expected);
    }

    #[test]
    fn setters_leave_other_fields_untouched() {
        let mut adrs = Address::new();
        adrs.set_layer(u32::MAX);
        adrs.set_chain(7);
        assert_eq!(&adrs.to_bytes()[4..20], &[0u8; 16]);
        assert_eq!(adrs.layer(), u32::MAX);
    }

    #[test]
    fn from_bytes_round_trip() {
        let mut raw = [0u8; 32];
        for (i, b) in raw.iter_mut().enumerate() {
            *b = i as u8;
        }
        let adrs = Address::from_bytes(&raw).unwrap();
        assert_eq!(adrs.to_bytes(), raw);
    }

    #[test]
    fn from_bytes_rejects_wrong_length() {
        assert_eq!(
            Address::from_bytes(&[0u8; 31]),
            Err(Error::InvalidAddress {
                expected: 32,
                actual: 31
            })
        );
        assert_eq!(
            Address::from_bytes(&[0u8; 33]),
            Err(Error::InvalidAddress {
                expected: 32,
                actual: 33
            })
        );
    }
}
