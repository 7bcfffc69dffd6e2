//! The packed, in-buffer object record header.
//!
//! `Header` is never materialized as a Rust struct over raw buffer bytes
//! (no `#[repr(C, packed)]` pointer punning): the buffer only guarantees
//! 2-byte alignment, and `ObisCode` plus the `num_values` byte add up to an
//! odd 6-byte prefix, so a punned `Header` would require unaligned reads of
//! the `object_size` field. Instead, fields are read and written through
//! explicit byte slicing.

use crate::obis::ObisCode;

/// Size in bytes of a serialized [`Header`]: 5 bytes of OBIS code, 1 byte
/// of value count, 2 bytes of little-endian object size.
pub const HEADER_SIZE: usize = 8;

/// The largest permitted `object_size`, including header and padding.
pub const MAX_OBJECT_SIZE: usize = 8192;

/// The maximum number of object records a single telegram may contain.
pub const MAX_OBJECTS: usize = 255;

/// A decoded view of a record header read out of the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub obis_code: ObisCode,
    pub num_values: u8,
    pub object_size: u16,
}

impl Header {
    /// Decode a header from the first [`HEADER_SIZE`] bytes of `bytes`.
    ///
    /// Panics if `bytes` is shorter than [`HEADER_SIZE`]; callers are
    /// expected to have already checked `object_size` bounds before calling
    /// this (see [`crate::iter::ObjectIter`]).
    pub(crate) fn decode(bytes: &[u8]) -> Self {
        let obis_code = ObisCode::new(bytes[0], bytes[1], bytes[2], bytes[3], bytes[4]);
        let num_values = bytes[5];
        let object_size = u16::from_le_bytes([bytes[6], bytes[7]]);
        Self {
            obis_code,
            num_values,
            object_size,
        }
    }

    /// Write the fixed 5-byte OBIS code and zeroed `num_values`/`object_size`
    /// fields into `bytes`, leaving the latter two to be patched in later
    /// once the record body is known.
    pub(crate) fn encode_obis(bytes: &mut [u8], obis_code: ObisCode) {
        bytes[0] = obis_code.a;
        bytes[1] = obis_code.b;
        bytes[2] = obis_code.c;
        bytes[3] = obis_code.d;
        bytes[4] = obis_code.e;
        bytes[5] = 0;
        bytes[6] = 0;
        bytes[7] = 0;
    }

    pub(crate) fn patch_num_values(bytes: &mut [u8], num_values: u8) {
        bytes[5] = num_values;
    }

    pub(crate) fn patch_object_size(bytes: &mut [u8], object_size: u16) {
        bytes[6..8].copy_from_slice(&object_size.to_le_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_explicit_byte_ops() {
        let mut buf = [0u8; HEADER_SIZE];
        Header::encode_obis(&mut buf, ObisCode::new(1, 0, 1, 8, 0));
        Header::patch_num_values(&mut buf, 3);
        Header::patch_object_size(&mut buf, 42);

        let decoded = Header::decode(&buf);
        assert_eq!(decoded.obis_code, ObisCode::new(1, 0, 1, 8, 0));
        assert_eq!(decoded.num_values, 3);
        assert_eq!(decoded.object_size, 42);
    }

    #[test]
    fn header_size_is_eight_bytes() {
        assert_eq!(HEADER_SIZE, 8);
    }
}
