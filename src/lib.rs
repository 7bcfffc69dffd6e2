//! In-place, zero-copy parser for DSMR-style P1 smart meter telegrams.
//!
//! A telegram arrives as ASCII text: an identifier line, a run of OBIS-coded
//! object lines, and a trailing CRC-16 checksum. [`parse_telegram`] rewrites
//! that text into a compact binary layout in the same buffer — no
//! allocation, one pass, write cursor never ahead of the read cursor — and
//! hands back a [`Telegram`] that can be walked with
//! [`Telegram::objects`][iter::Telegram::objects].
//!
//! ```
//! use p1_telegram::{parse_telegram, Status};
//!
//! // No trailing `!crc` marker: the telegram still parses, just unchecked.
//! // (A heap-allocated `Vec` is used here, not a stack array, so the
//! // buffer is reliably word-aligned for the parser's alignment check.)
//! let mut buffer = b"/ISK5\\2MT382-1000\r\n1-0:1.8.0(00001.001*kWh)\r\n".to_vec();
//! let telegram = parse_telegram(&mut buffer);
//! assert_eq!(telegram.status(), Status::Ok);
//! for object in telegram.objects() {
//!     for value in object.values() {
//!         let _ = value;
//!     }
//! }
//! ```
//!
//! Decryption, UART framing, and dispatching decoded values to sensors are
//! a transport's job, not this crate's; see the crate-level `Non-goals`
//! note in each module for the exact boundary.
#![cfg_attr(not(test), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(any(test, feature = "std"))]
extern crate std;

mod crc;
mod decode;
mod header;
mod iter;
mod obis;
mod parser;
mod status;

pub use crc::{ChecksumAccumulator, Crc16Arc, NullChecksum};
pub use decode::{decode_datetime, decode_f64};
pub use header::{HEADER_SIZE, MAX_OBJECTS, MAX_OBJECT_SIZE};
pub use iter::{Object, ObjectIter, Telegram, ValueIter};
pub use obis::{codes, ObisCode};
pub use parser::{parse_telegram, parse_telegram_len, parse_telegram_with, ParseOutcome};
pub use status::Status;
