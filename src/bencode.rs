//! Bencode decoding ([BEP-3]).
//!
//! Bencode is the serialization format used throughout BitTorrent for storing
//! structured data, most importantly `.torrent` files.
//!
//! # Data Types
//!
//! Bencode supports four data types:
//!
//! | Type | Format | Example |
//! |------|--------|---------|
//! | Integer | `i<number>e` | `i42e` → 42 |
//! | Byte String | `<length>:<data>` | `4:spam` → "spam" |
//! | List | `l<items>e` | `l4:spami42ee` → ["spam", 42] |
//! | Dictionary | `d<key><value>...e` | `d3:foo3:bare` → {"foo": "bar"} |
//!
//! # Spans
//!
//! Every decoded [`Value`] carries a [`Span`]: the exact byte range its
//! serialization occupied in the input buffer. A parent's span always
//! contains its children's spans. This lets callers hash a sub-structure's
//! original bytes directly — the info hash of a torrent is SHA-1 over the
//! raw `info` dictionary, and slicing the span avoids re-serializing it:
//!
//! ```
//! use peerbit::bencode::decode;
//!
//! let buf = b"d4:infod4:name4:testee";
//! let value = decode(buf).unwrap();
//! let info = value.get(b"info").unwrap();
//! assert_eq!(info.span().slice(buf), b"d4:name4:teste");
//! ```
//!
//! # Examples
//!
//! ```
//! use peerbit::bencode::decode;
//!
//! // Decode an integer
//! let value = decode(b"i42e").unwrap();
//! assert_eq!(value.as_integer(), Some(42));
//!
//! // Decode a string
//! let value = decode(b"4:spam").unwrap();
//! assert_eq!(value.as_str(), Some("spam"));
//!
//! // Decode a list
//! let value = decode(b"l4:spami42ee").unwrap();
//! assert_eq!(value.as_list().unwrap().len(), 2);
//!
//! // Decode a dictionary
//! let value = decode(b"d3:foo3:bare").unwrap();
//! assert_eq!(value.get(b"foo").unwrap().as_str(), Some("bar"));
//! ```
//!
//! # Error Handling
//!
//! Decoding is all-or-nothing and can fail with:
//!
//! - [`DecodeError::UnexpectedEnd`] - Input ended mid-value
//! - [`DecodeError::UnexpectedToken`] - A byte that fits no production
//! - [`DecodeError::InvalidLength`] - Malformed string length prefix
//! - [`DecodeError::InvalidKey`] - Non-string dictionary key
//! - [`DecodeError::IntegerOverflow`] - Integer outside the i64 range
//! - [`DecodeError::LeadingZero`] - Zero-padded integer such as `i04e`
//! - [`DecodeError::NestingTooDeep`] - Recursion limit exceeded (64 levels)
//!
//! Bytes after the first complete top-level value are ignored rather than
//! rejected; whether they matter is the caller's concern.
//!
//! [BEP-3]: http://bittorrent.org/beps/bep_0003.html

mod decode;
mod error;
mod value;

pub use decode::decode;
pub use error::DecodeError;
pub use value::{Dict, Span, Value, ValueKind};
