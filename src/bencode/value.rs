use bytes::Bytes;

/// The half-open byte range `[start, end)` a decoded value occupied in its
/// source buffer, including the type prefix and terminator.
///
/// Spans let callers hash or copy the exact original serialization of a
/// sub-tree (for example the `info` dictionary of a torrent) without
/// re-serializing the decoded value.
///
/// # Examples
///
/// ```
/// use peerbit::bencode::decode;
///
/// let buf = b"d3:fooi42ee";
/// let value = decode(buf).unwrap();
/// let foo = value.get(b"foo").unwrap();
/// assert_eq!(foo.span().slice(buf), b"i42e");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Offset of the first byte of the value's serialization.
    pub start: usize,
    /// Offset one past the last byte of the value's serialization.
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length of the range in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the original bytes of this range.
    ///
    /// `buf` must be the same buffer the value was decoded from.
    pub fn slice<'a>(&self, buf: &'a [u8]) -> &'a [u8] {
        &buf[self.start..self.end]
    }

    /// Returns true if `other` lies entirely within this range.
    pub fn contains(&self, other: &Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

/// A decoded bencode value annotated with its source [`Span`].
///
/// Bencode has four data types: integers, byte strings, lists, and
/// dictionaries. [`ValueKind`] represents the shape; `Value` pairs it with
/// the byte range it was decoded from and provides methods for type-safe
/// access.
///
/// # Examples
///
/// ```
/// use peerbit::bencode::decode;
///
/// let value = decode(b"i42e").unwrap();
/// assert_eq!(value.as_integer(), Some(42));
///
/// let value = decode(b"4:spam").unwrap();
/// assert_eq!(value.as_str(), Some("spam"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Value {
    kind: ValueKind,
    span: Span,
}

/// The shape of a decoded bencode value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueKind {
    /// A signed 64-bit integer.
    Integer(i64),
    /// A byte string (may or may not be valid UTF-8).
    Bytes(Bytes),
    /// An ordered list of values.
    List(Vec<Value>),
    /// A dictionary with byte string keys, in insertion order.
    Dict(Dict),
}

impl Value {
    pub(crate) fn new(kind: ValueKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// The byte range this value occupied in the source buffer.
    pub fn span(&self) -> Span {
        self.span
    }

    pub fn kind(&self) -> &ValueKind {
        &self.kind
    }

    /// Returns the value as an integer, if it is one.
    pub fn as_integer(&self) -> Option<i64> {
        match &self.kind {
            ValueKind::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the value as a byte string, if it is one.
    pub fn as_bytes(&self) -> Option<&Bytes> {
        match &self.kind {
            ValueKind::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Returns the value as a UTF-8 string, if it is a byte string holding
    /// valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        match &self.kind {
            ValueKind::Bytes(b) => std::str::from_utf8(b).ok(),
            _ => None,
        }
    }

    /// Returns the value as a list, if it is one.
    pub fn as_list(&self) -> Option<&[Value]> {
        match &self.kind {
            ValueKind::List(l) => Some(l),
            _ => None,
        }
    }

    /// Returns the value as a dictionary reference, if it is one.
    pub fn as_dict(&self) -> Option<&Dict> {
        match &self.kind {
            ValueKind::Dict(d) => Some(d),
            _ => None,
        }
    }

    /// Consumes the value and returns the dictionary, if it is one.
    pub fn into_dict(self) -> Option<Dict> {
        match self.kind {
            ValueKind::Dict(d) => Some(d),
            _ => None,
        }
    }

    /// Looks up a key in this value if it is a dictionary.
    ///
    /// Returns `None` if the value is not a dictionary or the key is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use peerbit::bencode::decode;
    ///
    /// let value = decode(b"d3:foo3:bare").unwrap();
    /// assert_eq!(value.get(b"foo").and_then(|v| v.as_str()), Some("bar"));
    /// assert_eq!(value.get(b"missing"), None);
    /// ```
    pub fn get(&self, key: &[u8]) -> Option<&Value> {
        self.as_dict()?.get(key)
    }
}

/// A bencode dictionary: byte string keys mapped to values, preserving the
/// order keys first appeared in the input.
///
/// Keys are unique. Inserting an existing key overwrites its value in place
/// (last write wins) without moving the entry. Lookup is a linear scan,
/// which is fine at torrent-dictionary sizes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dict {
    entries: Vec<(Bytes, Value)>,
}

impl Dict {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up a key.
    pub fn get(&self, key: &[u8]) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &[u8]) -> bool {
        self.get(key).is_some()
    }

    /// Inserts a key-value pair.
    ///
    /// If the key is already present its value is replaced and the entry
    /// keeps its original position; otherwise the pair is appended.
    pub fn insert(&mut self, key: Bytes, value: Value) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Bytes, &Value)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &Bytes> {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(_, v)| v)
    }
}
