use super::error::DecodeError;
use super::value::{Dict, Span, Value, ValueKind};
use bytes::Bytes;

const MAX_DEPTH: usize = 64;

/// Decodes the first complete bencode value in `data`.
///
/// Bytes past the end of that value are ignored; the returned value's
/// [`Span`](super::Span) tells the caller where decoding stopped.
pub fn decode(data: &[u8]) -> Result<Value, DecodeError> {
    let mut pos = 0;
    decode_value(data, &mut pos, 0)
}

fn decode_value(data: &[u8], pos: &mut usize, depth: usize) -> Result<Value, DecodeError> {
    if depth > MAX_DEPTH {
        return Err(DecodeError::NestingTooDeep);
    }

    match data.get(*pos) {
        None => Err(DecodeError::UnexpectedEnd),
        Some(b'i') => decode_integer(data, pos),
        Some(b'l') => decode_list(data, pos, depth),
        Some(b'd') => decode_dict(data, pos, depth),
        Some(b'0'..=b'9') => decode_bytes(data, pos),
        Some(&c) => Err(DecodeError::UnexpectedToken(c as char, *pos)),
    }
}

fn decode_integer(data: &[u8], pos: &mut usize) -> Result<Value, DecodeError> {
    let start = *pos;
    *pos += 1;

    let negative = data.get(*pos) == Some(&b'-');
    if negative {
        *pos += 1;
    }

    // Accumulate as a negative magnitude so i64::MIN parses without
    // overflowing on the way in.
    let digits_start = *pos;
    let mut value: i64 = 0;

    loop {
        match data.get(*pos) {
            None => return Err(DecodeError::UnexpectedEnd),
            Some(b'e') if *pos > digits_start => break,
            Some(c @ b'0'..=b'9') => {
                value = value
                    .checked_mul(10)
                    .and_then(|v| v.checked_sub((c - b'0') as i64))
                    .ok_or(DecodeError::IntegerOverflow(start))?;
                *pos += 1;
            }
            Some(&c) => return Err(DecodeError::UnexpectedToken(c as char, *pos)),
        }
    }

    // A zero magnitude must be exactly "0", and never signed.
    if data[digits_start] == b'0' && (negative || *pos - digits_start > 1) {
        return Err(DecodeError::LeadingZero(digits_start));
    }

    let value = if negative {
        value
    } else {
        value.checked_neg().ok_or(DecodeError::IntegerOverflow(start))?
    };

    *pos += 1;
    Ok(Value::new(ValueKind::Integer(value), Span::new(start, *pos)))
}

fn decode_bytes(data: &[u8], pos: &mut usize) -> Result<Value, DecodeError> {
    let (bytes, span) = decode_bytes_raw(data, pos)?;
    Ok(Value::new(ValueKind::Bytes(bytes), span))
}

fn decode_bytes_raw(data: &[u8], pos: &mut usize) -> Result<(Bytes, Span), DecodeError> {
    let start = *pos;
    let mut len: usize = 0;

    loop {
        match data.get(*pos) {
            None => return Err(DecodeError::UnexpectedEnd),
            Some(b':') => {
                *pos += 1;
                break;
            }
            Some(c @ b'0'..=b'9') => {
                len = len
                    .checked_mul(10)
                    .and_then(|l| l.checked_add((c - b'0') as usize))
                    .ok_or(DecodeError::InvalidLength(start))?;
                *pos += 1;
            }
            Some(_) => return Err(DecodeError::InvalidLength(*pos)),
        }
    }

    if data.len() - *pos < len {
        return Err(DecodeError::UnexpectedEnd);
    }

    let bytes = Bytes::copy_from_slice(&data[*pos..*pos + len]);
    *pos += len;

    Ok((bytes, Span::new(start, *pos)))
}

fn decode_list(data: &[u8], pos: &mut usize, depth: usize) -> Result<Value, DecodeError> {
    let start = *pos;
    *pos += 1;

    let mut list = Vec::new();

    loop {
        match data.get(*pos) {
            None => return Err(DecodeError::UnexpectedEnd),
            Some(b'e') => {
                *pos += 1;
                break;
            }
            Some(_) => list.push(decode_value(data, pos, depth + 1)?),
        }
    }

    Ok(Value::new(ValueKind::List(list), Span::new(start, *pos)))
}

fn decode_dict(data: &[u8], pos: &mut usize, depth: usize) -> Result<Value, DecodeError> {
    let start = *pos;
    *pos += 1;

    let mut dict = Dict::new();

    loop {
        match data.get(*pos) {
            None => return Err(DecodeError::UnexpectedEnd),
            Some(b'e') => {
                *pos += 1;
                break;
            }
            Some(b'0'..=b'9') => {
                let (key, _) = decode_bytes_raw(data, pos)?;
                let value = decode_value(data, pos, depth + 1)?;
                // Duplicate keys overwrite: last write wins.
                dict.insert(key, value);
            }
            Some(_) => return Err(DecodeError::InvalidKey(*pos)),
        }
    }

    Ok(Value::new(ValueKind::Dict(dict), Span::new(start, *pos)))
}
