//! Whitespace-delimited text input shared by `Vector` and `Matrix`.

use std::fmt::Display;
use std::io::BufRead;
use std::str::FromStr;

use crate::error::{MathError, Result};

/// Parse exactly `count` values from `tokens`.
///
/// Tokens past `count` are left in the iterator so callers can keep
/// reading from the same stream.
pub(crate) fn parse_values<'a, T, I>(tokens: &mut I, count: usize) -> Result<Vec<T>>
where
    T: FromStr,
    T::Err: Display,
    I: Iterator<Item = &'a str>,
{
    let mut values = Vec::with_capacity(count);
    for token in tokens.by_ref().take(count) {
        values.push(parse_token(token)?);
    }
    if values.len() != count {
        return Err(MathError::UnexpectedEof {
            expected: count,
            found: values.len(),
        });
    }
    Ok(values)
}

/// Parse exactly `count` values from `reader`, pulling one token at a time.
///
/// Reading stops right after the last needed token, so whatever follows
/// stays in the reader for the next call.
pub(crate) fn read_values<T, R>(reader: &mut R, count: usize) -> Result<Vec<T>>
where
    T: FromStr,
    T::Err: Display,
    R: BufRead,
{
    let mut values = Vec::with_capacity(count);
    let mut token = Vec::new();
    while values.len() < count {
        if !next_token(reader, &mut token)? {
            return Err(MathError::UnexpectedEof {
                expected: count,
                found: values.len(),
            });
        }
        let text = std::str::from_utf8(&token).map_err(|e| MathError::Parse {
            token: String::from_utf8_lossy(&token).into_owned(),
            reason: e.to_string(),
        })?;
        values.push(parse_token(text)?);
    }
    Ok(values)
}

fn parse_token<T>(token: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    token.parse::<T>().map_err(|e| MathError::Parse {
        token: token.to_string(),
        reason: e.to_string(),
    })
}

/// Fill `token` with the next run of non-whitespace bytes. Returns `false`
/// at end of input. The delimiter after the token is left unread.
fn next_token<R: BufRead>(reader: &mut R, token: &mut Vec<u8>) -> Result<bool> {
    token.clear();
    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            return Ok(!token.is_empty());
        }
        let mut used = 0;
        let mut done = false;
        for &byte in buf {
            if byte.is_ascii_whitespace() {
                if !token.is_empty() {
                    done = true;
                    break;
                }
            } else {
                token.push(byte);
            }
            used += 1;
        }
        reader.consume(used);
        if done {
            return Ok(true);
        }
    }
}
