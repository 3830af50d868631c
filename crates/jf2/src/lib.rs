#![doc = include_str!("../README.md")]

pub mod error;
pub mod normalize;

pub use crate::error::{Error, Result};

use std::io::{Read, Write};

use serde_json::Value;

/// Converts an MF2 parse result into a JF2 document.
///
/// Total over any JSON value: a document without a usable `items` array
/// yields an empty object. Recursion depth follows MF2 nesting depth
/// (children of children, embedded author cards); callers feeding
/// untrusted input should bound nesting before calling.
pub fn convert(document: &Value) -> Value {
    crate::normalize::convert_document(document)
}

/// Parses `s` as JSON and converts the result.
pub fn convert_from_str(s: &str) -> Result<Value> {
    let document: Value = serde_json::from_str(s)?;
    Ok(convert(&document))
}

pub fn convert_from_reader<R: Read>(mut reader: R) -> Result<Value> {
    let mut s = String::new();
    reader.read_to_string(&mut s)?;
    convert_from_str(&s)
}

/// Converts and serializes in one step, preserving source key order.
pub fn convert_to_string(document: &Value) -> Result<String> {
    Ok(serde_json::to_string(&convert(document))?)
}

pub fn convert_to_writer<W: Write>(mut writer: W, document: &Value) -> Result<()> {
    let s = convert_to_string(document)?;
    writer.write_all(s.as_bytes())?;
    Ok(())
}
