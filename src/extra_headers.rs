use serde_json::Value;

use crate::mseed_error::MSeedError;

/// A parsed extra-header document queried by JSON Pointer paths.
///
/// The packer only ever reads from the document; whatever the producer put
/// in paths it does not know about is carried through untouched.
#[derive(Debug, Clone)]
pub struct ExtraHeaders {
    root: Value,
}

impl ExtraHeaders {
    /// An empty document, every query misses.
    pub fn empty() -> ExtraHeaders {
        ExtraHeaders { root: Value::Null }
    }

    /// Parse a JSON string.  An empty or whitespace-only string is treated
    /// as an empty document.
    pub fn parse(json: &str) -> Result<ExtraHeaders, MSeedError> {
        if json.trim().is_empty() {
            return Ok(ExtraHeaders::empty());
        }
        let root: Value = serde_json::from_str(json)?;
        Ok(ExtraHeaders { root })
    }

    pub fn get(&self, pointer: &str) -> Option<&Value> {
        self.root.pointer(pointer)
    }

    pub fn get_str(&self, pointer: &str) -> Option<&str> {
        ptr_str(&self.root, pointer)
    }

    /// Numeric value (integer or real) at the path.
    pub fn get_num(&self, pointer: &str) -> Option<f64> {
        ptr_num(&self.root, pointer)
    }

    /// Unsigned integer value at the path, misses for reals and negatives.
    pub fn get_uint(&self, pointer: &str) -> Option<u64> {
        ptr_uint(&self.root, pointer)
    }

    pub fn get_bool(&self, pointer: &str) -> Option<bool> {
        ptr_bool(&self.root, pointer)
    }

    pub fn get_array(&self, pointer: &str) -> Option<&Vec<Value>> {
        self.root.pointer(pointer).and_then(|v| v.as_array())
    }
}

pub(crate) fn ptr_str<'a>(value: &'a Value, pointer: &str) -> Option<&'a str> {
    value.pointer(pointer).and_then(|v| v.as_str())
}

pub(crate) fn ptr_num(value: &Value, pointer: &str) -> Option<f64> {
    value.pointer(pointer).and_then(|v| v.as_f64())
}

pub(crate) fn ptr_uint(value: &Value, pointer: &str) -> Option<u64> {
    value.pointer(pointer).and_then(|v| v.as_u64())
}

pub(crate) fn ptr_bool(value: &Value, pointer: &str) -> Option<bool> {
    value.pointer(pointer).and_then(|v| v.as_bool())
}
