//! 键类型和通用负载类型定义

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// 顶点键（图内唯一，所有查找的索引键）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VertexKey(String);

impl VertexKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for VertexKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl From<String> for VertexKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl Borrow<str> for VertexKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for VertexKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VertexKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 边键（起点键和终点键按 start→end 顺序用下划线连接）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeKey(String);

impl EdgeKey {
    /// 由两个端点键组合边键，如 "A_B"
    pub fn compose(start: &str, end: &str) -> Self {
        Self(format!("{}_{}", start, end))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for EdgeKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 顶点负载
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<i64> for PropertyValue {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<f64> for PropertyValue {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::String(s) => write!(f, "{}", s),
            PropertyValue::Integer(n) => write!(f, "{}", n),
            PropertyValue::Float(n) => write!(f, "{}", n),
            PropertyValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_key_compose() {
        let key = EdgeKey::compose("A", "B");
        assert_eq!(key.as_str(), "A_B");
        assert_eq!(key.to_string(), "A_B");
    }

    #[test]
    fn test_vertex_key_borrow() {
        use std::collections::HashMap;

        let mut map: HashMap<VertexKey, i32> = HashMap::new();
        map.insert(VertexKey::from("A"), 1);

        // Borrow<str> 允许用 &str 直接查找
        assert_eq!(map.get("A"), Some(&1));
        assert_eq!(map.get("B"), None);
    }

    #[test]
    fn test_property_value_display() {
        assert_eq!(PropertyValue::from("hello").to_string(), "hello");
        assert_eq!(PropertyValue::from(42i64).to_string(), "42");
        assert_eq!(PropertyValue::from(true).to_string(), "true");
    }
}
