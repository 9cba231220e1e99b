//! 顶点定义
//!
//! 持有唯一键和可变负载；邻居列表按键引用其他顶点，
//! 只由图在注册边时维护

use crate::types::{PropertyValue, VertexKey};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// 顶点
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    /// 顶点键
    key: VertexKey,
    /// 负载，默认为键本身
    value: PropertyValue,
    /// 出边邻居的键，按边注册顺序
    neighbors: SmallVec<[VertexKey; 4]>,
}

impl Vertex {
    /// 创建新顶点，负载默认为键本身
    pub fn new(key: impl Into<VertexKey>) -> Self {
        let key = key.into();
        let value = PropertyValue::String(key.as_str().to_string());
        Self {
            key,
            value,
            neighbors: SmallVec::new(),
        }
    }

    /// 创建带负载的顶点
    pub fn with_value(key: impl Into<VertexKey>, value: impl Into<PropertyValue>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            neighbors: SmallVec::new(),
        }
    }

    /// 获取顶点键
    pub fn key(&self) -> &VertexKey {
        &self.key
    }

    /// 获取负载
    pub fn value(&self) -> &PropertyValue {
        &self.value
    }

    /// 设置负载
    pub fn set_value(&mut self, value: impl Into<PropertyValue>) {
        self.value = value.into();
    }

    /// 追加邻居键（仅由图在注册边时调用，边级去重由边键唯一性保证）
    pub(crate) fn add_neighbor(&mut self, key: VertexKey) {
        self.neighbors.push(key);
    }

    /// 邻居键，按边注册顺序
    pub fn neighbor_keys(&self) -> &[VertexKey] {
        &self.neighbors
    }

    /// 获取顶点的出度
    pub fn out_degree(&self) -> usize {
        self.neighbors.len()
    }

    /// 自定义标签
    pub fn to_string_with<F>(&self, callback: F) -> String
    where
        F: Fn(&Vertex) -> String,
    {
        callback(self)
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key)
    }
}
