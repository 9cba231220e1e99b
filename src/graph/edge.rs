//! 边定义
//!
//! 端点以键引用顶点；边键由两个端点键按 start→end 顺序派生

use crate::types::{EdgeKey, VertexKey};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 边
///
/// 构造后不可变；有向边的关系为 start→end，无向边由图对称登记
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// 起点键
    start: VertexKey,
    /// 终点键
    end: VertexKey,
    /// 权重，图本身不解释
    weight: f64,
}

impl Edge {
    /// 创建新边，权重默认为 0
    pub fn new(start: impl Into<VertexKey>, end: impl Into<VertexKey>) -> Self {
        Self::with_weight(start, end, 0.0)
    }

    /// 创建带权边
    pub fn with_weight(start: impl Into<VertexKey>, end: impl Into<VertexKey>, weight: f64) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            weight,
        }
    }

    /// 获取起点键
    pub fn start(&self) -> &VertexKey {
        &self.start
    }

    /// 获取终点键
    pub fn end(&self) -> &VertexKey {
        &self.end
    }

    /// 获取权重
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// 获取边键，如 "A_B"，用于边的去重和存储
    pub fn key(&self) -> EdgeKey {
        EdgeKey::compose(self.start.as_str(), self.end.as_str())
    }

    /// 起点终点交换后的新边，权重不变
    pub fn reverse(&self) -> Edge {
        Edge {
            start: self.end.clone(),
            end: self.start.clone(),
            weight: self.weight,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_key() {
        let e = Edge::new("A", "B");

        assert_eq!(e.key().as_str(), "A_B");
        assert_eq!(e.start().as_str(), "A");
        assert_eq!(e.end().as_str(), "B");
        assert_eq!(e.weight(), 0.0);
    }

    #[test]
    fn test_edge_with_weight() {
        let e = Edge::with_weight("A", "B", 10.0);

        assert_eq!(e.weight(), 10.0);
    }

    #[test]
    fn test_edge_reverse() {
        let e = Edge::with_weight("A", "B", 10.0);
        let r = e.reverse();

        assert_eq!(r.key().as_str(), "B_A");
        assert_eq!(r.start().as_str(), "B");
        assert_eq!(r.end().as_str(), "A");
        assert_eq!(r.weight(), 10.0);
        // 原边不受影响
        assert_eq!(e.key().as_str(), "A_B");
    }

    #[test]
    fn test_edge_display() {
        let e = Edge::new("A", "B");

        assert_eq!(e.to_string(), "A_B");
    }
}
