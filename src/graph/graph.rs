//! 图数据结构
//!
//! 以键为索引的内存图，支持有向和无向两种模式；
//! 顶点和边的注册表保留插入顺序

use super::edge::Edge;
use super::vertex::Vertex;
use crate::error::{Error, Result};
use crate::types::{EdgeKey, VertexKey};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// 图
///
/// 顶点和边的唯一注册表；边和邻居列表只持有键，
/// 查询时通过注册表解析回顶点本身
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Graph {
    /// 是否有向，构造时固定
    directed: bool,
    /// 顶点注册表，插入顺序保留
    vertices: IndexMap<VertexKey, Vertex>,
    /// 边注册表，插入顺序保留
    edges: IndexMap<EdgeKey, Edge>,
}

impl Graph {
    /// 创建无向图
    pub fn new() -> Self {
        Self {
            directed: false,
            vertices: IndexMap::new(),
            edges: IndexMap::new(),
        }
    }

    /// 创建有向图
    pub fn directed() -> Self {
        Self {
            directed: true,
            vertices: IndexMap::new(),
            edges: IndexMap::new(),
        }
    }

    /// 是否有向
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    // ==================== 顶点操作 ====================

    /// 注册顶点
    ///
    /// 键重复时静默覆盖旧顶点（后写覆盖），插入位置不变
    pub fn add_vertex(&mut self, vertex: Vertex) -> &mut Self {
        if self.vertices.contains_key(vertex.key()) {
            debug!(key = %vertex.key(), "覆盖已有顶点");
        }
        self.vertices.insert(vertex.key().clone(), vertex);
        self
    }

    /// 通过键获取顶点
    pub fn get_vertex(&self, key: &str) -> Option<&Vertex> {
        self.vertices.get(key)
    }

    /// 通过键获取可变顶点（负载修改对所有查询路径可见）
    pub fn get_vertex_mut(&mut self, key: &str) -> Option<&mut Vertex> {
        self.vertices.get_mut(key)
    }

    /// 所有顶点，按插入顺序
    pub fn get_all_vertices(&self) -> Vec<&Vertex> {
        self.vertices.values().collect()
    }

    /// 获取顶点数量
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    // ==================== 边操作 ====================

    /// 注册边
    ///
    /// 起点或终点尚未注册时自动创建对应顶点；
    /// 相同键的边重复注册时返回 DuplicateEdge 错误，图状态不变
    pub fn add_edge(&mut self, edge: Edge) -> Result<&mut Self> {
        let key = edge.key();
        if self.edges.contains_key(&key) {
            return Err(Error::DuplicateEdge(key));
        }

        let start = edge.start().clone();
        let end = edge.end().clone();

        // 确保两个端点都已注册，起点在前
        let start_vertex = self
            .vertices
            .entry(start.clone())
            .or_insert_with(|| Vertex::new(start.clone()));
        start_vertex.add_neighbor(end.clone());

        let end_vertex = self
            .vertices
            .entry(end.clone())
            .or_insert_with(|| Vertex::new(end.clone()));
        // 无向图补上对称邻接；自环只记录一次
        if !self.directed && start != end {
            end_vertex.add_neighbor(start);
        }

        debug!(key = %key, directed = self.directed, "注册边");
        self.edges.insert(key, edge);
        Ok(self)
    }

    /// 查找两点之间的边
    ///
    /// 按 start→end 键查找；无向图时反向键也会命中
    pub fn find_edge(&self, start: &str, end: &str) -> Option<&Edge> {
        if let Some(edge) = self.edges.get(EdgeKey::compose(start, end).as_str()) {
            return Some(edge);
        }
        if !self.directed {
            return self.edges.get(EdgeKey::compose(end, start).as_str());
        }
        None
    }

    /// 所有边，按插入顺序
    pub fn get_all_edges(&self) -> Vec<&Edge> {
        self.edges.values().collect()
    }

    /// 获取边数量
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    // ==================== 邻居查询 ====================

    /// 获取顶点的邻居，按边注册顺序解析回顶点本身
    ///
    /// 顶点不存在或没有邻接记录时返回空序列
    pub fn neighbors(&self, key: &str) -> Vec<&Vertex> {
        match self.vertices.get(key) {
            Some(vertex) => vertex
                .neighbor_keys()
                .iter()
                .filter_map(|k| self.vertices.get(k.as_str()))
                .collect(),
            None => Vec::new(),
        }
    }
}

impl fmt::Display for Graph {
    /// 顶点键按插入顺序用逗号连接
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keys: Vec<&str> = self.vertices.keys().map(|k| k.as_str()).collect();
        write!(f, "{}", keys.join(","))
    }
}
