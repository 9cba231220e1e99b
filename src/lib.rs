//! KeyGraph - 通用内存图数据结构库
//!
//! 以稳定字符串键索引的内存图，支持：
//! - 有向和无向两种拓扑，构造时固定
//! - 带权边，键级去重
//! - 顶点/边的插入顺序保留和 O(1) 查找
//! - 辅助结构：带自定义比较器的单向链表、两数之和求解

pub mod error;
pub mod graph;
pub mod list;
pub mod problems;
pub mod types;

// 重导出常用类型
pub use error::{Error, Result};
pub use graph::{Edge, Graph, Vertex};
pub use list::LinkedList;
pub use problems::two_sum;
pub use types::{EdgeKey, PropertyValue, VertexKey};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
