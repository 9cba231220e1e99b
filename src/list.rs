//! 单向链表
//!
//! 支持自定义比较器和自定义字符串化的单向链表

use std::cmp::Ordering;
use std::fmt;

/// 节点比较器，等价判断以 Ordering::Equal 为准
pub type Comparator<T> = Box<dyn Fn(&T, &T) -> Ordering>;

/// 链表节点
struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

/// 单向链表
pub struct LinkedList<T> {
    head: Option<Box<Node<T>>>,
    len: usize,
    compare: Comparator<T>,
}

impl<T: Ord> LinkedList<T> {
    /// 创建链表，使用 Ord 默认比较器
    pub fn new() -> Self {
        Self::with_comparator(Box::new(|a: &T, b: &T| a.cmp(b)))
    }
}

impl<T: Ord> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedList<T> {
    /// 创建链表，使用自定义比较器
    pub fn with_comparator(compare: Comparator<T>) -> Self {
        Self {
            head: None,
            len: 0,
            compare,
        }
    }

    /// 获取节点数量
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// 头部节点值
    pub fn head(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.value)
    }

    /// 尾部节点值
    pub fn tail(&self) -> Option<&T> {
        let mut cur = self.head.as_ref()?;
        while let Some(next) = cur.next.as_ref() {
            cur = next;
        }
        Some(&cur.value)
    }

    /// 头部插入
    pub fn prepend(&mut self, value: T) -> &mut Self {
        self.head = Some(Box::new(Node {
            value,
            next: self.head.take(),
        }));
        self.len += 1;
        self
    }

    /// 尾部追加
    pub fn append(&mut self, value: T) -> &mut Self {
        let mut cur = &mut self.head;
        while let Some(node) = cur {
            cur = &mut node.next;
        }
        *cur = Some(Box::new(Node { value, next: None }));
        self.len += 1;
        self
    }

    /// 删除第一个与目标相等的节点，返回其值
    pub fn delete(&mut self, target: &T) -> Option<T> {
        let compare = &self.compare;
        let mut cur = &mut self.head;
        loop {
            let hit = match cur {
                None => return None,
                Some(node) => compare(&node.value, target) == Ordering::Equal,
            };
            if hit {
                let mut node = cur.take()?;
                *cur = node.next.take();
                self.len -= 1;
                return Some(node.value);
            }
            cur = match cur {
                Some(node) => &mut node.next,
                None => return None,
            };
        }
    }

    /// 删除所有与目标相等的节点，返回删除数量
    pub fn delete_all(&mut self, target: &T) -> usize {
        let compare = &self.compare;
        let mut removed = 0;
        let mut cur = &mut self.head;
        loop {
            let hit = match cur {
                None => break,
                Some(node) => compare(&node.value, target) == Ordering::Equal,
            };
            if hit {
                if let Some(mut node) = cur.take() {
                    *cur = node.next.take();
                    removed += 1;
                }
            } else {
                cur = match cur {
                    Some(node) => &mut node.next,
                    None => break,
                };
            }
        }
        self.len -= removed;
        removed
    }

    /// 删除头部节点，返回其值
    pub fn delete_head(&mut self) -> Option<T> {
        let node = self.head.take()?;
        self.head = node.next;
        self.len -= 1;
        Some(node.value)
    }

    /// 删除尾部节点，返回其值
    pub fn delete_tail(&mut self) -> Option<T> {
        let mut cur = &mut self.head;
        loop {
            let is_tail = match cur {
                None => return None,
                Some(node) => node.next.is_none(),
            };
            if is_tail {
                let node = cur.take()?;
                self.len -= 1;
                return Some(node.value);
            }
            cur = match cur {
                Some(node) => &mut node.next,
                None => return None,
            };
        }
    }

    /// 查找第一个与目标相等的节点值
    pub fn find(&self, target: &T) -> Option<&T> {
        let compare = &self.compare;
        self.iter()
            .find(|&value| compare(value, target) == Ordering::Equal)
    }

    /// 按谓词查找第一个命中的节点值
    pub fn find_by<F>(&self, predicate: F) -> Option<&T>
    where
        F: Fn(&T) -> bool,
    {
        self.iter().find(|&value| predicate(value))
    }

    /// 原地反转
    pub fn reverse(&mut self) -> &mut Self {
        let mut prev = None;
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
            node.next = prev;
            prev = Some(node);
        }
        self.head = prev;
        self
    }

    /// 按链表顺序迭代节点值
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// 收集为向量
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// 自定义字符串化：节点经 callback 转换后按 separator 连接
    pub fn to_string_with<F>(&self, separator: &str, callback: F) -> String
    where
        F: Fn(&T) -> String,
    {
        self.iter()
            .map(|value| callback(value))
            .collect::<Vec<_>>()
            .join(separator)
    }
}

/// 链表值迭代器
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        Some(&node.value)
    }
}

impl<T: Ord> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    /// 节点值用空格连接
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.iter().map(|value| value.to_string()).collect();
        write!(f, "{}", parts.join(" "))
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
