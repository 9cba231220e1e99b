//! 两数之和
//!
//! 哈希表单次遍历求解

use std::collections::HashMap;

/// 在 nums 中寻找和为 target 的两个下标
///
/// 返回第一对命中的下标，较早出现的在前；不存在时返回 None
pub fn two_sum(nums: &[i64], target: i64) -> Option<(usize, usize)> {
    let mut seen: HashMap<i64, usize> = HashMap::with_capacity(nums.len());

    for (i, &num) in nums.iter().enumerate() {
        if let Some(&j) = seen.get(&(target - num)) {
            return Some((j, i));
        }
        seen.insert(num, i);
    }

    None
}
