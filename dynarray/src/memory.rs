//! Memory and state reports for [`DynamicArray`].
//!
//! [`DynamicArray`]: crate::generic::dynamic_array::DynamicArray

use serde::Serialize;
use std::fmt;

/// Byte accounting for an array's backing buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MemoryInfo {
    /// Size in bytes of a single element.
    pub element_size: usize,
    /// Bytes occupied by live elements (`len * element_size`).
    pub used_bytes: usize,
    /// Bytes held by the buffer (`capacity * element_size`).
    pub allocated_bytes: usize,
}

impl MemoryInfo {
    /// Builds the report for `len` live elements in a buffer of `capacity`
    /// slots of `element_size` bytes each.
    pub fn new(element_size: usize, len: usize, capacity: usize) -> Self {
        Self {
            element_size,
            used_bytes: len.saturating_mul(element_size),
            allocated_bytes: capacity.saturating_mul(element_size),
        }
    }

    /// Share of the allocated bytes that hold live elements, in percent.
    ///
    /// Returns `0.0` for an empty allocation.
    ///
    /// ```rust
    /// use dynarray::memory::MemoryInfo;
    ///
    /// assert_eq!(MemoryInfo::new(8, 3, 4).utilization_percent(), 75.0);
    /// assert_eq!(MemoryInfo::new(8, 0, 0).utilization_percent(), 0.0);
    /// ```
    pub fn utilization_percent(&self) -> f64 {
        if self.allocated_bytes == 0 {
            0.0
        } else {
            self.used_bytes as f64 / self.allocated_bytes as f64 * 100.0
        }
    }
}

impl fmt::Display for MemoryInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "used={} bytes, allocated={} bytes, utilization={:.1}%",
            self.used_bytes,
            self.allocated_bytes,
            self.utilization_percent()
        )
    }
}

/// Snapshot of an array's length, capacity and memory use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ArrayStats {
    /// Number of live elements.
    pub len: usize,
    /// Number of allocated slots.
    pub capacity: usize,
    /// `true` when `len` is zero.
    pub is_empty: bool,
    /// Byte accounting for the same buffer.
    pub memory: MemoryInfo,
}

impl ArrayStats {
    /// Builds the snapshot for `len` live elements in a buffer of `capacity`
    /// slots of `element_size` bytes each.
    pub fn new(element_size: usize, len: usize, capacity: usize) -> Self {
        Self {
            len,
            capacity,
            is_empty: len == 0,
            memory: MemoryInfo::new(element_size, len, capacity),
        }
    }
}

impl fmt::Display for ArrayStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "length:   {}", self.len)?;
        writeln!(f, "capacity: {}", self.capacity)?;
        writeln!(f, "empty:    {}", self.is_empty)?;
        write!(f, "memory:   {}", self.memory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_info_arithmetic() {
        let info = MemoryInfo::new(4, 3, 8);
        assert_eq!(info.used_bytes, 12);
        assert_eq!(info.allocated_bytes, 32);
        assert_eq!(info.utilization_percent(), 37.5);
    }

    #[test]
    fn test_zero_capacity_utilization() {
        let info = MemoryInfo::new(8, 0, 0);
        assert_eq!(info.utilization_percent(), 0.0);
    }

    #[test]
    fn test_memory_info_display() {
        let info = MemoryInfo::new(8, 1, 2);
        assert_eq!(
            info.to_string(),
            "used=8 bytes, allocated=16 bytes, utilization=50.0%"
        );
    }

    #[test]
    fn test_stats() {
        let stats = ArrayStats::new(8, 0, 2);
        assert!(stats.is_empty);
        assert_eq!(stats.capacity, 2);
        assert_eq!(stats.memory.utilization_percent(), 0.0);

        let text = stats.to_string();
        assert!(text.contains("length:   0"));
        assert!(text.contains("capacity: 2"));
        assert!(text.contains("allocated=16 bytes"));
    }

    #[test]
    fn test_stats_serialize() {
        let stats = ArrayStats::new(4, 2, 4);
        let json = serde_json::to_value(stats).unwrap();
        assert_eq!(json["len"], 2);
        assert_eq!(json["capacity"], 4);
        assert_eq!(json["memory"]["allocated_bytes"], 16);
        assert_eq!(json["memory"]["used_bytes"], 8);
        assert!(json.get("utilization_percent").is_none());
    }
}
