//! Times the same workload against [`DynamicArray`] and `Vec`.

use anyhow::{Context, Result};
use dynarray::{DynamicArray, MemoryInfo, SequenceOps};
use serde::Serialize;
use std::fmt;
use std::hint::black_box;
use std::time::{Duration, Instant};

/// Distance between consecutive indices in the strided read phase.
const READ_STRIDE: usize = 10;

#[derive(Clone, Copy, Debug)]
pub struct CompareConfig {
    /// Elements pushed before the other phases run.
    pub size: usize,
    /// Number of strided reads.
    pub accesses: usize,
}

#[derive(Debug, Serialize)]
pub struct WorkloadReport {
    pub name: &'static str,
    pub size: usize,
    pub push: Duration,
    pub insert_head: Duration,
    pub delete_middle: Duration,
    pub strided_reads: Duration,
    pub reads: usize,
    pub misses: usize,
    pub search: Duration,
    pub found_at: Option<usize>,
    pub final_len: usize,
    pub final_capacity: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<MemoryInfo>,
}

#[derive(Debug, Serialize)]
pub struct ComparisonReport {
    pub dynamic_array: WorkloadReport,
    pub vec: WorkloadReport,
}

/// Index of the `i`-th strided read, or `None` when it does not fit in a `usize`.
fn strided_index(i: usize) -> Option<usize> {
    i.checked_mul(READ_STRIDE)
}

fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}

/// Runs push, head insert, middle delete, strided reads and one linear search
/// against `sequence`, which is expected to start empty.
pub fn run_workload<S: SequenceOps<i64>>(
    name: &'static str,
    sequence: &mut S,
    config: &CompareConfig,
) -> Result<WorkloadReport> {
    let span = tracing::info_span!("workload", name, size = config.size);
    let _guard = span.enter();

    let ((), push) = timed(|| {
        for value in 0..config.size as i64 {
            sequence.push(value);
        }
    });

    let (inserted, insert_head) = timed(|| sequence.insert(0, -1));
    inserted.context("inserting at the head")?;

    let middle = config.size / 2;
    let (deleted, delete_middle) = timed(|| sequence.delete(middle));
    deleted.with_context(|| format!("deleting index {middle}"))?;

    let ((reads, misses), strided_reads) = timed(|| {
        let mut reads = 0;
        let mut misses = 0;
        for i in 0..config.accesses {
            let value = strided_index(i).and_then(|index| sequence.get(index).ok());
            match value {
                Some(value) => {
                    black_box(value);
                    reads += 1;
                }
                None => misses += 1,
            }
        }
        (reads, misses)
    });
    if misses > 0 {
        tracing::warn!(misses, "strided reads ran past the end of the sequence");
    }

    let target = middle as i64;
    let (found_at, search) = timed(|| sequence.index_of(black_box(&target)));

    tracing::debug!(?push, ?insert_head, ?delete_middle, ?strided_reads, ?search, "workload finished");

    Ok(WorkloadReport {
        name,
        size: config.size,
        push,
        insert_head,
        delete_middle,
        strided_reads,
        reads,
        misses,
        search,
        found_at,
        final_len: sequence.len(),
        final_capacity: sequence.capacity(),
        memory: None,
    })
}

pub fn run(config: &CompareConfig) -> Result<ComparisonReport> {
    let mut array = DynamicArray::<i64>::new();
    let mut dynamic_array = run_workload("DynamicArray", &mut array, config)?;
    dynamic_array.memory = Some(array.memory_info());

    let mut vec = Vec::<i64>::new();
    let vec = run_workload("Vec", &mut vec, config)?;

    Ok(ComparisonReport { dynamic_array, vec })
}

impl fmt::Display for WorkloadReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({} elements):", self.name, self.size)?;
        writeln!(f, "- push:           {:?}", self.push)?;
        writeln!(f, "- insert at head: {:?}", self.insert_head)?;
        writeln!(f, "- delete middle:  {:?}", self.delete_middle)?;
        writeln!(f, "- {} reads:     {:?} ({} misses)", self.reads + self.misses, self.strided_reads, self.misses)?;
        writeln!(f, "- search:         {:?}", self.search)?;
        writeln!(f, "final state: length={}, capacity={}", self.final_len, self.final_capacity)?;
        if let Some(memory) = &self.memory {
            writeln!(f, "memory: {memory}")?;
        }
        Ok(())
    }
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.dynamic_array)?;
        write!(f, "{}", self.vec)
    }
}
