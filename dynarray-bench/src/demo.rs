use anyhow::Result;
use dynarray::{DynamicArray, StaticArray};
use std::io::Write;

/// Steps through both array types, printing the array after each operation.
pub fn run<W: Write>(out: &mut W) -> Result<()> {
    run_static(out)?;
    run_dynamic(out)
}

fn run_static<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "=== static array ===")?;
    let mut array: StaticArray<i64> = StaticArray::new(5);
    writeln!(out, "created: {array}")?;

    for i in 0..array.size() {
        array.set(i, (i as i64 + 1) * 10)?;
    }
    writeln!(out, "after set: {array}")?;
    writeln!(out, "array[2] = {}", array.get(2)?)?;

    if let Err(err) = array.get(10) {
        writeln!(out, "get(10): {err}")?;
    }
    writeln!(out, "size: {}", array.size())?;
    Ok(())
}

fn run_dynamic<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "\n=== dynamic array ===")?;
    let mut array: DynamicArray<i64> = DynamicArray::new();
    writeln!(out, "initial: {array}")?;
    writeln!(out, "{}", array.stats())?;

    writeln!(out, "\n--- push ---")?;
    for i in 1..=5 {
        array.push(i * 10);
        writeln!(
            out,
            "push {}: {array} (length: {}, capacity: {})",
            i * 10,
            array.len(),
            array.capacity()
        )?;
    }

    writeln!(out, "\n--- insert ---")?;
    array.insert(2, 999)?;
    writeln!(out, "insert 999 at 2: {array}")?;

    writeln!(out, "\n--- set ---")?;
    array.set(0, 111)?;
    writeln!(out, "set index 0 to 111: {array}")?;

    writeln!(out, "\n--- bounds ---")?;
    match array.get(10) {
        Ok(value) => writeln!(out, "get(10): {value}")?,
        Err(err) => writeln!(out, "get(10): {err}")?,
    }

    writeln!(out, "\n--- search ---")?;
    match array.index_of(&999) {
        Some(index) => writeln!(out, "index of 999: {index}")?,
        None => writeln!(out, "index of 999: not found")?,
    }
    writeln!(out, "contains 999: {}", array.contains(&999))?;
    writeln!(out, "contains 777: {}", array.contains(&777))?;

    writeln!(out, "\n--- remove ---")?;
    let popped = array.pop()?;
    writeln!(out, "pop: {popped}, now {array}")?;
    let deleted = array.delete(2)?;
    writeln!(out, "delete index 2 ({deleted}): {array}")?;

    writeln!(out, "\n--- final state ---")?;
    writeln!(out, "{}", array.stats())?;
    writeln!(out, "exported: {:?}", array.to_vec())?;

    array.clear();
    writeln!(out, "cleared: {array} (empty: {}, capacity: {})", array.is_empty(), array.capacity())?;

    Ok(())
}
