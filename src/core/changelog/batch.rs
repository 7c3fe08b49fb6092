//! Partitioning of the input document set into fixed-size batches

use crate::domain::{Record, Result, SeedlogError};

/// A contiguous, order-preserving slice of the input documents
#[derive(Debug, Clone, PartialEq)]
pub struct Batch {
    /// 0-based position of the batch
    pub index: usize,
    /// Documents in input order
    pub records: Vec<Record>,
}

impl Batch {
    /// Create a new batch
    pub fn new(index: usize, records: Vec<Record>) -> Self {
        Self { index, records }
    }

    /// 1-based number used in changeset ids
    pub fn number(&self) -> usize {
        self.index + 1
    }

    /// Number of documents in the batch
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the batch holds no documents
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Splits `records` into consecutive batches of `batch_size`
///
/// Batch `k` holds records `[k*batch_size, (k+1)*batch_size)`; only the last
/// batch may be shorter and no empty batch is ever produced.
///
/// # Errors
///
/// Returns [`SeedlogError::Validation`] if `batch_size` is zero.
///
/// # Examples
///
/// ```
/// use seedlog::core::changelog::partition;
/// use serde_json::json;
///
/// let records = (0..5).map(|i| json!({"n": i})).collect();
/// let batches = partition(records, 2).unwrap();
/// let sizes: Vec<usize> = batches.iter().map(|b| b.len()).collect();
/// assert_eq!(sizes, vec![2, 2, 1]);
/// ```
pub fn partition(records: Vec<Record>, batch_size: usize) -> Result<Vec<Batch>> {
    if batch_size == 0 {
        return Err(SeedlogError::Validation(
            "batch_size must be at least 1".to_string(),
        ));
    }

    let mut batches = Vec::with_capacity(records.len().div_ceil(batch_size));
    let mut remaining = records.into_iter().peekable();
    while remaining.peek().is_some() {
        let chunk: Vec<Record> = remaining.by_ref().take(batch_size).collect();
        batches.push(Batch::new(batches.len(), chunk));
    }

    Ok(batches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records(n: usize) -> Vec<Record> {
        (0..n).map(|i| json!({ "n": i })).collect()
    }

    #[test]
    fn test_partition_uneven() {
        let batches = partition(records(250), 100).unwrap();
        let sizes: Vec<usize> = batches.iter().map(Batch::len).collect();
        assert_eq!(sizes, vec![100, 100, 50]);
        assert_eq!(batches[2].index, 2);
        assert_eq!(batches[2].number(), 3);
    }

    #[test]
    fn test_partition_exact_multiple_has_no_empty_tail() {
        let batches = partition(records(200), 100).unwrap();
        assert_eq!(batches.len(), 2);
        assert!(batches.iter().all(|b| b.len() == 100));
    }

    #[test]
    fn test_partition_empty_input() {
        assert!(partition(Vec::new(), 10).unwrap().is_empty());
    }

    #[test]
    fn test_partition_batch_size_one() {
        let batches = partition(records(3), 1).unwrap();
        assert_eq!(batches.len(), 3);
        assert_eq!(batches[1].records, vec![json!({"n": 1})]);
    }

    #[test]
    fn test_partition_preserves_order() {
        let input = records(7);
        let batches = partition(input.clone(), 3).unwrap();
        let flattened: Vec<Record> = batches.into_iter().flat_map(|b| b.records).collect();
        assert_eq!(flattened, input);
    }

    #[test]
    fn test_partition_rejects_zero() {
        assert!(matches!(
            partition(records(3), 0),
            Err(SeedlogError::Validation(_))
        ));
    }
}
