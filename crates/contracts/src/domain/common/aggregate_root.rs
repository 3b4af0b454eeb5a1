/// Trait for the root record of a page dataset
///
/// Every page owns a `Vec` of one record type; the id is the stable string
/// key used by the list renderer and by every local mutation.
pub trait AggregateRoot {
    // ============================================================================
    // Instance methods
    // ============================================================================

    /// Record identifier, e.g. "AFF001"
    fn id(&self) -> &str;

    // ============================================================================
    // Class metadata (static data)
    // ============================================================================

    /// Index of the aggregate in the system (e.g. "a001")
    fn aggregate_index() -> &'static str;

    /// Collection name (e.g. "affiliate")
    fn collection_name() -> &'static str;

    /// Element name for the UI (singular, e.g. "Affiliate")
    fn element_name() -> &'static str;

    /// List name for the UI (plural, e.g. "Affiliates")
    fn list_name() -> &'static str;

    /// Message rendered in place of the list when it is empty
    fn empty_message() -> &'static str;

    // ============================================================================
    // Default implementations
    // ============================================================================

    /// Full aggregate name (e.g. "a001_affiliate")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }
}

/// Remove the record with the given id, returning it.
///
/// Relative order of the remaining records is preserved.
pub fn remove_by_id<T: AggregateRoot>(items: &mut Vec<T>, id: &str) -> Option<T> {
    let pos = items.iter().position(|item| item.id() == id)?;
    Some(items.remove(pos))
}

/// Apply `f` to the record with the given id only. Returns `false` when no
/// record matched.
pub fn update_by_id<T: AggregateRoot>(items: &mut [T], id: &str, f: impl FnOnce(&mut T)) -> bool {
    match items.iter_mut().find(|item| item.id() == id) {
        Some(item) => {
            f(item);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: String,
        value: u32,
    }

    impl AggregateRoot for Row {
        fn id(&self) -> &str {
            &self.id
        }
        fn aggregate_index() -> &'static str {
            "a999"
        }
        fn collection_name() -> &'static str {
            "row"
        }
        fn element_name() -> &'static str {
            "Row"
        }
        fn list_name() -> &'static str {
            "Rows"
        }
        fn empty_message() -> &'static str {
            "No rows."
        }
    }

    fn rows() -> Vec<Row> {
        ["R1", "R2", "R3"]
            .iter()
            .enumerate()
            .map(|(i, id)| Row {
                id: id.to_string(),
                value: i as u32,
            })
            .collect()
    }

    #[test]
    fn test_remove_by_id_keeps_order() {
        let mut items = rows();
        let removed = remove_by_id(&mut items, "R2");
        assert_eq!(removed.map(|r| r.id), Some("R2".to_string()));
        let ids: Vec<&str> = items.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["R1", "R3"]);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut items = rows();
        assert!(remove_by_id(&mut items, "R9").is_none());
        assert_eq!(items, rows());
    }

    #[test]
    fn test_update_by_id_touches_single_record() {
        let mut items = rows();
        assert!(update_by_id(&mut items, "R3", |r| r.value = 42));
        assert_eq!(items[0].value, 0);
        assert_eq!(items[1].value, 1);
        assert_eq!(items[2].value, 42);
        assert!(!update_by_id(&mut items, "nope", |r| r.value = 7));
    }

    #[test]
    fn test_full_name() {
        assert_eq!(Row::full_name(), "a999_row");
    }
}
