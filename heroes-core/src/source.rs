//! Bulk-load capability implemented by record loaders
//!
//! The store does not know how records are encoded. A loader (for example
//! the JSON file loader in `heroes-cli`) implements [`RecordSource`] and the
//! store consumes the ordered list it produces.

use crate::error::StoreError;
use crate::types::Hero;

/// Something that can produce the full, ordered list of hero records
pub trait RecordSource {
    /// Load every record, in source order
    ///
    /// Any malformed element must fail the whole load; implementations must
    /// not return a partial list.
    fn load_records(&self) -> Result<Vec<Hero>, StoreError>;
}

impl RecordSource for Vec<Hero> {
    fn load_records(&self) -> Result<Vec<Hero>, StoreError> {
        Ok(self.clone())
    }
}

impl RecordSource for [Hero] {
    fn load_records(&self) -> Result<Vec<Hero>, StoreError> {
        Ok(self.to_vec())
    }
}

impl<S: RecordSource + ?Sized> RecordSource for &S {
    fn load_records(&self) -> Result<Vec<Hero>, StoreError> {
        (**self).load_records()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Failing;

    impl RecordSource for Failing {
        fn load_records(&self) -> Result<Vec<Hero>, StoreError> {
            Err(StoreError::NotAnArray("object".to_string()))
        }
    }

    #[test]
    fn vec_source_clones_in_order() {
        let heroes = vec![Hero::new(2, "B"), Hero::new(1, "A")];
        let loaded = heroes.load_records().unwrap();
        assert_eq!(loaded, heroes);
    }

    #[test]
    fn reference_forwards_to_source() {
        let source = Failing;
        let by_ref = &source;
        assert!(by_ref.load_records().is_err());
    }
}
