use std::sync::{Mutex, PoisonError};

/// A single shared read/write slot. Holds whatever the caller stores,
/// without validating it.
#[derive(Debug, Default)]
pub struct IndexSlot<T> {
    value: Mutex<Option<T>>,
}

impl<T: Clone> IndexSlot<T> {
    pub fn new() -> Self {
        Self {
            value: Mutex::new(None),
        }
    }

    /// Store and return `value` when given one; otherwise return what is
    /// stored, if anything.
    pub fn get_or_set(&self, value: Option<T>) -> Option<T> {
        let mut slot = self.value.lock().unwrap_or_else(PoisonError::into_inner);
        match value {
            Some(value) => {
                *slot = Some(value.clone());
                Some(value)
            }
            None => slot.clone(),
        }
    }
}
