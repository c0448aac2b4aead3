/// Bytes charged for every stored value on top of its UTF-8 length.
pub const VALUE_OVERHEAD: i64 = 16;

/// ## Memory budget
///
/// Advisory bookkeeping for script variables. `allocate` refuses a
/// request that would push usage past the ceiling; `deallocate` is not
/// checked and can drive usage below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Budget {
    ceiling: i64,
    used: i64,
}

impl Budget {
    pub fn new(ceiling: i64) -> Budget {
        Budget { ceiling, used: 0 }
    }

    /// Cost of storing `value`.
    pub fn size_of(value: &str) -> i64 {
        VALUE_OVERHEAD + value.len() as i64
    }

    pub fn ceiling(&self) -> i64 {
        self.ceiling
    }

    pub fn used(&self) -> i64 {
        self.used
    }

    pub fn allocate(&mut self, size: i64) -> bool {
        if self.used + size > self.ceiling {
            return false;
        }
        self.used += size;
        true
    }

    pub fn deallocate(&mut self, size: i64) {
        self.used -= size;
    }
}
