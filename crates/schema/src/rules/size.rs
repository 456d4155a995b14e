//! Array size rules
//!
//! These check an element count, so an array schema can run them on the
//! length of its input without caring about the element type.

use crate::foundation::ValidationError;

crate::rule! {
    /// At least one element.
    pub NotEmpty for usize;
    rule(input) { *input > 0 }
    error(input) { ValidationError::new("not_empty", "Array must not be empty") }
}

crate::rule! {
    /// At least `min` elements.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinSize { min: usize } for usize;
    rule(self, input) { *input >= self.min }
    error(self, input) {
        ValidationError::new("min_size", format!("Array must have at least {} elements", self.min))
            .with_param("min", self.min.to_string())
            .with_param("actual", input.to_string())
    }
}

crate::rule! {
    /// At most `max` elements.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxSize { max: usize } for usize;
    rule(self, input) { *input <= self.max }
    error(self, input) {
        ValidationError::new("max_size", format!("Array must have at most {} elements", self.max))
            .with_param("max", self.max.to_string())
            .with_param("actual", input.to_string())
    }
}

crate::rule! {
    /// Exactly `size` elements.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub ExactSize { size: usize } for usize;
    rule(self, input) { *input == self.size }
    error(self, input) {
        ValidationError::new("exact_size", format!("Array must have exactly {} elements", self.size))
            .with_param("size", self.size.to_string())
            .with_param("actual", input.to_string())
    }
}
