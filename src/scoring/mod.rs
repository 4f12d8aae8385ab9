// Signature scoring — weighted distance and nearest-neighbor matching.

pub mod compare;
pub mod matcher;
