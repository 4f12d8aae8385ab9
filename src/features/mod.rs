// Feature extraction — stylometric statistics and signatures.

pub mod extract;
pub mod signature;
pub mod traits;
