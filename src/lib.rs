pub mod error;
pub mod mont;
pub mod pow;
pub mod prelude;

pub use error::{MontError, Result};
pub use mont::mont_multiply;
pub use pow::{mod_pow, mod_pow_with_precision, DEFAULT_PRECISION_BITS};
