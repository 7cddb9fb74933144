pub use crate::{
    error::{MontError, Result},
    mont::mont_multiply,
    pow::{mod_pow, mod_pow_with_precision, DEFAULT_PRECISION_BITS},
};
