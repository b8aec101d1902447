//! C-ABI surface of the library.
//!
//! C declaration:
//!
//! ```c
//! float cmult(int int_param, float float_param);
//! ```

use std::os::raw::{c_float, c_int};

use crate::multiplier::multiply_traced;

/// Signature of the exported routine, for callers holding a function pointer.
pub type CmultFn = extern "C" fn(c_int, c_float) -> c_float;

/// Multiply `int_param` by `float_param`, print a trace line, return the product.
#[unsafe(no_mangle)]
pub extern "C" fn cmult(int_param: c_int, float_param: c_float) -> c_float {
    multiply_traced(int_param, float_param)
}
