//! The multiplication routine behind the exported `cmult` symbol.
//!
//! The product is computed by [`multiply`], which has no side effects. The
//! trace line is formatted and written separately so the arithmetic can be
//! tested without capturing stdout.

use std::io::{self, Write};

/// Multiply an integer by a single-precision float.
///
/// The integer is widened to `f32` first (round-to-nearest for magnitudes
/// above 2^24), then a single `f32` multiplication is performed. Infinities
/// and NaN propagate as IEEE-754 dictates.
pub fn multiply(int_param: i32, float_param: f32) -> f32 {
    int_param as f32 * float_param
}

/// Render a float with one fractional digit, matching C's `%.1f`.
///
/// Special values use the C spellings (`inf`, `-inf`, `nan`, `-nan`) rather
/// than Rust's `NaN`, and negative zero keeps its sign.
pub fn format_fixed1(value: f32) -> String {
    if value.is_nan() {
        if value.is_sign_negative() {
            "-nan".to_string()
        } else {
            "nan".to_string()
        }
    } else if value.is_infinite() {
        if value.is_sign_negative() {
            "-inf".to_string()
        } else {
            "inf".to_string()
        }
    } else {
        format!("{:.1}", value)
    }
}

/// The trace line for one call, without the trailing newline.
pub fn trace_line(int_param: i32, float_param: f32, product: f32) -> String {
    format!(
        "    In cmult: int: {} float {} returning  {}",
        int_param,
        format_fixed1(float_param),
        format_fixed1(product)
    )
}

/// Write the trace line, newline-terminated, to `out`.
pub fn emit_trace<W: Write>(
    out: &mut W,
    int_param: i32,
    float_param: f32,
    product: f32,
) -> io::Result<()> {
    writeln!(out, "{}", trace_line(int_param, float_param, product))
}

/// Compute the product and trace it on stdout.
///
/// The whole line is written under the stdout lock so concurrent callers
/// never interleave within a line. A failed write (closed pipe, etc.) is
/// ignored: the product is returned either way.
pub fn multiply_traced(int_param: i32, float_param: f32) -> f32 {
    let product = multiply(int_param, float_param);

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let _ = emit_trace(&mut handle, int_param, float_param, product);

    product
}
