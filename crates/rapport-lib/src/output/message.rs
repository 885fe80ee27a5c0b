use std::fmt::{Display, Write};

/// Renders values the way a multi-argument print does: each value's
/// `Display` output, separated by a single space.
pub fn render(args: &[&dyn Display]) -> String {
    let mut out = String::new();
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        // Writing into a String only fails if a Display impl itself errors.
        let _ = write!(out, "{}", arg);
    }
    out
}
