use crate::{Grid, Sequence};

/// Renders a filled grid as a fixed-width table: template bases across the
/// top, query bases down the left, one row per query base plus the
/// boundary row. Cell width follows the reference layout, keyed on the
/// score's sign and magnitude.
///
/// Pure reader; only meaningful over a grid just filled for this exact
/// (template, query) pair.
pub fn render_grid(grid: &Grid, template: &Sequence, query: &Sequence) -> String {
    let t = template.as_bytes();
    let q = query.as_bytes();
    let mut out = String::new();

    out.push_str("      ");
    for &base in t {
        out.push(base as char);
        out.push_str("  ");
    }
    out.push('\n');

    for j in 0..=q.len() {
        if j == 0 {
            out.push_str("   ");
        } else {
            out.push(q[j - 1] as char);
            out.push_str("  ");
        }

        for i in 0..=t.len() {
            let score = grid.get(i, j);
            if (0..10).contains(&score) {
                out.push_str(&format!("{score}  "));
            } else if score <= -10 {
                out.push_str(&format!("{score}"));
            } else {
                out.push_str(&format!("{score} "));
            }
        }
        out.push('\n');
    }

    out
}

/// Prints [`render_grid`] output to stdout.
pub fn print_grid(grid: &Grid, template: &Sequence, query: &Sequence) {
    print!("{}", render_grid(grid, template, query));
}
