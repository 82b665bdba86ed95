// Copyright 2025 the Sublist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the sublist demo binaries.

use std::fmt::Display;
use std::fmt::Write as _;

use sublist_view::View;

/// Renders a view's elements as `[a, b, c]` for demo output.
pub fn render<V>(view: &V) -> String
where
    V: View,
    V::Item: Display,
{
    let mut out = String::from("[");
    for i in 0..view.len() {
        if i > 0 {
            out.push_str(", ");
        }
        write!(out, "{}", view.get(i)).expect("writing to a String does not fail");
    }
    out.push(']');
    out
}

#[cfg(test)]
mod tests {
    use super::render;
    use sublist_view::Sublist;

    #[test]
    fn render_formats_windows() {
        let data = vec![1_u32, 2, 3];
        assert_eq!(render(&Sublist::over(&data)), "[1, 2, 3]");
        let empty: Vec<u32> = Vec::new();
        assert_eq!(render(&Sublist::over(&empty)), "[]");
    }
}
