use std::fmt::{self, Write};

use gput_data::VertexLayout;

/// Renders `layout` as an aligned text table, one row per attribute.
///
/// # Errors
/// Propagates a formatter error from writing the table.
pub fn format_layout(layout: &VertexLayout, first_index: u32) -> Result<String, fmt::Error> {
    let mut out = String::new();

    writeln!(
        out,
        "{:>5}  {:<10} {:>6} {:>4} {:>10} {:>8}",
        "INDEX", "TYPE", "OFFSET", "SIZE", "COMPONENTS", "INTEGER"
    )?;
    for (index, attr) in (first_index..).zip(layout.iter()) {
        writeln!(
            out,
            "{:>5}  {:<10} {:>6} {:>4} {:>10} {:>8}",
            index,
            attr.element.name(),
            attr.byte_offset,
            attr.size(),
            attr.component_count,
            attr.is_integral
        )?;
    }
    writeln!(out, "stride: {} bytes ({} padding)", layout.stride(), layout.padding())?;

    Ok(out)
}

#[cfg(test)]
mod tests {
    use gput_data::ElementType::*;

    use super::*;

    #[test]
    fn test_format_layout() {
        let layout = VertexLayout::pack(&[I8, I32]).unwrap();
        let report = format_layout(&layout, 2).unwrap();
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("OFFSET"));
        assert_eq!(
            lines[1].split_whitespace().collect::<Vec<_>>(),
            ["2", "i8", "0", "1", "1", "true"]
        );
        assert_eq!(
            lines[2].split_whitespace().collect::<Vec<_>>(),
            ["3", "i32", "4", "4", "1", "true"]
        );
        assert_eq!(lines[3], "stride: 8 bytes (3 padding)");
    }

    #[test]
    fn test_format_single_attribute() {
        let layout = VertexLayout::pack(&[Vec3F32]).unwrap();
        let report = format_layout(&layout, 0).unwrap();

        assert_eq!(report.lines().count(), 3);
        assert!(report.ends_with("stride: 12 bytes (0 padding)\n"));
    }
}
