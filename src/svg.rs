//! Static SVG export of a [`SegmentGrid`].
//!
//! Every display is drawn from the same shared segment shapes in `<defs>`,
//! placed with a translate and filled per segment.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use ratatui::style::Color;

use crate::error::{Error, Result};
use crate::glyph::Segment;
use crate::grid::SegmentGrid;

/// Width of one display in SVG units.
pub const DISPLAY_WIDTH: usize = 220;
/// Height of one display in SVG units.
pub const DISPLAY_HEIGHT: usize = 360;
/// Gap between displays and around the edge.
pub const SPACING: usize = 20;

/// Outlines of the sixteen strokes, in segment order.
const SEGMENT_PATHS: [&str; 16] = [
    "m 30,0 -10,10 30,30 55,0 0,-30 -10,-10 z",
    "m 115,40 55,0 30,-30 -10,-10 -65,0 -10,10 z",
    "m 180,50 30,-30 10,10 0,120 -10,20 -30,-20 z",
    "m 180,210 30,-20 10,20 0,120 -10,10 -30,-30 z",
    "m 50,320 55,0 0,30 -10,10 -65,0 -10,-10 z",
    "m 115,320 55,0 30,30 -10,10 -65,0 -10,-10 z",
    "m 10,340 -10,-10 0,-120 10,-20 30,20 0,100 z",
    "m 10,170 -10,-20 0,-120 10,-10 30,30 0,100 -30,20 0,0 z",
    "m 10,180 40,-20 55,0 0,40 -55,0 -40,-20 z",
    "m 210,180 -40,20 -55,0 0,-40 55,0 z",
    "m 50,50 15,0 15,30 20,70 -15,0 -35,-50 z",
    "m 125,50 0,30 -15,70 -15,-70 0,-30 z",
    "m 140,80 15,-30 15,0 0,50 -35,50 -15,0 z",
    "m 85,210 15,0 -20,70 -15,30 -15,0 0,-50 z",
    "m 110,210 15,70 0,30 -30,0 0,-30 z",
    "m 120,210 15,0 35,50 0,50 -15,0 -15,-30 z",
];

/// Offset of the display `index` cells from the edge, or the total extent
/// of `index` displays.
pub const fn span(index: usize, size: usize) -> usize {
    index * (size + SPACING) + SPACING
}

/// Render the grid as a standalone SVG document.
pub fn render(grid: &SegmentGrid) -> String {
    let width = span(grid.cols(), DISPLAY_WIDTH);
    let height = span(grid.rows(), DISPLAY_HEIGHT);
    let unlit = svg_color(grid.background());

    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    let _ = writeln!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" xmlns:xlink=\"http://www.w3.org/1999/xlink\" version=\"1.1\" viewBox=\"0 0 {width} {height}\">"
    );

    out.push_str("<defs>\n");
    for (segment, path) in Segment::ALL.iter().zip(SEGMENT_PATHS) {
        let _ = writeln!(out, "<path id=\"{segment}\" d=\"{path}\"/>");
    }
    let _ = writeln!(
        out,
        "<circle id=\"{}\" cx=\"215\" cy=\"350\" r=\"7\"/>",
        Segment::Dp
    );
    out.push_str("</defs>\n");

    out.push_str("<g id=\"matrix\" style=\"fill:none;\">\n");
    for (row, col, cell) in grid.iter() {
        let _ = writeln!(
            out,
            "<g id=\"display_{col}-{row}\" transform=\"translate({} {})\">",
            span(col - 1, DISPLAY_WIDTH),
            span(row - 1, DISPLAY_HEIGHT)
        );
        let lit = svg_color(cell.color);
        for segment in Segment::ALL {
            let fill = if cell.segments.contains(segment.flag()) {
                lit.as_str()
            } else {
                unlit.as_str()
            };
            let _ = writeln!(
                out,
                "<use xlink:href=\"#{segment}\" style=\"fill:{fill};\"/>"
            );
        }
        out.push_str("</g>\n");
    }
    out.push_str("</g>\n</svg>\n");
    out
}

/// Render the grid and write it to `path`.
pub fn write_file(path: &Path, grid: &SegmentGrid) -> Result<()> {
    fs::write(path, render(grid)).map_err(|source| Error::SvgWrite {
        path: path.to_path_buf(),
        source,
    })
}

/// CSS color for a terminal color. [`Color::Reset`] becomes `none`.
pub fn svg_color(color: Color) -> String {
    match color {
        Color::Reset => "none".to_string(),
        Color::Black => "black".to_string(),
        Color::Red => "red".to_string(),
        Color::Green => "green".to_string(),
        Color::Yellow => "yellow".to_string(),
        Color::Blue => "blue".to_string(),
        Color::Magenta => "magenta".to_string(),
        Color::Cyan => "cyan".to_string(),
        Color::Gray => "silver".to_string(),
        Color::DarkGray => "gray".to_string(),
        Color::LightRed => "#ff5555".to_string(),
        Color::LightGreen => "#55ff55".to_string(),
        Color::LightYellow => "#ffff55".to_string(),
        Color::LightBlue => "#5555ff".to_string(),
        Color::LightMagenta => "#ff55ff".to_string(),
        Color::LightCyan => "#55ffff".to_string(),
        Color::White => "white".to_string(),
        Color::Rgb(r, g, b) => format!("#{r:02x}{g:02x}{b:02x}"),
        Color::Indexed(index) => {
            let (r, g, b) = xterm_rgb(index);
            format!("#{r:02x}{g:02x}{b:02x}")
        }
    }
}

/// RGB value of an xterm 256-color palette entry.
fn xterm_rgb(index: u8) -> (u8, u8, u8) {
    const BASE: [(u8, u8, u8); 16] = [
        (0x00, 0x00, 0x00),
        (0x80, 0x00, 0x00),
        (0x00, 0x80, 0x00),
        (0x80, 0x80, 0x00),
        (0x00, 0x00, 0x80),
        (0x80, 0x00, 0x80),
        (0x00, 0x80, 0x80),
        (0xc0, 0xc0, 0xc0),
        (0x80, 0x80, 0x80),
        (0xff, 0x00, 0x00),
        (0x00, 0xff, 0x00),
        (0xff, 0xff, 0x00),
        (0x00, 0x00, 0xff),
        (0xff, 0x00, 0xff),
        (0x00, 0xff, 0xff),
        (0xff, 0xff, 0xff),
    ];
    match index {
        0..=15 => BASE[usize::from(index)],
        16..=231 => {
            let cube = index - 16;
            let level = |v: u8| if v == 0 { 0 } else { 55 + v * 40 };
            (level(cube / 36), level((cube / 6) % 6), level(cube % 6))
        }
        _ => {
            let gray = 8 + (index - 232) * 10;
            (gray, gray, gray)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::RenderSink;

    #[test]
    fn test_view_box_matches_grid_size() {
        let grid = SegmentGrid::new(2, 3, Color::Red, Color::Reset);
        let svg = render(&grid);
        assert!(svg.contains("viewBox=\"0 0 740 780\""));
    }

    #[test]
    fn test_defs_hold_every_segment() {
        let svg = render(&SegmentGrid::new(1, 1, Color::Red, Color::Reset));
        for segment in Segment::ALL {
            assert!(svg.contains(&format!("id=\"{segment}\"")), "missing {segment}");
        }
        assert!(svg.contains("<circle id=\"DP\""));
    }

    #[test]
    fn test_one_use_per_segment_per_display() {
        let svg = render(&SegmentGrid::new(2, 2, Color::Red, Color::Reset));
        assert_eq!(svg.matches("<use ").count(), 4 * 17);
        assert!(svg.contains("translate(260 400)"));
    }

    #[test]
    fn test_lit_segments_use_cell_color() {
        let mut grid = SegmentGrid::new(1, 1, Color::Rgb(0x12, 0xab, 0xef), Color::DarkGray);
        grid.draw_cell(1, 1, '1', Color::Rgb(0x12, 0xab, 0xef));
        let svg = render(&grid);
        assert!(svg.contains("<use xlink:href=\"#B\" style=\"fill:#12abef;\"/>"));
        assert!(svg.contains("<use xlink:href=\"#A1\" style=\"fill:gray;\"/>"));
    }

    #[test]
    fn test_indexed_colors_follow_xterm_palette() {
        assert_eq!(svg_color(Color::Indexed(9)), "#ff0000");
        assert_eq!(svg_color(Color::Indexed(196)), "#ff0000");
        assert_eq!(svg_color(Color::Indexed(232)), "#080808");
        assert_eq!(svg_color(Color::Indexed(255)), "#eeeeee");
    }

    #[test]
    fn test_write_file_reports_path_on_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.svg");
        let err = write_file(&path, &SegmentGrid::new(1, 1, Color::Red, Color::Reset))
            .unwrap_err();
        assert!(matches!(err, Error::SvgWrite { path: ref p, .. } if *p == path));
    }
}
