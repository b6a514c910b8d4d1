//! TikZ rendering of a finished triangulation.
//!
//! Pure formatting over the read-only outputs: triangulation edges as plain
//! `\draw`, every layer as a closed red polyline, points as filled circles.
//! A failed write surfaces as `Err` and leaves the triangulation untouched.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use onionmesh::{OnionTriangulation, Vec2};

fn coord(p: Vec2) -> String {
    format!("({}, {})", p.x, p.y)
}

/// Write a standalone LaTeX document drawing `tri` over `points`.
pub fn save_latex(path: &Path, points: &[Vec2], tri: &OnionTriangulation) -> Result<()> {
    let mut doc = String::new();
    doc.push_str(
        "\\documentclass[border=10pt]{standalone}\n\
         \\usepackage{tikz}\n\n\
         \\begin{document}\n\
         \\begin{tikzpicture}\n",
    );

    doc.push_str("% Triangulated edges\n");
    for &(a, b) in &tri.edges {
        let _ = writeln!(doc, "\t\\draw {} -- {};", coord(points[a]), coord(points[b]));
    }

    doc.push_str("% Hull layers\n");
    for ring in &tri.layers {
        let _ = write!(doc, "\t\\draw[red] {}", coord(points[ring[0]]));
        for pos in 0..ring.len() {
            let _ = write!(doc, " -- {}", coord(points[ring[(pos + 1) % ring.len()]]));
        }
        doc.push_str(";\n");
    }

    for &p in points {
        let _ = writeln!(doc, "\t\\fill {} circle[radius=2pt];", coord(p));
    }

    doc.push_str("\\end{tikzpicture}\n\\end{document}\n");

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(path, doc).with_context(|| format!("writing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_with_center() -> Vec<Vec2> {
        [(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (5.0, 5.0)]
            .into_iter()
            .map(|(x, y)| Vec2::new(x, y))
            .collect()
    }

    #[test]
    fn writes_a_standalone_tikz_document() {
        let points = square_with_center();
        let tri = OnionTriangulation::new(&points);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("figs").join("out.tex");
        save_latex(&path, &points, &tri).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("\\documentclass"));
        assert!(text.contains("\\begin{tikzpicture}"));
        assert!(text.contains("\\draw[red]"));
        assert!(text.ends_with("\\end{document}\n"));
        assert_eq!(text.matches("\\fill").count(), points.len());
        assert_eq!(text.matches("\\draw ").count(), tri.edges.len());
    }

    #[test]
    fn unwritable_destination_surfaces_as_error() {
        let points = square_with_center();
        let tri = OnionTriangulation::new(&points);
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened as a file.
        assert!(save_latex(dir.path(), &points, &tri).is_err());
    }
}
