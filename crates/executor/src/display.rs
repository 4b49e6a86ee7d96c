use fw_bench_core::{DistanceMatrix, ShortestPaths};

/// Marker printed for an unreachable entry.
pub const UNREACHABLE_MARKER: &str = "∞";

fn format_entry(value: f64) -> String {
    if value == f64::INFINITY {
        UNREACHABLE_MARKER.to_string()
    } else if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

/// Renders a matrix one row per line, entries separated by a single space.
pub fn render_matrix(matrix: &DistanceMatrix) -> String {
    matrix
        .rows()
        .map(|row| {
            row.iter()
                .map(|&value| format_entry(value))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Human readable negative-cycle verdict.
pub fn render_verdict(result: &ShortestPaths) -> String {
    if result.has_negative_cycle {
        let vertices: Vec<String> = result
            .negative_cycle_vertices()
            .iter()
            .map(ToString::to_string)
            .collect();
        format!(
            "Negative cycle detected through vertices: {}",
            vertices.join(", ")
        )
    } else {
        "No negative cycles.".to_string()
    }
}
