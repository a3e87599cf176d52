//! Phase weight report over a symbol map.

use std::fmt::Write as _;

use super::visualize;
use crate::swp::compress_word;
use crate::symbol_map::SymbolMap;

const TITLE: &str = "Phase Weight Report";

/// Render every weight bucket of `map` in ascending key order, with each
/// phase's `(reduced, total)` pair and its compression trace.
pub fn visualize_phase_weights(map: &SymbolMap) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{TITLE}");
    let _ = writeln!(out, "{}", "=".repeat(TITLE.len()));

    if map.is_empty() {
        out.push_str("\nNo phases in symbol map");
        return out;
    }

    let mut buckets: Vec<(&str, &[String])> = map.iter().collect();
    buckets.sort_by_key(|(weight, _)| *weight);

    for (weight, phases) in buckets {
        let _ = writeln!(out, "\nWeight {weight}:");
        for phase in phases {
            let computed = compress_word(phase);
            let _ = writeln!(
                out,
                "  • {phase} (reduced {}, total {})",
                computed.reduced, computed.total
            );
            for line in visualize(phase).lines() {
                let _ = writeln!(out, "    {line}");
            }
        }
    }

    let _ = write!(
        out,
        "\n{} phases across {} weights",
        map.phase_count(),
        map.len()
    );
    out
}
