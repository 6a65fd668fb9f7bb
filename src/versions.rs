//! Static version history for the bundled skill.

use std::fmt::Write as _;

use crate::models::VersionInfo;

/// The hard-coded changelog, newest first.
pub const VERSIONS: &[VersionInfo] = &[VersionInfo {
    version: "1.0.0",
    date: "2026-01-09",
    changes: &[
        "Initial release",
        "Support for Claude Code and OpenAI Codex",
        "8 search domains: style, color, typography, component, navigation, gesture, accessibility, animation",
        "7 stack guides: SwiftUI, Jetpack Compose, Flutter, React Native, KMP, Material 3, Liquid Glass",
        "BM25 search algorithm",
    ],
}];

/// Render the changelog as human-readable text.
#[must_use]
pub fn render_text(versions: &[VersionInfo]) -> String {
    let mut out = String::from("UI/UX Mobile Skill - Version History\n\n");
    for v in versions {
        let _ = writeln!(out, "v{} ({})", v.version, v.date);
        for change in v.changes {
            let _ = writeln!(out, "  - {change}");
        }
        out.push('\n');
    }
    out
}
