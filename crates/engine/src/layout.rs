// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scaffold layouts keyed by tech-stack hints.

use std::collections::BTreeMap;

const REACT: &[&str] = &["src/components", "src/hooks", "src/pages", "src/styles", "public"];
const VUE: &[&str] = &["src/components", "src/views", "src/router", "src/store", "public"];
const SVELTE: &[&str] = &["src/lib", "src/routes", "static"];
const ANGULAR: &[&str] = &["src/app/components", "src/app/services", "src/assets", "src/environments"];
const NEXTJS: &[&str] = &["app", "components", "lib", "public"];
const DEFAULT: &[&str] = &["src", "tests", "docs"];
const SERVER: &[&str] = &["server/routes", "server/models", "server/middleware"];

/// Directory skeleton requested during Scaffold.
///
/// Frontend hints are matched case-insensitively; any backend hint appends
/// the server layout.
pub fn scaffold_layout(tech_stack: &BTreeMap<String, String>) -> Vec<String> {
    let frontend = tech_stack.get("frontend").map(|f| f.trim().to_ascii_lowercase());
    let base = match frontend.as_deref() {
        Some("react") => REACT,
        Some("vue") => VUE,
        Some("svelte") => SVELTE,
        Some("angular") => ANGULAR,
        Some("nextjs") | Some("next") => NEXTJS,
        _ => DEFAULT,
    };

    let mut layout: Vec<String> = base.iter().map(|d| d.to_string()).collect();
    if tech_stack.get("backend").is_some_and(|b| !b.trim().is_empty()) {
        layout.extend(SERVER.iter().map(|d| d.to_string()));
    }
    layout
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
