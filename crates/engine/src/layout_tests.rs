// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn stack(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

#[yare::parameterized(
    react   = { "react",   "src/hooks" },
    vue     = { "Vue",     "src/router" },
    svelte  = { "svelte",  "src/routes" },
    angular = { "angular", "src/app/services" },
    nextjs  = { "nextjs",  "app" },
    unknown = { "elm",     "src" },
)]
fn frontend_hint_selects_layout(frontend: &str, expected: &str) {
    let layout = scaffold_layout(&stack(&[("frontend", frontend)]));
    assert!(layout.iter().any(|d| d == expected), "{layout:?}");
    assert!(!layout.iter().any(|d| d.starts_with("server/")));
}

#[test]
fn empty_stack_uses_default() {
    assert_eq!(scaffold_layout(&BTreeMap::new()), vec!["src", "tests", "docs"]);
}

#[test]
fn backend_hint_adds_server_layout() {
    let layout = scaffold_layout(&stack(&[("frontend", "react"), ("backend", "axum")]));
    assert_eq!(layout.first().map(String::as_str), Some("src/components"));
    assert!(layout.contains(&"server/routes".to_string()));
}
