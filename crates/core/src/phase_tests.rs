// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn next_walks_pipeline_order() {
    let mut walked = vec![Phase::first()];
    while let Some(next) = walked.last().and_then(|p| p.next()) {
        walked.push(next);
    }
    assert_eq!(walked, Phase::ALL.to_vec());
    assert!(Phase::Document.is_last());
}

#[test]
fn serializes_snake_case() {
    assert_eq!(serde_json::to_string(&Phase::Implement).unwrap(), "\"implement\"");
    assert_eq!(Phase::Optimize.to_string(), "optimize");
}
