//! Custom assertions for collection output.
//!
//! Provides high-level assertions that make tests more readable:
//! - Item count and title checks on `--format json` list output
//! - View state checks on in-process view-models

use anyhow::{Context, Result};
use praxis_engine::ViewState;
use serde_json::Value;

fn listed_items(json: &Value) -> Result<&Vec<Value>> {
    json["content"]["view"]["items"]
        .as_array()
        .context("Expected 'content.view.items' array in JSON")
}

/// Assert that JSON list output holds the expected number of items.
pub fn assert_item_count(json: &Value, expected: usize) -> Result<()> {
    let items = listed_items(json)?;

    if items.len() != expected {
        anyhow::bail!("Expected {} items, got {}", expected, items.len());
    }

    Ok(())
}

/// Titles in render order.
pub fn listed_titles(json: &Value) -> Result<Vec<String>> {
    listed_items(json)?
        .iter()
        .enumerate()
        .map(|(i, item)| {
            item["title"]
                .as_str()
                .map(String::from)
                .with_context(|| format!("Item {} missing title", i))
        })
        .collect()
}

/// Assert the JSON view state tag (`ready`, `empty`, `failed`, ...).
pub fn assert_view_state(json: &Value, expected: &str) -> Result<()> {
    let state = json["content"]["view"]["state"]
        .as_str()
        .context("Expected 'content.view.state' string in JSON")?;

    if state != expected {
        anyhow::bail!("Expected view state {}, got {}", expected, state);
    }

    Ok(())
}

/// Ids of a ready view, in render order.
pub fn ready_ids(state: &ViewState) -> Result<Vec<String>> {
    match state {
        ViewState::Ready(view) => Ok(view.items.iter().map(|item| item.id.to_string()).collect()),
        other => anyhow::bail!("Expected ready view, got {:?}", other),
    }
}
