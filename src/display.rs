use std::collections::BTreeSet;
use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;

use crate::types::resource::GroupVersionResource;
use crate::types::review::{ResourceAccessReviewResponse, NAMESPACE_ALL};

/// Continuation indent for multi-entry user and group lists, lines the
/// entries up under the first one.
const LIST_INDENT: &str = "\n        ";

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum DisplayStyle {
    #[default]
    Text,
    Json,
}

/// Renders the review result as the who-can report.
pub fn render_report(
    resp: &ResourceAccessReviewResponse,
    verb: &str,
    gvr: &GroupVersionResource,
) -> String {
    let namespace = if resp.namespace == NAMESPACE_ALL {
        "<all>"
    } else {
        resp.namespace.as_str()
    };

    let mut report = String::new();
    report.push_str(&format!("Namespace: {namespace}\n"));
    report.push_str(&format!("Verb:      {verb}\n"));
    report.push_str(&format!("Resource:  {}\n\n", gvr.display_name()));
    report.push_str(&format!("Users:  {}\n\n", render_list(&resp.users)));
    report.push_str(&format!("Groups: {}\n\n", render_list(&resp.groups)));
    report
}

fn render_list(set: &BTreeSet<String>) -> String {
    if set.is_empty() {
        return String::from("none");
    }
    set.iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(LIST_INDENT)
}

pub fn display_report<W: Write>(
    out: &mut W,
    resp: &ResourceAccessReviewResponse,
    verb: &str,
    gvr: &GroupVersionResource,
    style: DisplayStyle,
) -> Result<()> {
    match style {
        DisplayStyle::Text => write!(out, "{}", render_report(resp, verb, gvr))?,
        DisplayStyle::Json => writeln!(out, "{}", serde_json::to_string_pretty(resp)?)?,
    }
    Ok(())
}
