//! Read-only views of registry results and their renderings.

use serde::Serialize;

use crate::claim::Verdict;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClaimReport {
    pub name: String,
    pub verdict: Verdict,
}

/// One group's claims, in registration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupReport {
    pub name: String,
    pub claims: Vec<ClaimReport>,
}

/// Verdict counts across a set of group reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub passed: usize,
    pub failed: usize,
    pub untested: usize,
}

impl Summary {
    pub fn from_reports(reports: &[GroupReport]) -> Self {
        let mut summary = Summary::default();
        for claim in reports.iter().flat_map(|g| &g.claims) {
            match claim.verdict {
                Verdict::Pass => summary.passed += 1,
                Verdict::Fail => summary.failed += 1,
                Verdict::Untested => summary.untested += 1,
            }
        }
        summary
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed + self.untested
    }

    /// True when every claim was checked and passed.
    pub fn all_passed(&self) -> bool {
        self.failed == 0 && self.untested == 0
    }
}

/// Plain-text report: a heading per group, one line per claim.
pub fn render_text(reports: &[GroupReport]) -> String {
    let mut out = String::new();
    for (i, group) in reports.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!("== {} ==\n", group.name));
        for claim in &group.claims {
            out.push_str(&format!("  {}: {}\n", claim.name, claim.verdict));
        }
    }
    out
}

fn color(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Pass => "green",
        Verdict::Fail => "red",
        Verdict::Untested => "yellow",
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// HTML fragment: `<h2>` per group, a colored status line per claim.
pub fn render_html(reports: &[GroupReport]) -> String {
    reports
        .iter()
        .map(|group| {
            let lines: Vec<String> = group
                .claims
                .iter()
                .map(|claim| {
                    format!(
                        "<b style=\"color:{}\">{}:</b> {}",
                        color(claim.verdict),
                        escape_html(&claim.name),
                        claim.verdict
                    )
                })
                .collect();
            format!("<h2>{}</h2>{}", escape_html(&group.name), lines.join("<br />"))
        })
        .collect::<Vec<_>>()
        .join("<br /><br />")
}

pub fn to_json(reports: &[GroupReport]) -> String {
    serde_json::to_string_pretty(reports).unwrap_or_default()
}
