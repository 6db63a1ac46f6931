//! Output file layout and writing

use super::rules::RuleSet;
use super::xml::Element;
use crate::domain::OutputDocument;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const REWRITE_FILE: &str = "rewrite.config";
pub const REWRITE_MAPS_FILE: &str = "rewriteMaps.config";
pub const RULES_FILE: &str = "rules.config";

/// Arrange the fragments into output documents.
///
/// Combined: a single `rewrite.config`. Separated: `rewriteMaps.config`,
/// `rules.config`, and a `rewrite.config` that points at both through
/// `configSource`.
pub fn partition(rule_set: RuleSet, separate: bool) -> Vec<OutputDocument> {
    let RuleSet { rewrite_maps, rules, .. } = rule_set;

    if !separate {
        let root = Element::new("rewrite").child(rewrite_maps).child(rules);
        return vec![OutputDocument::new(REWRITE_FILE, root)];
    }

    let root = Element::new("rewrite")
        .child(Element::new("rewriteMaps").attr("configSource", REWRITE_MAPS_FILE))
        .child(Element::new("rules").attr("configSource", RULES_FILE));

    vec![
        OutputDocument::new(REWRITE_MAPS_FILE, rewrite_maps),
        OutputDocument::new(RULES_FILE, rules),
        OutputDocument::new(REWRITE_FILE, root),
    ]
}

/// Write every document into `dir`, returning the written paths in order.
///
/// `on_write` is called with each path just before it is written.
pub fn write_documents<F>(
    dir: &Path,
    documents: &[OutputDocument],
    mut on_write: F,
) -> Result<Vec<PathBuf>>
where
    F: FnMut(&Path),
{
    let rendered: Vec<(PathBuf, String)> =
        documents.iter().map(|doc| (dir.join(doc.file_name), doc.render())).collect();

    let mut written = Vec::with_capacity(rendered.len());
    for (path, content) in rendered {
        on_write(&path);
        fs::write(&path, content)
            .with_context(|| format!("Failed writing output file: {}", path.display()))?;
        written.push(path);
    }
    Ok(written)
}
