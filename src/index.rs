//! Matching configured aliases against open windows.
//!
//! [`resolve_aliases`] is pure: it takes the configuration and a window
//! listing and returns the bindings found in this pass.  Merging them into
//! the persisted state is the caller's job.

use crate::command::WindowRecord;
use crate::config::AppConfig;
use log::debug;
use std::collections::BTreeMap;

/// Bind each alias to the first listed window whose title contains one of
/// the alias's substrings.
///
/// Windows are visited in listing order.  Once an alias is bound it is not
/// looked at again, so a later window with the same title never displaces
/// the first one.  Matching is plain case-sensitive containment; the order
/// of substrings only decides which one is reported, since any hit binds
/// the window.  Aliases with no match are absent from the result.
pub fn resolve_aliases(config: &AppConfig, windows: &[WindowRecord]) -> BTreeMap<String, String> {
    let mut resolved = BTreeMap::new();

    for window in windows {
        for (alias, substrings) in &config.window_title_substrings {
            if resolved.contains_key(alias) {
                continue;
            }
            if let Some(hit) = substrings.iter().find(|s| window.title.contains(s.as_str())) {
                debug!(
                    "{} -> {} ({}, title {:?} contains {:?})",
                    alias, window.id, window.window_class, window.title, hit
                );
                resolved.insert(alias.clone(), window.id.clone());
            }
        }
    }

    resolved
}
