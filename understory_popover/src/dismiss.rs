// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dismissal rules: Escape and presses outside both the anchor and the content.

use crate::host::ParentLookup;
use crate::types::Key;

/// Whether `node` is `ancestor` or one of its descendants.
///
/// Walks parents from `node` toward the root; the host guarantees acyclic ancestry.
pub fn contains<K: Copy + Eq>(parents: &impl ParentLookup<K>, ancestor: K, node: K) -> bool {
    let mut cur = node;
    loop {
        if cur == ancestor {
            return true;
        }
        match parents.parent_of(&cur) {
            Some(p) => cur = p,
            None => return false,
        }
    }
}

/// Whether a press on `target` lies outside both the anchor and the content.
///
/// Without an anchor nothing counts as outside, so the popover never dismisses by press.
pub fn is_outside_press<K: Copy + Eq>(
    parents: &impl ParentLookup<K>,
    anchor: Option<K>,
    content: Option<K>,
    target: K,
) -> bool {
    let (Some(anchor), Some(content)) = (anchor, content) else {
        return false;
    };
    !contains(parents, content, target) && !contains(parents, anchor, target)
}

/// Whether `key` asks to dismiss.
pub fn is_dismiss_key(key: Key) -> bool {
    key == Key::Escape
}
