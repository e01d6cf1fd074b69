//! Implication rules for untouched categories.
//!
//! Rules are evaluated once per encode, in table order. Each rule's condition
//! looks only at what the caller explicitly requested, and each action fills
//! one or more untouched categories. After the table runs, every category
//! holds a value.

use crate::layout::{Links, Local, Match, MatchFlags, Remote};

use super::explicit::Explicit;

/// A named implication: when `when` holds for the explicit request, `then`
/// fills in defaults.
#[derive(Clone, Copy)]
pub struct Rule {
    /// Stable name, used in logs.
    pub name: &'static str,
    /// Condition over the explicit request.
    pub when: fn(&Explicit) -> bool,
    /// Fills untouched categories.
    pub then: fn(&mut Explicit),
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// The ordered rule table.
pub const RULES: [Rule; 8] = [
    Rule {
        name: "full-default",
        when: |e| e.local.is_none() && e.remote.is_none(),
        then: |r| {
            r.local = Some(Local::Ref);
            r.remote = Some(Remote::Ref);
        },
    },
    Rule {
        name: "local-off-keeps-remote",
        when: |e| e.local == Some(Local::None) && e.remote.is_none(),
        then: |r| r.remote = Some(Remote::Ref),
    },
    Rule {
        name: "local-on-suppresses-remote",
        when: |e| e.local.is_some_and(|l| l != Local::None) && e.remote.is_none(),
        then: |r| r.remote = Some(Remote::None),
    },
    Rule {
        name: "remote-off-keeps-local",
        when: |e| e.remote == Some(Remote::None) && e.local.is_none(),
        then: |r| r.local = Some(Local::Ref),
    },
    Rule {
        name: "remote-on-suppresses-local",
        when: |e| e.remote.is_some_and(|r| r != Remote::None) && e.local.is_none(),
        then: |r| r.local = Some(Local::None),
    },
    Rule {
        name: "links-default-url",
        when: |e| e.links.is_none() && keeps_a_default_side(e),
        then: |r| r.links = Some(Links::Url),
    },
    Rule {
        name: "links-default-none",
        when: |e| e.links.is_none() && !keeps_a_default_side(e),
        then: |r| r.links = Some(Links::None),
    },
    Rule {
        name: "match-default",
        when: |e| e.matching.is_none(),
        then: |r| r.matching = Some(MatchFlags::empty()),
    },
];

/// True when at least one side resolves through its default: nothing about
/// local/remote was requested, or exactly one side was explicitly turned off.
fn keeps_a_default_side(e: &Explicit) -> bool {
    matches!(
        (e.local, e.remote),
        (None, None) | (Some(Local::None), None) | (None, Some(Remote::None))
    )
}

/// Every category's final value after implication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    pub links: Links,
    pub matching: Match,
    pub local: Local,
    pub remote: Remote,
}

/// Runs [`RULES`] over `explicit` and returns the fully resolved values.
#[must_use]
pub fn resolve(explicit: &Explicit) -> Resolved {
    let mut filled = *explicit;

    for rule in &RULES {
        if (rule.when)(explicit) {
            (rule.then)(&mut filled);
            tracing::trace!(rule = rule.name, "Applied implication rule");
        }
    }

    // The table fills every untouched category; the fallbacks are never reached.
    Resolved {
        links: filled.links.unwrap_or(Links::None),
        matching: Match::from_flags(filled.matching.unwrap_or_else(MatchFlags::empty)),
        local: filled.local.unwrap_or(Local::None),
        remote: filled.remote.unwrap_or(Remote::None),
    }
}
