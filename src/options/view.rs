//! Serializable decoded view of a packed value.

use serde::Serialize;

use crate::layout::{Links, Local, Match, Remote};

use super::packed::Want;

/// Every accessor of a [`Want`] evaluated once, for display and JSON output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DecodedView {
    pub bits: u32,
    pub links_type: Links,
    pub match_type: Match,
    pub local_type: Local,
    pub remote_type: Remote,
    pub links: bool,
    pub local: bool,
    pub remote: bool,
    pub local_ref: bool,
    pub local_uri: bool,
    pub local_url: bool,
    pub remote_ref: bool,
    pub remote_uri: bool,
    pub remote_url: bool,
    pub loose_match: bool,
    pub completion_match: bool,
}

impl From<Want> for DecodedView {
    fn from(want: Want) -> Self {
        Self {
            bits: want.bits(),
            links_type: want.links_type(),
            match_type: want.match_type(),
            local_type: want.local_type(),
            remote_type: want.remote_type(),
            links: want.links(),
            local: want.local(),
            remote: want.remote(),
            local_ref: want.local_ref(),
            local_uri: want.local_uri(),
            local_url: want.local_url(),
            remote_ref: want.remote_ref(),
            remote_uri: want.remote_uri(),
            remote_url: want.remote_url(),
            loose_match: want.loose_match(),
            completion_match: want.completion_match(),
        }
    }
}
