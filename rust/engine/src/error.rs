// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for building generation.

use thiserror::Error;

/// Result type for generation
pub type Result<T> = std::result::Result<T, Error>;

/// What kind of named element a lookup was for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKind {
    Level,
    WallType,
    DoorType,
    WindowType,
    RoofType,
}

impl std::fmt::Display for LookupKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            LookupKind::Level => "level",
            LookupKind::WallType => "wall type",
            LookupKind::DoorType => "door type",
            LookupKind::WindowType => "window type",
            LookupKind::RoofType => "roof type",
        })
    }
}

/// Errors that can occur during generation
#[derive(Error, Debug)]
pub enum Error {
    #[error("{kind} {name:?}{} not found", family_suffix(.family))]
    NotFound {
        kind: LookupKind,
        name: String,
        family: Option<String>,
    },

    #[error("Invalid geometry: {0}")]
    InvalidGeometry(#[from] house_lite_geometry::Error),

    #[error("Host operation failed: {0}")]
    HostOperation(#[from] house_lite_document::Error),

    #[error("Rollback failed after {original}: {rollback}")]
    Transaction {
        original: String,
        rollback: house_lite_document::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

fn family_suffix(family: &Option<String>) -> String {
    match family {
        Some(f) => format!(" (family {f:?})"),
        None => String::new(),
    }
}
