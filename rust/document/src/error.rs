// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Errors reported by a host document when it rejects an operation.

use house_lite_core::{Category, ElementId, ParameterKey};

use crate::element::ElementClass;

/// Result type alias for document operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors a document raises while querying or mutating elements.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A referenced element does not exist.
    #[error("element not found: {0:?}")]
    ElementNotFound(ElementId),

    /// A referenced element exists but has the wrong class.
    #[error("element {id:?} is a {found}, expected a {expected}")]
    WrongClass {
        id: ElementId,
        expected: ElementClass,
        found: ElementClass,
    },

    /// A catalog type of the wrong category was supplied.
    #[error("type {name:?} belongs to {found}, expected {expected}")]
    WrongCategory {
        name: String,
        expected: Category,
        found: Category,
    },

    /// Only doors and windows can be hosted by a wall.
    #[error("type {name:?} of category {category} cannot be hosted by a wall")]
    NotWallHosted { name: String, category: Category },

    /// A catalog type lacks a parameter the operation needs.
    #[error("type {name:?} has no {parameter:?} parameter")]
    MissingParameter { name: String, parameter: ParameterKey },

    /// A family type must be activated before instances can be placed.
    #[error("type {0:?} is not active")]
    InactiveType(String),

    /// An opening's insertion point does not lie on its host wall.
    #[error("insertion point is {distance:.4} away from host wall {host:?}")]
    PointOffHost { host: ElementId, distance: f64 },

    /// Curves handed to the document are degenerate.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// A mutation was attempted with no open transaction.
    #[error("document modification outside of a transaction")]
    NoTransaction,

    /// Transactions do not nest.
    #[error("transaction {0:?} is already open")]
    TransactionAlreadyOpen(String),

    /// The host refused the operation.
    #[error("host rejected {0}")]
    Rejected(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}
