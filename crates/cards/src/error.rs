// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Card parsing errors.
use thiserror::Error;

/// Errors returned when decoding a card from its text or numeric form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The token is not two or three characters long.
    #[error("invalid card token {0:?}, expected rank and suit like AS or 10D")]
    InvalidLength(String),
    /// The rank part of the token is not one of 2..10, J, Q, K, A.
    #[error("invalid card rank {0:?}")]
    InvalidRank(String),
    /// The suit character is not one of S, H, D, C.
    #[error("invalid card suit {0:?}")]
    InvalidSuit(char),
    /// A numeric rank outside 2..=14.
    #[error("rank value {0} out of range 2..=14")]
    RankOutOfRange(u8),
}
