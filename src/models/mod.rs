// nmcli-client - Shared Types
// Copyright (C) 2026 nmcli-client contributors
// SPDX-License-Identifier: MIT

//! Shared types used across the crate:
//!
//! - **Error**: the full error taxonomy and `Result` alias
//! - **Record**: one parsed row of terse nmcli output
//! - **Token**: tagged argument values with per-variant normalization

pub mod error;
pub mod record;
pub mod token;

pub use error::{Error, Result};
pub use record::Record;
pub use token::Token;
