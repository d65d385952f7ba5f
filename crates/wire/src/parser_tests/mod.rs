// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#[macro_use]
mod macros;

mod errors;
mod properties;
mod records;
mod values;
