// SPDX-FileCopyrightText: 2025 The rowset authors
// SPDX-License-Identifier: MIT

pub mod config;
pub mod demo;
pub mod error;
