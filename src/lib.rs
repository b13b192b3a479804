// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod categories;
pub mod cli;
pub mod commands;
pub mod db;
pub mod errors;
pub mod logging;
pub mod models;
pub mod query;
pub mod store;
pub mod utils;
pub mod view;
