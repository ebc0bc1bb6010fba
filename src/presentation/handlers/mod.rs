// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod api_handler;
pub mod batch_handler;
pub mod convert_handler;
pub mod download_handler;
