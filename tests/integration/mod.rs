// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod api_tests;
pub mod batch_page_test;
pub mod convert_page_test;
pub mod helpers;
