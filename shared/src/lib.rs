// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub mod entries;
pub mod form;
pub mod messages;
pub mod validation;

/// The endpoint sign-up submissions are sent to when the hosting page doesn't configure one
pub const DEFAULT_SUBMIT_ENDPOINT: &str = "https://reqres.in/api/users/";
