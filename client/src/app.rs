// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::pages::sign_up::SignUpView;
use onboarding_shared::messages::sign_up::InitialValues;
use sycamore::prelude::*;

#[derive(Prop)]
pub struct AppProps {
	initial: InitialValues,
}

#[component]
pub fn App<G: Html>(ctx: Scope<'_>, props: AppProps) -> View<G> {
	view! {
		ctx,
		div(class="onboarding") {
			SignUpView(initial=props.initial)
		}
	}
}
