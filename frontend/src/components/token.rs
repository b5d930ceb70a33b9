//! Main screen: token name, outbound links and the contract address.

use leptos::*;

use crate::components::{ActionLink, CopiedToast, CopyButton};
use crate::config::{COMMUNITY_URL, CONTRACT_ADDRESS, TOKEN_NAME, TWITTER_URL};

#[component]
pub fn TokenScreen(
    copied: Signal<bool>,
    #[prop(into)] on_copy: Callback<()>,
) -> impl IntoView {
    view! {
        <main class="screen token">
            <h1 class="token-name glow">{TOKEN_NAME}</h1>

            <div class="action-row">
                <ActionLink href=TWITTER_URL label="Twitter"/>
                <ActionLink href=COMMUNITY_URL label="Community"/>
                <CopyButton copied=copied on_copy=on_copy/>
            </div>

            <div class="contract-line glow">{CONTRACT_ADDRESS}</div>

            <CopiedToast copied=copied/>
        </main>
    }
}
