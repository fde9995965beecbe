use crate::tools::navigation::NavigationController;
use bevy::prelude::*;

/// Tick the pending redirect and leave the page when it comes due. The
/// controller already filters out redirects superseded by later tweens.
pub fn fire_pending_redirects(time: Res<Time>, mut nav: ResMut<NavigationController>) {
    if let Some(url) = nav.take_due_redirect(time.delta()) {
        navigate_to(&url);
    }
}

/// Navigate the browsing context to `url`. On native builds there is no
/// browsing context, so the confirmed selection is only logged.
pub fn navigate_to(url: &str) {
    info!("redirecting to {url}");

    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if window.location().set_href(url).is_err() {
                warn!("failed to redirect to {url}");
            }
        }
    }
}
