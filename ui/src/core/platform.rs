//! Browser glue kept behind one seam so components stay target-agnostic.
//! Native builds exist for tests and tooling; their variants are no-ops.

/// Point the browsing context at `uri`. Used for the mail-composer
/// hand-off; nothing observable comes back from it.
pub fn navigate(uri: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        match web_sys::window() {
            Some(window) => {
                if window.location().set_href(uri).is_err() {
                    eprintln!("[platform] navigation rejected");
                }
            }
            None => eprintln!("[platform] window unavailable"),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        #[cfg(debug_assertions)]
        println!("[platform] navigate: {uri}");
        let _ = uri;
    }
}

/// Scroll the window back to the top. Smoothness comes from the
/// `scroll-behavior` rule in the theme stylesheet.
pub fn scroll_to_top() {
    #[cfg(target_arch = "wasm32")]
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}
