//! Browser-only async task spawning.

use std::future::Future;

/// Run `fut` on the browser event loop. Server renders never reach event
/// handlers or effects, so the future is dropped there.
pub fn spawn_browser<F>(fut: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(fut);
    #[cfg(not(feature = "hydrate"))]
    drop(fut);
}
