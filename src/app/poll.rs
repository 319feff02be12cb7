//! Periodic refresh for page data.

use dioxus::prelude::*;
use std::time::Duration;

/// Restart `resource` every `every` while the calling component is mounted.
/// The task belongs to the component's scope and stops when it unmounts.
pub fn use_polling<T: 'static>(mut resource: Resource<T>, every: Duration) {
    use_effect(move || {
        spawn(async move {
            loop {
                sleep(every).await;
                resource.restart();
            }
        });
    });
}

#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
    let millis = duration.as_millis().min(u32::MAX as u128) as u32;
    gloo_timers::future::TimeoutFuture::new(millis).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}
