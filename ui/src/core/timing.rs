//! Timer utilities for the animated components.

/// Cooperative sleep. Dropping the future cancels it, so loops built on it
/// stop when their owning component unmounts.
#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    let ms = u32::try_from(ms).unwrap_or(u32::MAX);
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}
