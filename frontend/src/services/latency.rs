/// Waits for the given number of milliseconds to stand in for network
/// round-trip time. Host builds (SSR tests) resolve immediately.
#[cfg(target_arch = "wasm32")]
pub async fn simulate_latency(ms: u32) {
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn simulate_latency(_ms: u32) {}
