// The binary only has work to do in the browser; Trunk builds it for wasm32
// and the library's start hook does the mounting for wasm-pack builds.
#[cfg(target_arch = "wasm32")]
fn main() {
    aone_frontend::start();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {}
