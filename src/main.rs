#[cfg(any(target_arch = "wasm32", test))]
mod form;
#[cfg(any(target_arch = "wasm32", test))]
mod menu;
#[cfg(any(target_arch = "wasm32", test))]
mod notify;
#[cfg(any(target_arch = "wasm32", test))]
mod observe;
#[cfg(any(target_arch = "wasm32", test))]
mod pointer;
#[cfg(any(target_arch = "wasm32", test))]
mod scroll;
#[cfg(any(target_arch = "wasm32", test))]
mod state;

#[cfg(target_arch = "wasm32")]
mod frontend;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("This enhancement layer targets wasm32. Run `trunk serve` or `trunk build --release`.");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}
