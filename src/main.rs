mod app;
mod arrow_nav;
mod carousel;
mod config;
mod controller;
mod controls;
mod debounce;
mod dom;
mod error;
mod input;
#[cfg(all(test, target_arch = "wasm32"))]
mod test_support;

fn main() {
    app::run();
}
