#[cfg(target_arch = "wasm32")]
fn main() {
    hrms_frontend::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    println!("hrms-frontend targets wasm32; build it with trunk or wasm-pack.");
}
