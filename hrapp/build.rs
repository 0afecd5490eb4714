// The API base address is fixed at build time; `.env` is honoured the same
// way the environment is.
fn main() {
    println!("cargo:rerun-if-changed=.env");
    println!("cargo:rerun-if-env-changed=HRAPP_API_BASE");
    dotenvy::dotenv().ok();
    if let Ok(api_base) = std::env::var("HRAPP_API_BASE") {
        println!("cargo:rustc-env=HRAPP_API_BASE={api_base}");
    }
}
