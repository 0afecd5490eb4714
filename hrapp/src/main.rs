#[cfg(feature = "csr")]
pub fn main() {
    hrapp::start();
}

#[cfg(not(feature = "csr"))]
pub fn main() {
    // no native entry point; build with Trunk and the `csr` feature
}
