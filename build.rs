fn main() {
    // Capture the current timestamp as the build time
    let build_time = chrono::Utc::now().to_rfc3339();
    println!("cargo:rustc-env=BUILD_TIME={}", build_time);

    // Server and WASM builds must agree on the asset prefix, so it is baked in at compile time
    let base_path = std::env::var("SITE_BASE_PATH")
        .or_else(|_| std::env::var("PUBLIC_URL"))
        .unwrap_or_default();
    println!("cargo:rustc-env=SITE_BASE_PATH={}", base_path);

    println!("cargo:rerun-if-env-changed=SITE_BASE_PATH");
    println!("cargo:rerun-if-env-changed=PUBLIC_URL");
    println!("cargo:rerun-if-changed=build.rs");
}
