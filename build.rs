fn main() {
    // WIFI_SSID and WIFI_PASSWORD come from `.env` or the environment
    dotenv_build::output(dotenv_build::Config::default()).ok();
    println!("cargo:rerun-if-env-changed=WIFI_SSID");
    println!("cargo:rerun-if-env-changed=WIFI_PASSWORD");

    let version = chrono::Utc::now().format("%Y.%m.%d-%H%M");
    println!("cargo:rustc-env=BUILD_VERSION={version}");
}
