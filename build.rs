use std::process::Command;
use chrono::TimeZone;

/// Stamps the footer's build line: short commit hash plus local build time
fn main() {
    let hash = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .map(|o| String::from_utf8_lossy(&o.stdout).trim().to_string())
        .unwrap_or_else(|| "dev".to_string());
    println!("cargo:rustc-env=BUILD_HASH={}", hash);

    // Zone abbreviation such as CET, empty when the host zone is unknown
    let now = chrono::Local::now();
    let zone = iana_time_zone::get_timezone()
        .ok()
        .and_then(|name| name.parse::<chrono_tz::Tz>().ok())
        .map(|tz| tz.from_utc_datetime(&now.naive_utc()).format("%Z").to_string())
        .unwrap_or_default();
    let stamp = format!("{} {}", now.format("%Y-%m-%d %H:%M"), zone);
    println!("cargo:rustc-env=BUILD_TIMESTAMP={}", stamp.trim_end());

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/heads");
    println!("cargo:rerun-if-changed=config/portal.json");
}
