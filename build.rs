fn main() {
    // Release builds set DAYPLAN_VERSION (e.g., "version-abc1234"); otherwise derive from git.
    if let Ok(version) = std::env::var("DAYPLAN_VERSION") {
        println!("cargo:rustc-env=DAYPLAN_VERSION={version}");
    } else {
        let hash = std::process::Command::new("git")
            .args(["rev-parse", "--short=7", "HEAD"])
            .output()
            .ok()
            .filter(|o| o.status.success())
            .and_then(|o| String::from_utf8(o.stdout).ok())
            .unwrap_or_default()
            .trim()
            .to_string();

        if hash.is_empty() {
            println!("cargo:rustc-env=DAYPLAN_VERSION=dev");
        } else {
            println!("cargo:rustc-env=DAYPLAN_VERSION=version-{hash}");
        }
    }
    println!("cargo:rerun-if-env-changed=DAYPLAN_VERSION");
}
