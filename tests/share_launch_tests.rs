//! Browser launch for `WarpcastShare`. Rewrites `PATH`, so it lives in its
//! own test binary.

#![cfg(target_os = "linux")]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use fortune_caster::share::{ShareError, ShareOutcome, ShareTarget, WarpcastShare};

// ============================================================================
// Helper Functions
// ============================================================================

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("fortune-caster-{}-{}", name, std::process::id()));
    fs::remove_dir_all(&dir).ok();
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// A launcher that takes its time, like a browser that stays in the foreground.
fn write_slow_launcher(dir: &Path) {
    let script = dir.join("xdg-open");
    fs::write(&script, "#!/bin/sh\nsleep 3\nexit 0\n").unwrap();
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
}

fn set_path(dir: &Path) {
    // SAFETY: this binary has a single test, so no other thread reads the environment.
    unsafe { std::env::set_var("PATH", dir) };
}

fn warpcast() -> WarpcastShare {
    WarpcastShare::new(
        "https://warpcast.com/~/compose".to_string(),
        "https://example.com".to_string(),
        true,
    )
}

// ============================================================================
// Launch Tests
// ============================================================================

#[test]
fn test_browser_launch_does_not_block_and_reports_failure() {
    let original_path = std::env::var_os("PATH");

    // A slow launcher must not hold up the caller.
    let slow = scratch_dir("slow-launcher");
    write_slow_launcher(&slow);
    set_path(&slow);

    let target = warpcast();
    let started = Instant::now();
    let outcome = target.share("Be bold");
    let elapsed = started.elapsed();

    assert!(
        matches!(outcome, Ok(ShareOutcome::Opened { .. })),
        "unexpected outcome: {outcome:?}"
    );
    assert!(elapsed < Duration::from_secs(1), "share() blocked for {elapsed:?}");

    // No launcher at all surfaces as a launch error carrying the link.
    let empty = scratch_dir("no-launcher");
    set_path(&empty);
    match target.share("Be bold") {
        Err(ShareError::Launch { url, .. }) => assert_eq!(url, target.compose_url("Be bold")),
        other => panic!("expected launch error, got {other:?}"),
    }

    match original_path {
        // SAFETY: see `set_path`.
        Some(path) => unsafe { std::env::set_var("PATH", path) },
        None => unsafe { std::env::remove_var("PATH") },
    }
    fs::remove_dir_all(&slow).ok();
    fs::remove_dir_all(&empty).ok();
}
