//! System capability check.

use airctl_common::config::{config_file_path, AppConfig};

pub fn run() -> anyhow::Result<()> {
    println!("airctl system check");
    println!("===================");
    println!();

    check_config();
    check_backends();

    println!();
    println!("Done. [WARN] items may limit functionality.");
    Ok(())
}

fn check_config() {
    println!("Configuration:");

    let path = config_file_path();
    if path.exists() {
        println!("  [OK]   Config file found at {}", path.display());
    } else {
        println!(
            "  [WARN] No config file at {} (defaults in effect)",
            path.display()
        );
    }

    let config = AppConfig::load();
    println!(
        "  [OK]   Confirmation window: {} frames, cooldown: {} ms",
        config.gesture.confirmation_frames, config.gesture.action_cooldown_ms
    );
}

fn check_backends() {
    println!();
    println!("Backends:");
    println!("  [OK]   null (dry run, always available)");

    #[cfg(target_os = "linux")]
    {
        if airctl_control::backends::UinputBackend::is_supported() {
            println!("  [OK]   uinput (/dev/uinput is writable)");
        } else {
            println!(
                "  [WARN] uinput unavailable: /dev/uinput is not writable \
                 (join the 'input' group or add a udev rule)"
            );
        }
    }

    #[cfg(not(target_os = "linux"))]
    println!("  [WARN] uinput is Linux-only; this platform has no injection backend");
}
