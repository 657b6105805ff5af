//! Host environment checks for the E2E lab
//!
//! The suite is meant to run inside a Hyper-V VM, where the baseboard
//! manufacturer reads `Microsoft Corporation`. The probe is a thin
//! shell-out (WMI on Windows, DMI sysfs elsewhere); the decision
//! helpers are pure so they can be tested without a VM.

use std::io;

/// Baseboard manufacturer prefix reported inside a Hyper-V guest.
pub const EXPECTED_MANUFACTURER: &str = "Microsoft Corporation";

/// Whether a probed manufacturer string identifies the expected host.
pub fn is_expected_manufacturer(manufacturer: &str) -> bool {
    manufacturer.trim_start().starts_with(EXPECTED_MANUFACTURER)
}

/// Whether a prompt answer means "continue anyway".
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

/// Probe the baseboard manufacturer.
#[cfg(windows)]
pub fn board_manufacturer() -> io::Result<String> {
    let output = std::process::Command::new("powershell.exe")
        .arg("(gwmi Win32_BaseBoard).Manufacturer")
        .output()?;
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Probe the baseboard manufacturer.
#[cfg(not(windows))]
pub fn board_manufacturer() -> io::Result<String> {
    let vendor = std::fs::read_to_string("/sys/class/dmi/id/board_vendor")?;
    Ok(vendor.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("Microsoft Corporation", true; "exact")]
    #[test_case("Microsoft Corporation Virtual Machine", true; "prefix")]
    #[test_case("  Microsoft Corporation", true; "leading whitespace")]
    #[test_case("ASUSTeK COMPUTER INC.", false; "bare metal")]
    #[test_case("microsoft corporation", false; "case matters")]
    #[test_case("", false; "empty probe")]
    fn test_is_expected_manufacturer(probe: &str, expected: bool) {
        assert_eq!(is_expected_manufacturer(probe), expected);
    }

    #[test_case("y", true; "lowercase y")]
    #[test_case("Y", true; "uppercase y")]
    #[test_case("y\n", true)]
    #[test_case("yes", false)]
    #[test_case("n", false)]
    #[test_case("", false)]
    fn test_is_affirmative(answer: &str, expected: bool) {
        assert_eq!(is_affirmative(answer), expected);
    }
}
