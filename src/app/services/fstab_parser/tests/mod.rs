//! Test utilities for mount-table parser testing
//!
//! This module provides fixtures and helper functions used across the
//! parser test modules.

use std::io::Write;
use tempfile::NamedTempFile;

use crate::app::models::MountEntry;

mod stats_tests;

/// A realistic Debian-style fstab with comments, blank lines and tabs
pub fn create_test_fstab() -> String {
    [
        "# /etc/fstab: static file system information.",
        "#",
        "# Use 'blkid' to print the universally unique identifier for a",
        "# device; this may be used with UUID= as a more robust way to name devices",
        "# that works even if disks are added and removed. See fstab(5).",
        "#",
        "# <file system>                         <mount point>   <type>  <options>                           <dump>  <pass>",
        "/dev/mapper/vgssd-root                  /               ext4    noatime,discard,errors=remount-ro   0       1",
        "/dev/mapper/vg1-data                    /data           xfs     noatime,nodev,nosuid,noexec         0       2",
        "/dev/mapper/vg--raid1-home              /home           xfs     defaults                            0       2",
        "/dev/mapper/vg--raid1-var               /var            ext4    defaults                            0       2",
        "",
        "/dev/mapper/swap1\t\t\tnone            swap    sw                                  0       0",
        "/dev/mapper/swap2\t\t\tnone            swap    sw                                  0       0",
        "",
        "/dev/sr0                                /media/cdrom0   udf,iso9660 user,noauto                     0       0",
        "",
        "cgroup                                  /sys/fs/cgroup  cgroup  defaults                            0       0",
    ]
    .join("\n")
}

/// Entries expected from [`create_test_fstab`], in file order
pub fn expected_test_entries() -> Vec<MountEntry> {
    vec![
        entry(
            "/dev/mapper/vgssd-root",
            "/",
            &["ext4"],
            &["noatime", "discard", "errors=remount-ro"],
            0,
            1,
        ),
        entry(
            "/dev/mapper/vg1-data",
            "/data",
            &["xfs"],
            &["noatime", "nodev", "nosuid", "noexec"],
            0,
            2,
        ),
        entry("/dev/mapper/vg--raid1-home", "/home", &["xfs"], &["defaults"], 0, 2),
        entry("/dev/mapper/vg--raid1-var", "/var", &["ext4"], &["defaults"], 0, 2),
        entry("/dev/mapper/swap1", "none", &["swap"], &["sw"], 0, 0),
        entry("/dev/mapper/swap2", "none", &["swap"], &["sw"], 0, 0),
        entry(
            "/dev/sr0",
            "/media/cdrom0",
            &["udf", "iso9660"],
            &["user", "noauto"],
            0,
            0,
        ),
        entry("cgroup", "/sys/fs/cgroup", &["cgroup"], &["defaults"], 0, 0),
    ]
}

/// Build an entry from borrowed parts
pub fn entry(
    name: &str,
    directory: &str,
    types: &[&str],
    options: &[&str],
    dump_frequency: u32,
    pass_number: u32,
) -> MountEntry {
    MountEntry {
        name: name.to_string(),
        directory: directory.to_string(),
        types: types.iter().map(|s| s.to_string()).collect(),
        options: options.iter().map(|s| s.to_string()).collect(),
        dump_frequency,
        pass_number,
    }
}

/// Helper to create a temporary file with given content and a trailing newline
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "{}", content).unwrap();
    temp_file
}

/// Helper to create a temporary file whose last line has no newline
pub fn create_unterminated_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file
}
