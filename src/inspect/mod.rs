//! Process resident-memory inspection for external test harnesses.
//!
//! Harnesses that stream a large chunked body through a server typically
//! watch the server process's resident memory to verify the streaming
//! property (memory stays O(chunk size), not O(body size)). That need is
//! distilled here into a single capability: given a process id, return its
//! current resident set size in bytes.
//!
//! The codec itself never uses this module.

use std::fs;
use std::io;
use std::path::PathBuf;

/// Capability interface for reading a process's resident memory.
pub trait MemoryInspector {
    /// Returns the current resident set size of `pid`, in bytes.
    fn resident_memory(&self, pid: u32) -> io::Result<u64>;
}

/// A [`MemoryInspector`] backed by the Linux `/proc` filesystem.
///
/// Reads `VmRSS` from `/proc/<pid>/status`. On platforms without procfs
/// every read fails with [`io::ErrorKind::Unsupported`].
#[derive(Debug, Clone, Default)]
pub struct ProcMemoryInspector;

impl ProcMemoryInspector {
    pub fn new() -> Self {
        Self
    }

    fn status_path(pid: u32) -> PathBuf {
        PathBuf::from(format!("/proc/{pid}/status"))
    }
}

impl MemoryInspector for ProcMemoryInspector {
    fn resident_memory(&self, pid: u32) -> io::Result<u64> {
        if !cfg!(target_os = "linux") {
            return Err(io::Error::new(
                io::ErrorKind::Unsupported,
                "procfs memory inspection is only available on linux",
            ));
        }

        let status = fs::read_to_string(Self::status_path(pid))?;
        parse_vm_rss(&status).ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidData, "no VmRSS field in process status")
        })
    }
}

/// Extracts the `VmRSS` value from `/proc/<pid>/status` content, converted
/// to bytes. The field is reported by the kernel in kibibytes.
fn parse_vm_rss(status: &str) -> Option<u64> {
    let line = status.lines().find(|line| line.starts_with("VmRSS:"))?;
    let kib: u64 = line.strip_prefix("VmRSS:")?.trim().strip_suffix("kB")?.trim().parse().ok()?;
    Some(kib * 1024)
}
