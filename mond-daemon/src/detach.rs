use std::ffi::OsString;
use std::os::unix::process::CommandExt;
use std::process::{Command, Stdio};

use anyhow::{Context, Result};

/// Start a copy of this executable in its own session, detached from the
/// terminal, and return its pid. The caller keeps running and should exit.
pub fn spawn_detached(args: &[OsString]) -> Result<u32> {
    let exe = std::env::current_exe()
        .with_context(|| "Failed to locate the mond executable")?;

    let mut cmd = Command::new(&exe);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    // SAFETY: setsid is async-signal-safe and touches no parent state.
    unsafe {
        cmd.pre_exec(|| {
            rustix::process::setsid()
                .map(|_| ())
                .map_err(std::io::Error::from)
        });
    }

    let child = cmd
        .spawn()
        .with_context(|| format!("Failed to spawn {:?}", exe))?;

    Ok(child.id())
}
