//! Process owner identity via the OS user database

use std::ffi::CStr;

use crate::{Error, Result};

/// Numeric uid of the process owner.
pub fn uid() -> u32 {
    // getuid cannot fail
    unsafe { libc::getuid() }
}

/// User database entry fields the resolver cares about.
#[derive(Debug, Clone)]
pub struct Passwd {
    /// Primary group id
    pub gid: u32,
    /// Login name
    pub name: String,
}

/// Look up the user database entry for `uid` via `getpwuid_r`.
///
/// A missing entry or a lookup failure is an [`Error::Identity`]: it means
/// the host environment is broken, and no configuration-level fallback
/// makes sense.
pub fn passwd_for(uid: u32) -> Result<Passwd> {
    let mut pwd: libc::passwd = unsafe { std::mem::zeroed() };
    let mut result: *mut libc::passwd = std::ptr::null_mut();
    let mut buf = vec![0_u8; 1024];

    loop {
        let rc = unsafe {
            libc::getpwuid_r(
                uid,
                &mut pwd,
                buf.as_mut_ptr().cast::<libc::c_char>(),
                buf.len(),
                &mut result,
            )
        };
        if rc == 0 {
            break;
        }
        if rc == libc::ERANGE {
            // Entry larger than the buffer; retry with more room
            buf.resize(buf.len() * 2, 0);
            continue;
        }
        return Err(Error::Identity {
            uid,
            message: std::io::Error::from_raw_os_error(rc).to_string(),
        });
    }

    if result.is_null() {
        return Err(Error::Identity {
            uid,
            message: "no user database entry".to_string(),
        });
    }

    // result points into pwd/buf, both still alive here
    let name = unsafe { CStr::from_ptr(pwd.pw_name) }
        .to_string_lossy()
        .into_owned();

    Ok(Passwd {
        gid: pwd.pw_gid,
        name,
    })
}
