//! xattr 系统调用封装
//!
//! 这里是整个 crate 中唯一调用 `*xattr` 系统调用的地方。
//!
//! # 错误码捕获
//!
//! 每个调用点在系统调用返回 -1 后**立即**读取 errno 并保存到 [`Error`]，
//! 在此之前不做任何分配、日志或字符串构造。之后的 errno 变化不会影响已返回的错误。
//!
//! # 平台
//!
//! - Linux / Android: `l*xattr`（不跟随）与 `*xattr`（跟随）
//! - macOS: `*xattr` 加/不加 `XATTR_NOFOLLOW`

use std::ffi::{CStr, CString, OsStr};
use std::io;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;
use std::ptr;

use crate::error::{Error, Result};

/// 读取当前线程的 errno
///
/// 必须紧跟在失败的系统调用之后调用
#[inline(always)]
fn last_errno() -> i32 {
    io::Error::last_os_error().raw_os_error().unwrap_or(libc::EIO)
}

/// 路径转换为 C 字符串
pub(crate) fn path_to_cstring(path: &Path) -> Result<CString> {
    CString::new(path.as_os_str().as_bytes())
        .map_err(|_| Error::invalid_input("path contains NUL byte"))
}

/// 属性名转换为 C 字符串
pub(crate) fn name_to_cstring(name: &OsStr) -> Result<CString> {
    CString::new(name.as_bytes()).map_err(|_| Error::invalid_input("name contains NUL byte"))
}

/// 设置属性
///
/// `flags` 为 `XATTR_CREATE` / `XATTR_REPLACE` 组合或 0
pub(crate) fn set(
    path: &CStr,
    name: &CStr,
    value: &[u8],
    flags: libc::c_int,
    follow: bool,
) -> Result<()> {
    let op = if follow { "setxattr" } else { "lsetxattr" };

    #[cfg(any(target_os = "linux", target_os = "android"))]
    // SAFETY: path/name 是有效的 NUL 结尾字符串，value 指针与长度来自同一切片
    let ret = unsafe {
        if follow {
            libc::setxattr(path.as_ptr(), name.as_ptr(), value.as_ptr().cast(), value.len(), flags)
        } else {
            libc::lsetxattr(path.as_ptr(), name.as_ptr(), value.as_ptr().cast(), value.len(), flags)
        }
    };

    #[cfg(target_os = "macos")]
    // SAFETY: 同上
    let ret = unsafe {
        let options = if follow { flags } else { flags | libc::XATTR_NOFOLLOW };
        libc::setxattr(path.as_ptr(), name.as_ptr(), value.as_ptr().cast(), value.len(), 0, options)
    };

    if ret == -1 {
        let code = last_errno();
        let err = Error::from_errno(op, code);
        log::trace!("[XATTR] {} {:?} {:?} failed: code={}", op, path, name, err.code());
        return Err(err);
    }

    log::trace!("[XATTR] {} {:?} {:?} len={}", op, path, name, value.len());
    Ok(())
}

/// 读取属性值
///
/// `buf` 为空时只查询属性长度（不复制数据）。
/// 返回内核实际写入（或报告）的字节数。
pub(crate) fn get(path: &CStr, name: &CStr, buf: &mut [u8], follow: bool) -> Result<usize> {
    let op = if follow { "getxattr" } else { "lgetxattr" };
    let (ptr, size) = if buf.is_empty() {
        (ptr::null_mut(), 0)
    } else {
        (buf.as_mut_ptr().cast::<libc::c_void>(), buf.len())
    };

    #[cfg(any(target_os = "linux", target_os = "android"))]
    // SAFETY: ptr 为空且 size 为 0，或指向长度为 size 的可写缓冲区
    let ret = unsafe {
        if follow {
            libc::getxattr(path.as_ptr(), name.as_ptr(), ptr, size)
        } else {
            libc::lgetxattr(path.as_ptr(), name.as_ptr(), ptr, size)
        }
    };

    #[cfg(target_os = "macos")]
    // SAFETY: 同上
    let ret = unsafe {
        let options = if follow { 0 } else { libc::XATTR_NOFOLLOW };
        libc::getxattr(path.as_ptr(), name.as_ptr(), ptr, size, 0, options)
    };

    if ret < 0 {
        let code = last_errno();
        let err = Error::from_errno(op, code);
        log::trace!("[XATTR] {} {:?} {:?} failed: code={}", op, path, name, err.code());
        return Err(err);
    }

    log::trace!("[XATTR] {} {:?} {:?} size={} ret={}", op, path, name, size, ret);
    Ok(ret as usize)
}

/// 列出属性名
///
/// 结果为 NUL 分隔的名称序列。`buf` 为空时只查询所需长度。
pub(crate) fn list(path: &CStr, buf: &mut [u8], follow: bool) -> Result<usize> {
    let op = if follow { "listxattr" } else { "llistxattr" };
    let (ptr, size) = if buf.is_empty() {
        (ptr::null_mut(), 0)
    } else {
        (buf.as_mut_ptr().cast::<libc::c_char>(), buf.len())
    };

    #[cfg(any(target_os = "linux", target_os = "android"))]
    // SAFETY: ptr 为空且 size 为 0，或指向长度为 size 的可写缓冲区
    let ret = unsafe {
        if follow {
            libc::listxattr(path.as_ptr(), ptr, size)
        } else {
            libc::llistxattr(path.as_ptr(), ptr, size)
        }
    };

    #[cfg(target_os = "macos")]
    // SAFETY: 同上
    let ret = unsafe {
        let options = if follow { 0 } else { libc::XATTR_NOFOLLOW };
        libc::listxattr(path.as_ptr(), ptr, size, options)
    };

    if ret < 0 {
        let code = last_errno();
        let err = Error::from_errno(op, code);
        log::trace!("[XATTR] {} {:?} failed: code={}", op, path, err.code());
        return Err(err);
    }

    log::trace!("[XATTR] {} {:?} size={} ret={}", op, path, size, ret);
    Ok(ret as usize)
}

/// 删除属性
pub(crate) fn remove(path: &CStr, name: &CStr, follow: bool) -> Result<()> {
    let op = if follow { "removexattr" } else { "lremovexattr" };

    #[cfg(any(target_os = "linux", target_os = "android"))]
    // SAFETY: path/name 是有效的 NUL 结尾字符串
    let ret = unsafe {
        if follow {
            libc::removexattr(path.as_ptr(), name.as_ptr())
        } else {
            libc::lremovexattr(path.as_ptr(), name.as_ptr())
        }
    };

    #[cfg(target_os = "macos")]
    // SAFETY: 同上
    let ret = unsafe {
        let options = if follow { 0 } else { libc::XATTR_NOFOLLOW };
        libc::removexattr(path.as_ptr(), name.as_ptr(), options)
    };

    if ret == -1 {
        let code = last_errno();
        let err = Error::from_errno(op, code);
        log::trace!("[XATTR] {} {:?} {:?} failed: code={}", op, path, name, err.code());
        return Err(err);
    }

    log::trace!("[XATTR] {} {:?} {:?}", op, path, name);
    Ok(())
}
