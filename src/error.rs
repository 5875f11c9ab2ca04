//! 错误类型定义
//!
//! 提供扩展属性操作的错误类型。
//!
//! 错误码（errno）在失败的系统调用返回后立即保存到 [`Error`] 中，
//! 之后的任何分配、格式化或其他系统调用都不会影响它。
//! 描述文本只从保存的错误码生成。

use core::fmt;
use std::ffi::CStr;
use std::io;

use crate::consts::ENOATTR;

/// 扩展属性操作错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    code: i32,
    message: &'static str,
}

/// 错误类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// I/O 错误（未分类的错误码）
    Io,
    /// 无效参数
    InvalidInput,
    /// 路径不存在或不可达
    NotFound,
    /// 属性不存在
    NoAttribute,
    /// 权限错误
    PermissionDenied,
    /// 属性已存在（`SetFlags::CREATE`）
    AlreadyExists,
    /// 空间不足或配额耗尽
    NoSpace,
    /// 文件系统不支持扩展属性
    Unsupported,
    /// 属性值过大
    TooLarge,
    /// 名称过长，或缓冲区与属性大小不匹配
    OutOfRange,
}

impl ErrorKind {
    /// 根据 errno 分类
    pub const fn from_errno(code: i32) -> Self {
        if code == ENOATTR {
            return ErrorKind::NoAttribute;
        }
        match code {
            libc::ENOENT | libc::ENOTDIR | libc::ELOOP | libc::ENAMETOOLONG => ErrorKind::NotFound,
            libc::EACCES | libc::EPERM => ErrorKind::PermissionDenied,
            libc::EEXIST => ErrorKind::AlreadyExists,
            libc::ENOSPC | libc::EDQUOT => ErrorKind::NoSpace,
            c if c == libc::ENOTSUP || c == libc::EOPNOTSUPP => ErrorKind::Unsupported,
            libc::E2BIG => ErrorKind::TooLarge,
            libc::ERANGE => ErrorKind::OutOfRange,
            libc::EINVAL => ErrorKind::InvalidInput,
            _ => ErrorKind::Io,
        }
    }
}

impl Error {
    /// 从已保存的 errno 创建错误
    ///
    /// `message` 是失败操作的名称（如 `"getxattr"`）
    pub const fn from_errno(message: &'static str, code: i32) -> Self {
        Self {
            kind: ErrorKind::from_errno(code),
            code,
            message,
        }
    }

    /// 参数无法传给内核（如包含 NUL 字节），不经过系统调用
    pub const fn invalid_input(message: &'static str) -> Self {
        Self {
            kind: ErrorKind::InvalidInput,
            code: libc::EINVAL,
            message,
        }
    }

    /// 获取错误类型
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// 获取原始 OS 错误码
    pub const fn code(&self) -> i32 {
        self.code
    }

    /// 获取错误消息（失败的操作）
    pub const fn message(&self) -> &'static str {
        self.message
    }

    /// 根据保存的错误码生成可读描述
    ///
    /// 例如 `ENOENT` 对应 "No such file or directory"
    pub fn description(&self) -> String {
        let mut buf = [0 as libc::c_char; 256];
        // SAFETY: buf 在调用期间有效，长度如实传入；XSI strerror_r 总是写入 NUL 结尾的字符串
        let rc = unsafe { libc::strerror_r(self.code, buf.as_mut_ptr(), buf.len()) };
        if rc != 0 {
            return format!("Unknown error {}", self.code);
        }
        // SAFETY: strerror_r 成功时 buf 以 NUL 结尾
        unsafe { CStr::from_ptr(buf.as_ptr()) }
            .to_string_lossy()
            .into_owned()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.message, self.description())
    }
}

impl std::error::Error for Error {}

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        io::Error::from_raw_os_error(err.code)
    }
}

/// Result 类型别名
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        assert_eq!(ErrorKind::from_errno(libc::ENOENT), ErrorKind::NotFound);
        assert_eq!(ErrorKind::from_errno(ENOATTR), ErrorKind::NoAttribute);
        assert_eq!(ErrorKind::from_errno(libc::EPERM), ErrorKind::PermissionDenied);
        assert_eq!(ErrorKind::from_errno(libc::EACCES), ErrorKind::PermissionDenied);
        assert_eq!(ErrorKind::from_errno(libc::EOPNOTSUPP), ErrorKind::Unsupported);
        assert_eq!(ErrorKind::from_errno(libc::E2BIG), ErrorKind::TooLarge);
        assert_eq!(ErrorKind::from_errno(libc::ERANGE), ErrorKind::OutOfRange);
        assert_eq!(ErrorKind::from_errno(libc::EDQUOT), ErrorKind::NoSpace);
        assert_eq!(ErrorKind::from_errno(libc::EIO), ErrorKind::Io);
    }

    #[test]
    fn test_const_construction() {
        const MISSING: Error = Error::from_errno("lgetxattr", ENOATTR);
        const DENIED: ErrorKind = ErrorKind::from_errno(libc::EPERM);
        assert_eq!(MISSING.kind(), ErrorKind::NoAttribute);
        assert_eq!(MISSING.code(), ENOATTR);
        assert_eq!(DENIED, ErrorKind::PermissionDenied);
    }

    #[test]
    fn test_description_from_saved_code() {
        let err = Error::from_errno("getxattr", libc::ENOENT);
        assert_eq!(err.code(), libc::ENOENT);
        assert_eq!(err.description(), "No such file or directory");
        assert_eq!(err.to_string(), "getxattr: No such file or directory");
    }

    #[test]
    fn test_invalid_input() {
        let err = Error::invalid_input("path contains NUL byte");
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert_eq!(err.code(), libc::EINVAL);
        assert_eq!(err.message(), "path contains NUL byte");
    }

    #[test]
    fn test_into_io_error_keeps_code() {
        let err = Error::from_errno("removexattr", libc::EACCES);
        let io_err: io::Error = err.into();
        assert_eq!(io_err.raw_os_error(), Some(libc::EACCES));
        assert_eq!(io_err.kind(), io::ErrorKind::PermissionDenied);
    }
}
