//! 扩展属性常量定义
//!
//! 这个模块包含了扩展属性相关的常量，包括：
//! - 命名空间前缀
//! - 内核限制
//! - 平台相关的错误码

//=============================================================================
// 命名空间前缀
//=============================================================================

/// 用户自定义属性前缀
pub const XATTR_USER_PREFIX: &str = "user.";

/// 可信属性前缀（需要 CAP_SYS_ADMIN）
pub const XATTR_TRUSTED_PREFIX: &str = "trusted.";

/// 安全标签前缀（如 SELinux、capabilities）
pub const XATTR_SECURITY_PREFIX: &str = "security.";

/// 系统属性前缀（如 POSIX ACL）
pub const XATTR_SYSTEM_PREFIX: &str = "system.";

//=============================================================================
// 内核限制（Linux VFS）
//=============================================================================

/// 属性名最大长度（字节，不含结尾 NUL）
pub const XATTR_NAME_MAX: usize = 255;

/// 单个属性值的最大长度（字节）
pub const XATTR_SIZE_MAX: usize = 65536;

//=============================================================================
// 错误码
//=============================================================================

/// 属性不存在
///
/// Linux 上为 `ENODATA`，BSD 系（macOS）上为 `ENOATTR`
#[cfg(any(target_os = "linux", target_os = "android"))]
pub const ENOATTR: i32 = libc::ENODATA;

/// 属性不存在
///
/// Linux 上为 `ENODATA`，BSD 系（macOS）上为 `ENOATTR`
#[cfg(target_os = "macos")]
pub const ENOATTR: i32 = libc::ENOATTR;
