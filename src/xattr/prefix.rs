//! xattr 命名空间前缀处理
//!
//! 根据属性名前缀（如 "user.", "security."）判断所属命名空间。
//! 只用于分类，不会拒绝任何名称：名称是否合法由内核和文件系统决定。

use std::ffi::OsStr;
use std::os::unix::ffi::OsStrExt;

use crate::consts::*;

/// 扩展属性命名空间
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    /// `user.` - 用户自定义属性
    User,
    /// `trusted.` - 可信属性
    Trusted,
    /// `security.` - 安全标签
    Security,
    /// `system.` - 系统属性（如 ACL）
    System,
    /// 其他前缀（如 macOS 的 `com.apple.`）
    Other,
}

/// 命名空间前缀表
static PREFIX_TABLE: &[(&str, Namespace)] = &[
    (XATTR_USER_PREFIX, Namespace::User),
    (XATTR_TRUSTED_PREFIX, Namespace::Trusted),
    (XATTR_SECURITY_PREFIX, Namespace::Security),
    (XATTR_SYSTEM_PREFIX, Namespace::System),
];

impl Namespace {
    /// 根据完整属性名判断命名空间
    ///
    /// 前缀后必须还有名称，"user." 本身属于 [`Namespace::Other`]。
    ///
    /// # 示例
    ///
    /// ```
    /// use xattr_core::xattr::Namespace;
    ///
    /// assert_eq!(Namespace::of("user.comment"), Namespace::User);
    /// assert_eq!(Namespace::of("com.apple.quarantine"), Namespace::Other);
    /// ```
    pub fn of(name: impl AsRef<OsStr>) -> Self {
        let bytes = name.as_ref().as_bytes();
        PREFIX_TABLE
            .iter()
            .find(|(prefix, _)| bytes.len() > prefix.len() && bytes.starts_with(prefix.as_bytes()))
            .map(|&(_, ns)| ns)
            .unwrap_or(Namespace::Other)
    }

    /// 命名空间前缀字符串，`Other` 返回 None
    pub fn prefix(self) -> Option<&'static str> {
        PREFIX_TABLE
            .iter()
            .find(|&&(_, ns)| ns == self)
            .map(|&(prefix, _)| prefix)
    }
}
