//! 配置与标志类型
//!
//! 定义 [`XattrStore`](crate::XattrStore) 的配置项以及 setxattr 标志

use bitflags::bitflags;

/// 符号链接处理方式
///
/// 决定路径最后一个组件是符号链接时，操作作用于链接本身还是其指向的目标。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SymlinkPolicy {
    /// 作用于符号链接本身（`l*xattr` / `XATTR_NOFOLLOW`）
    #[default]
    NoFollow,
    /// 跟随符号链接，作用于目标 inode
    Follow,
}

impl SymlinkPolicy {
    /// 是否跟随符号链接
    pub const fn follows(self) -> bool {
        matches!(self, SymlinkPolicy::Follow)
    }
}

/// 扩展属性存储配置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct XattrConfig {
    /// 符号链接处理方式（默认不跟随）
    pub symlinks: SymlinkPolicy,
}

impl XattrConfig {
    /// 使用指定的符号链接处理方式
    pub const fn with_symlinks(mut self, symlinks: SymlinkPolicy) -> Self {
        self.symlinks = symlinks;
        self
    }
}

bitflags! {
    /// setxattr 标志
    ///
    /// 对应内核的 `XATTR_CREATE` / `XATTR_REPLACE`。空标志表示"创建或覆盖"。
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct SetFlags: u8 {
        /// 仅创建，属性已存在时失败（EEXIST）
        const CREATE  = 0x01;
        /// 仅替换，属性不存在时失败（ENODATA / ENOATTR）
        const REPLACE = 0x02;
    }
}

impl SetFlags {
    /// 转换为系统调用的 flags 参数
    pub fn to_raw(self) -> libc::c_int {
        let mut raw = 0;
        if self.contains(SetFlags::CREATE) {
            raw |= libc::XATTR_CREATE;
        }
        if self.contains(SetFlags::REPLACE) {
            raw |= libc::XATTR_REPLACE;
        }
        raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = XattrConfig::default();
        assert_eq!(config.symlinks, SymlinkPolicy::NoFollow);
        assert!(!config.symlinks.follows());
    }

    #[test]
    fn test_config_with_symlinks() {
        let config = XattrConfig::default().with_symlinks(SymlinkPolicy::Follow);
        assert!(config.symlinks.follows());
    }

    #[test]
    fn test_set_flags_to_raw() {
        assert_eq!(SetFlags::empty().to_raw(), 0);
        assert_eq!(SetFlags::CREATE.to_raw(), libc::XATTR_CREATE);
        assert_eq!(SetFlags::REPLACE.to_raw(), libc::XATTR_REPLACE);
    }
}
