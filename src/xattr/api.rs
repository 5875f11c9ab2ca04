//! xattr 公共 API
//!
//! 提供用户级别的扩展属性操作接口
//!
//! [`XattrStore`] 本身不保存任何可变状态，只持有一份 [`XattrConfig`]，
//! 可以在多个线程之间自由共享。每个操作都是一次独立的系统调用事务。

use std::ffi::{OsStr, OsString};
use std::path::Path;

use crate::{
    error::{ErrorKind, Result},
    types::{SetFlags, SymlinkPolicy, XattrConfig},
};

use super::{buffer, names, sys};

/// 扩展属性存储
///
/// # 示例
///
/// ```no_run
/// use xattr_core::XattrStore;
///
/// let store = XattrStore::new();
/// store.set("/tmp/f", "user.tag", b"hello")?;
/// assert_eq!(store.get("/tmp/f", "user.tag")?, b"hello");
/// assert_eq!(store.list("/tmp/f")?, ["user.tag"]);
/// store.remove("/tmp/f", "user.tag")?;
/// # Ok::<(), xattr_core::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct XattrStore {
    config: XattrConfig,
}

impl XattrStore {
    /// 使用默认配置（不跟随符号链接）
    pub const fn new() -> Self {
        Self {
            config: XattrConfig {
                symlinks: SymlinkPolicy::NoFollow,
            },
        }
    }

    /// 使用指定配置
    pub const fn with_config(config: XattrConfig) -> Self {
        Self { config }
    }

    /// 当前配置
    pub const fn config(&self) -> XattrConfig {
        self.config
    }

    fn follows(&self) -> bool {
        self.config.symlinks.follows()
    }

    /// 设置扩展属性
    ///
    /// 属性不存在时创建，存在时覆盖。`value` 可以为空。
    pub fn set(
        &self,
        path: impl AsRef<Path>,
        name: impl AsRef<OsStr>,
        value: &[u8],
    ) -> Result<()> {
        self.set_with_flags(path, name, value, SetFlags::empty())
    }

    /// 设置扩展属性，带创建/替换标志
    ///
    /// - [`SetFlags::CREATE`]：属性已存在时以 [`ErrorKind::AlreadyExists`] 失败
    /// - [`SetFlags::REPLACE`]：属性不存在时以 [`ErrorKind::NoAttribute`] 失败
    pub fn set_with_flags(
        &self,
        path: impl AsRef<Path>,
        name: impl AsRef<OsStr>,
        value: &[u8],
        flags: SetFlags,
    ) -> Result<()> {
        let path = sys::path_to_cstring(path.as_ref())?;
        let name = sys::name_to_cstring(name.as_ref())?;
        sys::set(&path, &name, value, flags.to_raw(), self.follows())
    }

    /// 获取扩展属性值
    ///
    /// 先查询长度，再读取数据；两次调用之间属性变短时以实际读取的长度为准。
    ///
    /// # 错误
    ///
    /// 属性不存在时返回 [`ErrorKind::NoAttribute`]
    pub fn get(&self, path: impl AsRef<Path>, name: impl AsRef<OsStr>) -> Result<Vec<u8>> {
        let path = sys::path_to_cstring(path.as_ref())?;
        let name = sys::name_to_cstring(name.as_ref())?;
        let follow = self.follows();
        buffer::read_sized(|buf| sys::get(&path, &name, buf, follow))
    }

    /// 列出路径上的所有扩展属性名
    ///
    /// 顺序与内核返回的一致。没有任何属性时返回空列表。
    pub fn list(&self, path: impl AsRef<Path>) -> Result<Vec<OsString>> {
        let path = sys::path_to_cstring(path.as_ref())?;
        let follow = self.follows();
        let raw = buffer::read_sized(|buf| sys::list(&path, buf, follow))?;
        Ok(names::parse_name_list(&raw))
    }

    /// 删除扩展属性
    ///
    /// # 错误
    ///
    /// 属性不存在时返回 [`ErrorKind::NoAttribute`]
    pub fn remove(&self, path: impl AsRef<Path>, name: impl AsRef<OsStr>) -> Result<()> {
        let path = sys::path_to_cstring(path.as_ref())?;
        let name = sys::name_to_cstring(name.as_ref())?;
        sys::remove(&path, &name, self.follows())
    }

    /// 属性是否存在
    ///
    /// 只做长度查询，不读取数据
    pub fn contains(&self, path: impl AsRef<Path>, name: impl AsRef<OsStr>) -> Result<bool> {
        let path = sys::path_to_cstring(path.as_ref())?;
        let name = sys::name_to_cstring(name.as_ref())?;
        match sys::get(&path, &name, &mut [], self.follows()) {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NoAttribute => Ok(false),
            Err(e) => Err(e),
        }
    }
}

/// 列出所有扩展属性（不跟随符号链接）
pub fn list(path: impl AsRef<Path>) -> Result<Vec<OsString>> {
    XattrStore::new().list(path)
}

/// 获取扩展属性值（不跟随符号链接）
pub fn get(path: impl AsRef<Path>, name: impl AsRef<OsStr>) -> Result<Vec<u8>> {
    XattrStore::new().get(path, name)
}

/// 设置扩展属性（不跟随符号链接）
pub fn set(path: impl AsRef<Path>, name: impl AsRef<OsStr>, value: &[u8]) -> Result<()> {
    XattrStore::new().set(path, name, value)
}

/// 删除扩展属性（不跟随符号链接）
pub fn remove(path: impl AsRef<Path>, name: impl AsRef<OsStr>) -> Result<()> {
    XattrStore::new().remove(path, name)
}
