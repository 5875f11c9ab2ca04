//! xattr_core: 文件系统扩展属性访问
//!
//! 这是操作系统 `*xattr` 系统调用之上的一层薄封装，旨在提供：
//! - **无状态**的 set / get / list / remove 操作
//! - **安全的缓冲区管理**：两阶段读取，所有路径上自动释放缓冲区
//! - **准确的错误码**：在失败的系统调用点立即保存 errno
//! - **可选的符号链接跟随**（默认不跟随）
//!
//! # 示例
//!
//! ```rust,no_run
//! use xattr_core::{XattrStore, ErrorKind, Result};
//!
//! fn main() -> Result<()> {
//!     let store = XattrStore::new();
//!
//!     store.set("/tmp/f", "user.tag", b"hello")?;
//!     assert_eq!(store.get("/tmp/f", "user.tag")?, b"hello");
//!
//!     store.remove("/tmp/f", "user.tag")?;
//!     let err = store.get("/tmp/f", "user.tag").unwrap_err();
//!     assert_eq!(err.kind(), ErrorKind::NoAttribute);
//!
//!     Ok(())
//! }
//! ```
//!
//! # 模块结构
//!
//! - [`error`] - 错误类型定义
//! - [`consts`] - 常量定义
//! - [`types`] - 配置与标志
//! - [`xattr`] - 扩展属性操作

#![deny(unsafe_op_in_unsafe_fn)]
#![warn(missing_docs)]

#[cfg(not(any(target_os = "linux", target_os = "android", target_os = "macos")))]
compile_error!("xattr_core supports the Linux and macOS *xattr system calls only");

// ===== 核心模块 =====

/// 错误处理
pub mod error;

/// 常量定义
pub mod consts;

/// 配置与标志
pub mod types;

/// Extended Attributes (xattr)
pub mod xattr;

// ===== 公共导出 =====

// 错误处理
pub use error::{Error, ErrorKind, Result};

// 配置
pub use types::{SetFlags, SymlinkPolicy, XattrConfig};

// Xattr
pub use xattr::{
    get as xattr_get, list as xattr_list, remove as xattr_remove, set as xattr_set, Namespace,
    XattrStore,
};
