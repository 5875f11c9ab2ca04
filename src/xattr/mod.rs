//! 扩展属性 (Extended Attributes) 访问
//!
//! 这个模块通过操作系统的 `*xattr` 系统调用读写文件、目录和符号链接上的扩展属性。
//!
//! # 扩展属性概述
//!
//! 扩展属性（xattr）以 name-value 对的形式附加在 inode 上，支持多个命名空间：
//! - **user.** - 用户自定义属性
//! - **system.** - 系统属性（如 ACL）
//! - **security.** - 安全标签（如 SELinux）
//! - **trusted.** - 可信属性
//!
//! # 模块结构
//!
//! - `sys` - 系统调用调用点，失败时立即保存 errno
//! - `buffer` - 两阶段（probe/fill）读取
//! - `names` - NUL 分隔名称列表解析
//! - `prefix` - 命名空间分类
//! - `api` - [`XattrStore`] 与模块级函数
//!
//! # 使用示例
//!
//! ```rust,no_run
//! use xattr_core::xattr;
//!
//! // 设置属性
//! xattr::set("/tmp/f", "user.author", b"Alice")?;
//!
//! // 获取属性值
//! let value = xattr::get("/tmp/f", "user.author")?;
//!
//! // 列出所有扩展属性
//! for name in xattr::list("/tmp/f")? {
//!     println!("{}", name.to_string_lossy());
//! }
//!
//! // 删除属性
//! xattr::remove("/tmp/f", "user.author")?;
//! # Ok::<(), xattr_core::Error>(())
//! ```

mod api;
mod buffer;
mod names;
mod prefix;
mod sys;

pub use api::{get, list, remove, set, XattrStore};
pub use names::parse_name_list;
pub use prefix::Namespace;
