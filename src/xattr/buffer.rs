//! 两阶段读取（probe/fill）
//!
//! 内核不直接提供属性长度，读取属性值或名称列表都需要两次调用：
//!
//! 1. **probe**：以空缓冲区调用，得到当前长度
//! 2. **fill**：分配恰好该长度的缓冲区，再次调用读取数据
//!
//! 两次调用之间属性可能被其他进程修改：
//! - 变短：fill 返回的字节数小于 probe 长度，以 fill 的结果为准截断
//! - 变长：fill 以 `ERANGE` 失败，直接返回错误
//! - 被删除：fill 以 `ENODATA` 失败，直接返回错误
//!
//! 缓冲区是函数内的 `Vec<u8>`，任何返回路径上都随作用域释放。

use crate::error::Result;

/// 以 probe/fill 协议读取一段变长数据
///
/// `call` 对空切片执行 probe，对非空切片执行 fill，返回内核报告的字节数。
pub(crate) fn read_sized<F>(mut call: F) -> Result<Vec<u8>>
where
    F: FnMut(&mut [u8]) -> Result<usize>,
{
    let probed = call(&mut [])?;
    if probed == 0 {
        return Ok(Vec::new());
    }

    let mut buf = vec![0u8; probed];
    let filled = call(&mut buf)?;

    if filled != probed {
        log::debug!("[XATTR] size changed between probe and fill: probed={} filled={}", probed, filled);
        buf.truncate(filled);
        buf.shrink_to_fit();
    }

    Ok(buf)
}
