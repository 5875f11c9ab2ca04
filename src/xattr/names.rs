//! 属性名列表解析
//!
//! listxattr 的输出格式：每个名称后跟一个 NUL 字节，例如
//!
//! ```text
//! user.comment\0security.selinux\0
//! ```

use std::ffi::OsString;
use std::os::unix::ffi::OsStrExt;

/// 将 NUL 分隔的名称缓冲区解析为名称列表
///
/// 保持内核给出的顺序。结尾的 NUL 不会产生空名称；
/// 缓冲区缺少结尾 NUL 时最后一段仍作为名称返回。
///
/// # 示例
///
/// ```
/// use xattr_core::xattr::parse_name_list;
///
/// let names = parse_name_list(b"user.a\0user.b\0");
/// assert_eq!(names, ["user.a", "user.b"]);
/// ```
pub fn parse_name_list(buf: &[u8]) -> Vec<OsString> {
    let body = buf.strip_suffix(&[0]).unwrap_or(buf);
    if body.is_empty() {
        return Vec::new();
    }

    body.split(|&b| b == 0)
        .filter(|name| !name.is_empty())
        .map(|name| std::ffi::OsStr::from_bytes(name).to_os_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_buffer() {
        assert!(parse_name_list(b"").is_empty());
    }

    #[test]
    fn test_trailing_terminator_dropped() {
        let names = parse_name_list(b"user.tag\0");
        assert_eq!(names, vec![OsString::from("user.tag")]);
    }

    #[test]
    fn test_order_preserved() {
        let names = parse_name_list(b"user.z\0security.selinux\0user.a\0");
        assert_eq!(names, ["user.z", "security.selinux", "user.a"]);
    }

    #[test]
    fn test_missing_terminator() {
        let names = parse_name_list(b"user.a\0user.b");
        assert_eq!(names, ["user.a", "user.b"]);
    }

    #[test]
    fn test_non_utf8_name() {
        let names = parse_name_list(b"user.\xff\xfe\0");
        assert_eq!(names.len(), 1);
        assert_eq!(names[0].as_bytes(), b"user.\xff\xfe");
    }
}
