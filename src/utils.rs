use crate::constants::PROTECTED_DIR_PATTERNS;
use std::path::Path;

/// Compute Blake3 hash of a byte buffer as a hex string
pub fn hash_bytes(bytes: &[u8]) -> String {
    blake3::hash(bytes).to_hex().to_string()
}

/// Get file extension from path (without the dot)
pub fn get_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|s| s.to_lowercase())
}

/// Get file extension from a bare file name (without the dot)
pub fn extension_of_name(name: &str) -> Option<String> {
    get_extension(Path::new(name))
}

/// Whether a directory name should be left out of training
pub fn is_protected_dir_name(name: &str) -> bool {
    PROTECTED_DIR_PATTERNS.contains(&name)
}

/// Whether a path component is hidden (dot-prefixed)
pub fn is_hidden_name(name: &str) -> bool {
    name.starts_with('.') && name != "." && name != ".."
}

/// Share of printable ASCII / whitespace bytes, in percent
pub fn printable_percent(bytes: &[u8]) -> usize {
    if bytes.is_empty() {
        return 100;
    }
    let printable = bytes
        .iter()
        .filter(|&&b| (32..=126).contains(&b) || b == 9 || b == 10 || b == 13)
        .count();
    printable * 100 / bytes.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_bytes_consistent() {
        let hash1 = hash_bytes(b"same content");
        let hash2 = hash_bytes(b"same content");
        assert_eq!(hash1, hash2);
        assert_eq!(hash1.len(), 64); // Blake3 hex string length
    }

    #[test]
    fn test_hash_bytes_different_content() {
        assert_ne!(hash_bytes(b"content one"), hash_bytes(b"content two"));
    }

    #[test]
    fn test_get_extension_lowercase() {
        let path = Path::new("/path/to/file.TXT");
        assert_eq!(get_extension(path), Some("txt".to_string()));
    }

    #[test]
    fn test_get_extension_no_extension() {
        let path = Path::new("/path/to/file");
        assert_eq!(get_extension(path), None);
    }

    #[test]
    fn test_get_extension_multiple_dots() {
        let path = Path::new("/path/to/file.tar.gz");
        assert_eq!(get_extension(path), Some("gz".to_string()));
    }

    #[test]
    fn test_extension_of_name() {
        assert_eq!(extension_of_name("Report.DOCX"), Some("docx".to_string()));
        assert_eq!(extension_of_name(".bashrc"), None);
    }

    #[test]
    fn test_protected_and_hidden() {
        assert!(is_protected_dir_name(".git"));
        assert!(is_protected_dir_name("node_modules"));
        assert!(!is_protected_dir_name("docs"));
        assert!(is_hidden_name(".cache"));
        assert!(!is_hidden_name("cache"));
    }

    #[test]
    fn test_printable_percent() {
        assert_eq!(printable_percent(b"hello"), 100);
        assert_eq!(printable_percent(&[0, 0, b'a', b'b']), 50);
        assert_eq!(printable_percent(&[]), 100);
    }
}
