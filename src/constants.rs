/// Constants used throughout filebayes
/// This module centralizes extension tables and archive layout conventions

/// Extensions read as plain text (lossy UTF-8)
pub const TEXT_EXTENSIONS: &[&str] = &[
    "txt", "text", "md", "markdown", "rst", "csv", "tsv", "json", "xml", "html", "htm", "css",
    "js", "ts", "rs", "py", "java", "c", "cpp", "h", "hpp", "go", "rb", "php", "sh", "bash",
    "yaml", "yml", "toml", "ini", "cfg", "conf", "log", "tex", "sql",
];

/// Word-processor family: legacy and OOXML variants share the canonical token
pub const WORD_EXTENSIONS: &[&str] = &["doc", "docx", "docm", "dot", "dotx", "dotm"];

/// Spreadsheet family
pub const SPREADSHEET_EXTENSIONS: &[&str] = &["xls", "xlsx", "xlsm", "xlsb", "xlt", "xltx", "xltm"];

/// Presentation family
pub const PRESENTATION_EXTENSIONS: &[&str] = &[
    "ppt", "pptx", "pptm", "pot", "potx", "potm", "pps", "ppsx", "ppsm",
];

/// Canonical tokens appended to file-name tokens for each office family
pub const WORD_FAMILY_TOKEN: &str = "doc";
pub const SPREADSHEET_FAMILY_TOKEN: &str = "xls";
pub const PRESENTATION_FAMILY_TOKEN: &str = "ppt";

/// Zip-based (OOXML) members of the office families
pub const OOXML_WORD_EXTENSIONS: &[&str] = &["docx", "docm", "dotx", "dotm"];
pub const OOXML_SPREADSHEET_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xltx", "xltm"];
pub const OOXML_PRESENTATION_EXTENSIONS: &[&str] = &["pptx", "pptm", "potx", "potm", "ppsx", "ppsm"];

/// Internal part paths inside OOXML packages
pub const WORD_DOCUMENT_PART: &str = "word/document.xml";
pub const SLIDE_PART_PREFIX: &str = "ppt/slides/slide";
pub const SHARED_STRINGS_PART: &str = "xl/sharedStrings.xml";
pub const WORKSHEET_PART_PREFIX: &str = "xl/worksheets/sheet";

/// Upper bound on bytes read from a single archive part
pub const MAX_PART_BYTES: u64 = 32 * 1024 * 1024;

/// Minimum share (percent) of printable bytes for unknown files to be decoded
pub const PRINTABLE_THRESHOLD_PERCENT: usize = 80;

/// Directories never used as training labels
pub const PROTECTED_DIR_PATTERNS: &[&str] = &[
    ".git",
    ".hg",
    ".svn",
    ".bzr",
    "CVS",
    "node_modules",
    "target",
    "__pycache__",
    ".venv",
    "venv",
    ".tox",
    ".mypy_cache",
    ".pytest_cache",
];

/// Tag written in every persisted model envelope
pub const MODEL_FORMAT: &str = "filebayes-model";

/// Current persisted model version
pub const MODEL_VERSION: u32 = 1;
