//! Domain constants: file extensions, table names, markers.

/// Tabular test data file extension
pub const ROBOT_EXT: &str = "robot";

/// Resource file extension
pub const RESOURCE_EXT: &str = "resource";

/// Legacy plain-text test data extension
pub const TXT_EXT: &str = "txt";

/// Host-language keyword library extension
pub const PYTHON_EXT: &str = "py";

/// Extensions parsed with the tabular parser
pub const TABULAR_EXTENSIONS: &[&str] = &[ROBOT_EXT, RESOURCE_EXT, TXT_EXT];

/// Library definition extension
pub const LIBRARY_EXT: &str = "json";

/// Every extension the workspace accepts
pub const SUPPORTED_EXTENSIONS: &[&str] = &[ROBOT_EXT, RESOURCE_EXT, TXT_EXT, PYTHON_EXT];

/// Cell that marks a row as continuing the previous statement
pub const CONTINUATION_MARKER: &str = "...";

/// Separator token for the multi-keyword runner
pub const AND_SEPARATOR: &str = "AND";

/// Character that starts a table header
pub const TABLE_HEADER_CHAR: char = '*';

/// Character that starts an inline comment
pub const COMMENT_CHAR: char = '#';

/// Escape character that cancels a following comment character
pub const ESCAPE_CHAR: char = '\\';

/// Accepted spellings for the settings table
pub const SETTINGS_TABLE_NAMES: &[&str] = &["setting", "settings"];

/// Accepted spellings for the variables table
pub const VARIABLES_TABLE_NAMES: &[&str] = &["variable", "variables"];

/// Accepted spellings for the keywords table
pub const KEYWORDS_TABLE_NAMES: &[&str] = &["keyword", "keywords", "user keyword", "user keywords"];

/// Accepted spellings for the test cases table
pub const TEST_CASES_TABLE_NAMES: &[&str] =
    &["test case", "test cases", "testcase", "testcases", "task", "tasks"];
