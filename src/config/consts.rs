// src/config/consts.rs

// Net config
pub const DEFAULT_URL: &str = "https://en.wikipedia.org/wiki/COVID-19_pandemic_deaths";
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;
pub const USER_AGENT: &str = concat!("wiki_scrape/", env!("CARGO_PKG_VERSION"));

// Extraction
pub const TABLE_MARKER_CLASS: &str = "sticky-table-scroll";
pub const INDEX_LABEL: &str = "Index";
pub const HEADING_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

// Export
pub const DEFAULT_OUT_DIR: &str = ".";
pub const PARAGRAPHS_FILE: &str = "paragraphs.csv";
pub const HEADERS_FILE: &str = "headers.csv";
pub const PARAGRAPH_COLUMNS: [&str; 2] = [INDEX_LABEL, "Paragraph"];
pub const HEADER_COLUMNS: [&str; 2] = [INDEX_LABEL, "Header"];
pub const CSV_SEP: char = ',';
pub const CSV_EXT: &str = "csv";
