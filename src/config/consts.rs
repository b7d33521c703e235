// src/config/consts.rs

// Results page
pub const RESULTS_TABLE_CLASS: &str = "tabela-resultado";

// Net config
pub const MAX_ATTEMPTS: u32 = 5;
pub const TIMEOUT_SECS: u64 = 14;
pub const USER_AGENT: &str = "loto_scrape/0.1";

// Export
pub const DEFAULT_OUT_DIR: &str = "output";
pub const HTML_SUBDIR: &str = "html";
pub const CSV_SUBDIR: &str = "csv";
pub const RESULTS_FILE_PREFIX: &str = "resultados_";
