// Route path constants - single source of truth for all API paths

pub const HEALTH: &str = "/health";
pub const KV_SET: &str = "/kv/set/{*key}";
pub const KV_GET: &str = "/kv/get/{*key}";
pub const KV_LIST_ALL: &str = "/kv/list";
pub const KV_LIST: &str = "/kv/list/{*key}";
pub const KV_DELETE: &str = "/kv/delete/{*key}";
pub const KV_DELETE_PREFIX: &str = "/kv/delete_prefix/{*key}";
pub const KV_FULL_RESET: &str = "/kv/full_reset_42";
pub const DUMP: &str = "/dump/{*rest}";
