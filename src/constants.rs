/// Source name constants to ensure consistency across the codebase

// User-facing source names (used in CLI and config)
pub const STEAM_SOURCE: &str = "steam";
pub const PSN_SOURCE: &str = "psn";
pub const XBL_SOURCE: &str = "xbl";

// Default hosts, overridable through config.toml
pub const STEAM_DEFAULT_HOST: &str = "steamcommunity.com";
pub const PSN_DEFAULT_HOST: &str = "us.playstation.com";
pub const XBL_DEFAULT_HOST: &str = "www.xboxgamertag.com";

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const DEFAULT_USER_AGENT: &str = "Mozilla";

pub const HTTP_OK: u16 = 200;

// Steam embeds the owned-games array in an inline script under this variable
pub const STEAM_GAMES_MARKER: &str = "rgGames";
pub const STEAM_SCRIPT_SELECTOR: &str = "script";

pub const PSN_TITLE_SECTION_SELECTOR: &str = ".titlesection";
pub const PSN_TITLE_SELECTOR: &str = ".gameTitleSortField";

pub const XBL_ROW_SELECTOR: &str = "#recentGamesTable tr";
pub const XBL_TITLE_SELECTOR: &str = ".gameName a";

pub const PSN_ACCEPT_CHARSET: &str = "ISO-8859-1,utf-8;q=0.7,*;q=0.3";
