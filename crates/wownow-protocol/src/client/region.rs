//! Region definitions for the version service.
//!
//! The HTTP version service listens on port 1119 at
//! `{region}.patch.battle.net`. China uses a `.com.cn` domain operated
//! separately from the global `.battle.net` infrastructure.

use std::str::FromStr;

/// Game server region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Region {
    /// United States
    #[default]
    US,
    /// Europe
    EU,
    /// Korea
    KR,
    /// Taiwan
    TW,
    /// China (uses `.com.cn` domains)
    CN,
    /// Singapore
    SG,
}

impl Region {
    /// All known regions
    pub const ALL: [Self; 6] = [Self::US, Self::EU, Self::KR, Self::TW, Self::CN, Self::SG];

    /// TACT HTTP URL for this region (port 1119).
    pub fn tact_http_url(&self) -> &'static str {
        match self {
            Self::US => "http://us.patch.battle.net:1119",
            Self::EU => "http://eu.patch.battle.net:1119",
            Self::KR => "http://kr.patch.battle.net:1119",
            Self::TW => "http://tw.patch.battle.net:1119",
            Self::CN => "http://cn.patch.battlenet.com.cn:1119",
            Self::SG => "http://sg.patch.battle.net:1119",
        }
    }

    /// Lowercase region code
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::US => "us",
            Self::EU => "eu",
            Self::KR => "kr",
            Self::TW => "tw",
            Self::CN => "cn",
            Self::SG => "sg",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|region| region.as_str() == code)
            .ok_or_else(|| format!("unknown region: {s}"))
    }
}
