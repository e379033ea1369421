use crate::config::settings::Settings;
use crate::core::codec::PayloadFormat;
use crate::core::concat::ConcatPolicy;
use crate::domain::model::ParseErrorPolicy;

/// The two published datasets this tool knows how to download.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dataset {
    /// Jeff Sackmann's ATP match results, one CSV per season.
    AtpMatches,
    /// tennis-data.co.uk match results with bookmaker odds, one workbook per season.
    BettingOdds,
}

impl Dataset {
    pub fn label(&self) -> &'static str {
        match self {
            Dataset::AtpMatches => "ATP match",
            Dataset::BettingOdds => "betting odds",
        }
    }

    pub fn url(&self, base_url: &str, year: u32) -> String {
        let base = base_url.trim_end_matches('/');
        match self {
            Dataset::AtpMatches => format!("{}/atp_matches_{}.csv", base, year),
            Dataset::BettingOdds => format!("{}/{}/{}.xlsx", base, year, year),
        }
    }

    pub fn base_url<'a>(&self, settings: &'a Settings) -> &'a str {
        match self {
            Dataset::AtpMatches => &settings.sources.atp_matches_base_url,
            Dataset::BettingOdds => &settings.sources.betting_odds_base_url,
        }
    }

    pub fn payload_format(&self) -> PayloadFormat {
        match self {
            Dataset::AtpMatches => PayloadFormat::Csv,
            Dataset::BettingOdds => PayloadFormat::Xlsx,
        }
    }

    // 賠率檔案格式逐年不同，解析失敗只略過該年份
    pub fn parse_error_policy(&self) -> ParseErrorPolicy {
        match self {
            Dataset::AtpMatches => ParseErrorPolicy::Fatal,
            Dataset::BettingOdds => ParseErrorPolicy::Skip,
        }
    }

    pub fn concat_policy(&self) -> ConcatPolicy {
        match self {
            Dataset::AtpMatches => ConcatPolicy::Strict,
            Dataset::BettingOdds => ConcatPolicy::Relaxed,
        }
    }

    pub fn default_file_name(&self) -> &'static str {
        match self {
            Dataset::AtpMatches => "atp_matches_raw.csv",
            Dataset::BettingOdds => "betting_odds_raw.csv",
        }
    }
}
