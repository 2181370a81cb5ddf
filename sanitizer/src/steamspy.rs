//! SteamSpy statistics block for a Steam store page.
//!
//! Turns the app id in a store page path into an `appdetails` lookup and
//! renders the answer as a `SafeHtml` details block. Fetching the record and
//! inserting the block into the page are left to the caller.

use crate::{safe_html, Error, Result, SafeHtml};
use serde::Deserialize;
use std::fmt::{self, Display};
use tracing::{debug, trace};

pub const API_URL: &str = "http://steamspy.com/api.php?request=appdetails&appid=";
pub const APP_URL: &str = "http://steamspy.com/app/";

/// A player or owner count. SteamSpy has served these both as plain numbers
/// and as preformatted strings such as `"1,000,000 .. 2,000,000"`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Count {
    Number(u64),
    Text(String),
}

impl Default for Count {
    fn default() -> Self {
        Count::Number(0)
    }
}

impl Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Count::Number(n) => write!(f, "{}", n),
            Count::Text(s) => f.write_str(s),
        }
    }
}

/// The `appdetails` record. Playtimes are in minutes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppDetails {
    pub appid: u64,
    pub owners: Count,
    #[serde(default)]
    pub owners_variance: Count,
    pub players_2weeks: Count,
    #[serde(default)]
    pub players_2weeks_variance: Count,
    pub players_forever: Count,
    #[serde(default)]
    pub players_forever_variance: Count,
    pub ccu: Count,
    pub average_forever: u64,
    pub average_2weeks: u64,
    pub median_forever: u64,
    pub median_2weeks: u64,
}

/// Where `appdetails` records come from.
pub trait DetailsSource {
    fn app_details(&self, app_id: &str) -> Result<AppDetails>;
}

impl<F> DetailsSource for F
where
    F: Fn(&str) -> Result<AppDetails>,
{
    fn app_details(&self, app_id: &str) -> Result<AppDetails> {
        self(app_id)
    }
}

/// `/app/667660/Photon_Rush/` -> `667660`
pub fn app_id_from_path(path: &str) -> Result<&str> {
    let segments: Vec<&str> = path.split('/').collect();
    match segments.get(2) {
        Some(id) if segments.len() > 3 && !id.is_empty() => Ok(*id),
        _ => Err(Error::InvalidStorePath(path.to_string())),
    }
}

pub fn details_url(app_id: &str) -> String {
    format!("{API_URL}{app_id}")
}

pub fn app_url(app_id: impl Display) -> String {
    format!("{APP_URL}{app_id}")
}

/// Formats a minute count as `HH:MM`, each part padded to two digits.
pub fn format_minutes(minutes: u64) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

pub fn parse_details(json: &str) -> Result<AppDetails> {
    Ok(serde_json::from_str(json)?)
}

/// Checks the status of an `appdetails` answer before parsing its body.
pub fn parse_response(status: u16, body: &str) -> Result<AppDetails> {
    if status != 200 {
        return Err(Error::Status(status));
    }
    parse_details(body)
}

pub fn render_details(p: &AppDetails) -> Result<SafeHtml> {
    trace!(appid = p.appid, "rendering details block");
    safe_html!(
        r#"<div>
   <div class="block responsive_apppage_details_left game_details underlined_links">
      <div class="block_content">
         <div class="block_content_inner">
            <div class="details_block">
               <b>Owners:</b> {} ± {}<br>
               <b>Players (2 weeks):</b> {} ± {}<br>
               <b>Players total:</b> {} ± {}<br>
               <b>Peak concurrent players yesterday:</b> {} <br>
               <b>Playtime (2 weeks):</b> {} (AVG) {} (MDN)<br>
               <b>Playtime total:</b> {} (AVG) {} (MDN)<br>
            </div>
            <div class="details_block">
               <br>
               <a class="linkbar" href="{}" rel="noopener">
               See more on steamspy
               </a>
            </div>
         </div>
      </div>
   </div>
</div>"#,
        p.owners,
        p.owners_variance,
        p.players_2weeks,
        p.players_2weeks_variance,
        p.players_forever,
        p.players_forever_variance,
        p.ccu,
        format_minutes(p.average_2weeks),
        format_minutes(p.median_2weeks),
        format_minutes(p.average_forever),
        format_minutes(p.median_forever),
        app_url(p.appid),
    )
}

/// Looks up the app behind `store_path` and renders its details block.
///
/// Best effort: any failure is logged and yields `None`, so the host page is
/// left untouched.
pub fn augment(source: &impl DetailsSource, store_path: &str) -> Option<SafeHtml> {
    match fetch_and_render(source, store_path) {
        Ok(block) => Some(block),
        Err(error) => {
            debug!(%error, store_path, "no details block rendered");
            None
        }
    }
}

fn fetch_and_render(source: &impl DetailsSource, store_path: &str) -> Result<SafeHtml> {
    let app_id = app_id_from_path(store_path)?;
    let details = source.app_details(app_id)?;
    render_details(&details)
}
