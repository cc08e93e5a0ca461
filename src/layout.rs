//! Page frame shared by the install, sign-in and reset-password pages.

use crate::config::Settings;
use crate::install::messages::text;

pub const PRODUCT_TITLE: &str = "Setup Console";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Install,
    SignIn,
    ResetPassword,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentFrame {
    /// Full-width card, content aligned to the start.
    Wide,
    /// Narrow centered column.
    Narrow,
}

impl ContentFrame {
    pub fn width_percent(self) -> u16 {
        match self {
            ContentFrame::Wide => 80,
            ContentFrame::Narrow => 60,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseLink {
    pub tip: String,
    pub label: String,
    pub url: String,
}

impl LicenseLink {
    pub fn display_line(&self) -> String {
        format!("{} {} ({})", self.tip, self.label, self.url)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageChrome {
    pub kind: PageKind,
    pub header: String,
    pub frame: ContentFrame,
    pub license: Option<LicenseLink>,
    pub copyright: String,
}

pub fn copyright_line(holder: &str, year: i32) -> String {
    format!("© {year} {holder} All rights reserved.")
}

pub fn current_year() -> i32 {
    use chrono::Datelike;
    chrono::Local::now().year()
}

pub fn page_chrome(kind: PageKind, settings: &Settings, year: i32) -> PageChrome {
    let frame = match kind {
        PageKind::Install => ContentFrame::Wide,
        PageKind::SignIn | PageKind::ResetPassword => ContentFrame::Narrow,
    };
    let license = (kind == PageKind::Install).then(|| LicenseLink {
        tip: text("login.license.tip").to_string(),
        label: text("login.license.link").to_string(),
        url: settings.license_url.clone(),
    });
    PageChrome {
        kind,
        header: PRODUCT_TITLE.to_string(),
        frame,
        license,
        copyright: copyright_line(&settings.copyright_holder, year),
    }
}
