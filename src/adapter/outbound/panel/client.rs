//! Panel HTTP client.
//!
//! Every report is one fresh session: a new cookie jar, a login, a token
//! read, then one POST per site issued concurrently. Nothing is kept
//! between reports.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use futures_util::future::join_all;
use reqwest::Client as HttpClient;
use tracing::{debug, info, warn};

use super::dto::{QuickReportRequest, QuickReportResponse};
use super::token;
use crate::domain::{Report, Site, SiteRegistry, SiteTotals};
use crate::error::{PanelError, Result};
use crate::infrastructure::config::panel::{PanelConfig, PanelCredentials};
use crate::port::outbound::panel::PanelSource;

/// Header carrying the API CSRF token.
const CSRF_HEADER: &str = "X-CSRF-TOKEN";

/// Scraper for the panel's quick report.
pub struct PanelClient {
    config: PanelConfig,
    credentials: PanelCredentials,
    sites: SiteRegistry,
}

impl PanelClient {
    #[must_use]
    pub fn new(config: PanelConfig, credentials: PanelCredentials, sites: SiteRegistry) -> Self {
        Self {
            config,
            credentials,
            sites,
        }
    }

    /// Today's date in the panel's time zone.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        Utc::now()
            .with_timezone(&self.config.utc_offset())
            .date_naive()
    }

    fn session(&self) -> Result<HttpClient> {
        let http = HttpClient::builder()
            .cookie_store(true)
            .danger_accept_invalid_certs(self.config.accept_invalid_certs)
            .timeout(Duration::from_millis(self.config.timeout_ms))
            .connect_timeout(Duration::from_millis(self.config.connect_timeout_ms))
            .build()?;
        Ok(http)
    }

    /// Submit the login form, carrying the form's CSRF token.
    async fn login(&self, http: &HttpClient) -> Result<()> {
        let login_url = self.config.login_url();

        let page = http.get(&login_url).send().await?.text().await?;
        let form_token = token::login_token(&page).unwrap_or_else(|| {
            warn!("Login form token not found, submitting without it");
            String::new()
        });

        let response = http
            .post(&login_url)
            .form(&[
                ("_token", form_token.as_str()),
                ("email", self.credentials.username.as_str()),
                ("password", self.credentials.password.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PanelError::LoginRejected {
                status: status.as_u16(),
            }
            .into());
        }

        debug!(status = status.as_u16(), "Login form submitted");
        Ok(())
    }

    /// Open the report page and read the API CSRF token from it.
    async fn api_token(&self, http: &HttpClient) -> Result<String> {
        let response = http.get(self.config.report_url()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PanelError::ReportPage {
                status: status.as_u16(),
            }
            .into());
        }
        // A rejected login lands back on the login form.
        if response.url().path().trim_end_matches('/').ends_with("/login") {
            return Err(PanelError::NotAuthenticated.into());
        }

        let page = response.text().await?;
        Ok(token::api_token(&page).unwrap_or_else(|| {
            warn!("API CSRF token not found on report page");
            String::new()
        }))
    }

    async fn fetch_site(
        http: &HttpClient,
        report_url: &str,
        api_token: &str,
        site: &Site,
        date: &str,
    ) -> Result<SiteTotals> {
        let response = http
            .post(report_url)
            .header(CSRF_HEADER, api_token)
            .json(&QuickReportRequest::for_day(site.id.as_str(), date))
            .send()
            .await?
            .error_for_status()?;

        let body: QuickReportResponse = response.json().await?;
        Ok(body.into_totals(&site.name)?)
    }

    /// Fetch the report for a specific day.
    ///
    /// Login and token failures fail the whole report; a failing site is
    /// logged and reported as zeros.
    ///
    /// # Errors
    ///
    /// Returns an error when the session cannot be established.
    pub async fn fetch_report_for(&self, date: NaiveDate) -> Result<Report> {
        let http = self.session()?;
        self.login(&http).await?;
        let api_token = self.api_token(&http).await?;

        let report_url = self.config.report_url();
        let day = date.format("%Y-%m-%d").to_string();

        info!(sites = self.sites.len(), date = %day, "Fetching panel report");

        let results = join_all(self.sites.iter().map(|site| {
            let http = &http;
            let report_url = report_url.as_str();
            let api_token = api_token.as_str();
            let day = day.as_str();
            async move {
                (
                    site,
                    Self::fetch_site(http, report_url, api_token, site, day).await,
                )
            }
        }))
        .await;

        let mut report = Report::new(date);
        for (site, result) in results {
            match result {
                Ok(totals) => {
                    debug!(site = %site.name, "Site totals fetched");
                    report.push(site.name.clone(), totals);
                }
                Err(e) => {
                    warn!(site = %site.name, error = %e, "Site fetch failed, reporting zeros");
                    report.push_failed(site.name.clone());
                }
            }
        }

        info!(
            sites = report.len(),
            failed = report.failed_count(),
            "Panel report ready"
        );
        Ok(report)
    }
}

#[async_trait]
impl PanelSource for PanelClient {
    async fn fetch_report(&self) -> Result<Report> {
        self.fetch_report_for(self.today()).await
    }
}
