use serde::Serialize;

/// LicenseInfo value object: one resolved license of a component
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseInfo {
    spdx_id: String,
    license_url: String,
    default_url: Option<String>,
    given_license_text: Option<String>,
    score: f64,
}

impl LicenseInfo {
    pub fn new(
        spdx_id: String,
        license_url: String,
        default_url: Option<String>,
        score: f64,
    ) -> Self {
        Self {
            spdx_id,
            license_url,
            default_url,
            given_license_text: None,
            score,
        }
    }

    pub fn spdx_id(&self) -> &str {
        &self.spdx_id
    }

    /// Content reference of the license text as found in the package
    /// (`pkgcontent:` URI or web URL)
    pub fn license_url(&self) -> &str {
        &self.license_url
    }

    /// Reference text of the license in the license database
    pub fn default_url(&self) -> Option<&str> {
        self.default_url.as_deref()
    }

    pub fn given_license_text(&self) -> Option<&str> {
        self.given_license_text.as_deref()
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn set_given_license_text(&mut self, text: Option<String>) {
        self.given_license_text = text;
    }
}
