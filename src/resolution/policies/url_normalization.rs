use crate::resolution::domain::PackageUrl;

const SCANCODE_LICENSE_TREE: &str =
    "https://github.com/nexB/scancode-toolkit/tree/develop/src/licensedcode/data/licenses";
const SCANCODE_LICENSEDB: &str = "https://scancode-licensedb.aboutcode.org";

/// Knows how paths inside a scan result map to retrievable package content
///
/// Implemented by the raw scan store, which owns the on-disk layout.
pub trait ContentPathResolver {
    /// Whether the scanned path points into the extracted package content
    fn is_local_content_path(&self, package_url: &PackageUrl, path: &str) -> bool;

    /// Package-content-addressable URI for a scanned path (fragment kept)
    fn pkg_content_uri(&self, package_url: &PackageUrl, path: &str) -> String;
}

/// UrlNormalization policy turning license references into retrievable URLs
///
/// - web URLs: ScanCode's GitHub license tree is served from the license DB,
///   other GitHub URLs are rewritten to the raw-content host without `/tree`
/// - local package paths: converted by the [`ContentPathResolver`]
/// - anything else is returned unchanged
pub struct UrlNormalization;

impl UrlNormalization {
    pub fn normalize(
        package_url: &PackageUrl,
        reference: &str,
        resolver: &dyn ContentPathResolver,
    ) -> String {
        if reference.starts_with("http") {
            return Self::normalize_web_url(reference);
        }
        if resolver.is_local_content_path(package_url, reference) {
            return resolver.pkg_content_uri(package_url, reference);
        }
        reference.to_string()
    }

    fn normalize_web_url(url: &str) -> String {
        url.replace(SCANCODE_LICENSE_TREE, SCANCODE_LICENSEDB)
            .replace("github.com", "raw.github.com")
            .replace("/tree", "")
    }
}
