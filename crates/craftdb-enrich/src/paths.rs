//! Rewrites filesystem image paths into the public form the storefront serves.
//!
//! A discovered file such as `C:\site\public\images\dokra\owl\1.jpg` becomes
//! `/images/dokra/owl/1.jpg`: everything up to and including the first
//! segment equal to the data-root marker is replaced by the public mount.
//! Output always uses forward slashes and a single leading `/`, and a path
//! already under the mount comes back unchanged.

/// Converts between filesystem paths and public asset paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathNormalizer {
    marker: String,
    mount_segments: Vec<String>,
}

impl PathNormalizer {
    /// `marker` is a single path segment (e.g. `"images"`); `mount` is the
    /// public prefix (e.g. `"/images"`).
    #[must_use]
    pub fn new(marker: &str, mount: &str) -> Self {
        Self {
            marker: marker.to_string(),
            mount_segments: segments(mount).into_iter().map(str::to_string).collect(),
        }
    }

    #[must_use]
    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// The public mount in canonical form, e.g. `"/images"`.
    #[must_use]
    pub fn mount(&self) -> String {
        join_absolute(self.mount_segments.iter().map(String::as_str))
    }

    /// Normalize a raw path into its public form. Idempotent.
    #[must_use]
    pub fn normalize(&self, raw: &str) -> String {
        let unified = raw.replace('\\', "/");
        let parts = segments(&unified);

        if self.is_under_mount(&parts) {
            return join_absolute(parts);
        }

        if let Some(pos) = parts.iter().position(|s| *s == self.marker) {
            return self.under_mount(&parts[pos + 1..]);
        }

        match parts.last() {
            Some(file_name) => self.under_mount(&[*file_name]),
            None => self.mount(),
        }
    }

    /// Public path for a file at `relative` under the asset root
    /// (`"dokra/owl/1.jpg"` → `"/images/dokra/owl/1.jpg"`). Unlike
    /// [`normalize`](Self::normalize) this never looks for the marker, so
    /// marker-named directories inside or above the root are kept as-is.
    #[must_use]
    pub fn mount_relative(&self, relative: &str) -> String {
        let unified = relative.replace('\\', "/");
        self.under_mount(&segments(&unified))
    }

    /// Strip the mount from a public path, returning the asset-root-relative
    /// remainder (`"/images/dokra/owl/1.jpg"` → `"dokra/owl/1.jpg"`).
    ///
    /// Returns `None` when `public` is not under the mount.
    #[must_use]
    pub fn asset_relative(&self, public: &str) -> Option<String> {
        let unified = public.replace('\\', "/");
        let parts = segments(&unified);
        if !self.is_under_mount(&parts) || parts.len() == self.mount_segments.len() {
            return None;
        }
        Some(parts[self.mount_segments.len()..].join("/"))
    }

    fn is_under_mount(&self, parts: &[&str]) -> bool {
        parts.len() >= self.mount_segments.len()
            && parts
                .iter()
                .zip(&self.mount_segments)
                .all(|(part, mount)| *part == mount)
    }

    fn under_mount(&self, rest: &[&str]) -> String {
        join_absolute(
            self.mount_segments
                .iter()
                .map(String::as_str)
                .chain(rest.iter().copied()),
        )
    }
}

/// Non-empty path segments, dropping `.` components.
fn segments(path: &str) -> Vec<&str> {
    path.split('/')
        .filter(|s| !s.is_empty() && *s != ".")
        .collect()
}

fn join_absolute<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    let mut out = String::new();
    for part in parts {
        out.push('/');
        out.push_str(part);
    }
    if out.is_empty() {
        out.push('/');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> PathNormalizer {
        PathNormalizer::new("images", "/images")
    }

    #[test]
    fn rebases_absolute_unix_path_at_marker() {
        assert_eq!(
            normalizer().normalize("/home/shop/public/images/dokra/owl/1.jpg"),
            "/images/dokra/owl/1.jpg"
        );
    }

    #[test]
    fn rebases_windows_path_with_backslashes() {
        assert_eq!(
            normalizer().normalize(r"C:\site\public\images\wooden\elephant\front.png"),
            "/images/wooden/elephant/front.png"
        );
    }

    #[test]
    fn relative_path_with_marker_gains_leading_slash() {
        assert_eq!(
            normalizer().normalize("./public/images/dokra/owl/2.jpg"),
            "/images/dokra/owl/2.jpg"
        );
    }

    #[test]
    fn uses_first_marker_occurrence() {
        assert_eq!(
            normalizer().normalize("/srv/images/site/images/a.jpg"),
            "/images/site/images/a.jpg"
        );
    }

    #[test]
    fn falls_back_to_file_name_without_marker() {
        assert_eq!(
            normalizer().normalize("/tmp/uploads/owl-front.jpg"),
            "/images/owl-front.jpg"
        );
    }

    #[test]
    fn empty_input_maps_to_mount() {
        assert_eq!(normalizer().normalize(""), "/images");
    }

    #[test]
    fn normalizing_normalized_path_is_identity() {
        let n = normalizer();
        for raw in [
            "/home/shop/public/images/dokra/owl/1.jpg",
            r"C:\site\public\images\wooden\elephant\front.png",
            "/tmp/uploads/owl-front.jpg",
            "/srv/images/site/images/a.jpg",
        ] {
            let once = n.normalize(raw);
            assert_eq!(n.normalize(&once), once, "not idempotent for {raw}");
        }
    }

    #[test]
    fn distinct_mount_is_idempotent_for_nested_paths() {
        let n = PathNormalizer::new("images", "/static/assets");
        let once = n.normalize("/var/www/images/dokra/owl/1.jpg");
        assert_eq!(once, "/static/assets/dokra/owl/1.jpg");
        assert_eq!(n.normalize(&once), once);
    }

    #[test]
    fn collapses_duplicate_slashes() {
        assert_eq!(
            normalizer().normalize("/images//dokra///owl/1.jpg"),
            "/images/dokra/owl/1.jpg"
        );
    }

    #[test]
    fn asset_relative_strips_mount() {
        let n = normalizer();
        assert_eq!(
            n.asset_relative("/images/dokra/owl/1.jpg").as_deref(),
            Some("dokra/owl/1.jpg")
        );
        assert!(n.asset_relative("/uploads/dokra/owl/1.jpg").is_none());
        assert!(n.asset_relative("/images").is_none());
    }

    #[test]
    fn asset_relative_paths_are_mounted_verbatim() {
        let n = normalizer();
        assert_eq!(
            n.mount_relative("dokra/images/owl/1.jpg"),
            "/images/dokra/images/owl/1.jpg"
        );
        assert_eq!(
            n.mount_relative(r"wooden\elephant\1.png"),
            "/images/wooden/elephant/1.png"
        );
        let public = n.mount_relative("dokra/owl/1.jpg");
        assert_eq!(n.asset_relative(&public).as_deref(), Some("dokra/owl/1.jpg"));
    }

    #[test]
    fn mount_is_canonical() {
        assert_eq!(PathNormalizer::new("images", "static/assets/").mount(), "/static/assets");
    }
}
