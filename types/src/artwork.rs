/// Card artwork drawn in the terminal in place of a bitmap.
///
/// Catalog entries reference artwork by key. A key that doesn't resolve
/// renders as [`Artwork::Placeholder`] instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Artwork {
    Forest,
    Ocean,
    Mountain,
    Night,
    Sunrise,
    Rain,
    Placeholder,
}

impl Artwork {
    #[must_use]
    pub fn resolve(image: &str) -> Self {
        let key = image.trim();
        let key = key.strip_prefix("art:").unwrap_or(key);
        match key.to_ascii_lowercase().as_str() {
            "forest" => Artwork::Forest,
            "ocean" => Artwork::Ocean,
            "mountain" => Artwork::Mountain,
            "night" => Artwork::Night,
            "sunrise" => Artwork::Sunrise,
            "rain" => Artwork::Rain,
            _ => Artwork::Placeholder,
        }
    }

    #[must_use]
    pub const fn is_placeholder(self) -> bool {
        matches!(self, Artwork::Placeholder)
    }
}
