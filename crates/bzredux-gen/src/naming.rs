//! Output file naming for derived maps.

use std::fmt;

/// Kind of derived map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapKind {
    Emissive,
    Specular,
    Normal,
}

impl MapKind {
    /// All kinds in generation order.
    pub const ALL: [MapKind; 3] = [MapKind::Emissive, MapKind::Specular, MapKind::Normal];

    /// Suffix appended to the texture stem.
    pub fn suffix(self) -> &'static str {
        match self {
            MapKind::Emissive => "_e",
            MapKind::Specular => "_s",
            MapKind::Normal => "_n",
        }
    }
}

impl fmt::Display for MapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MapKind::Emissive => "emissive",
            MapKind::Specular => "specular",
            MapKind::Normal => "normal",
        };
        f.write_str(name)
    }
}

/// File stem for a derived map of `stem`.
///
/// A trailing diffuse marker (`_d` or `_D`) is replaced by the kind's suffix,
/// so `rock_d` becomes `rock_n`.
pub fn derived_stem(stem: &str, kind: MapKind) -> String {
    let base = stem
        .strip_suffix("_d")
        .or_else(|| stem.strip_suffix("_D"))
        .unwrap_or(stem);
    format!("{}{}", base, kind.suffix())
}
