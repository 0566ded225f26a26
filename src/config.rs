//! Display config tables: the active path table and its parallel mode table.

use crate::display::{LegacyMode, ModeEntry, PathEntry, RefreshRate, SourceMode, is_same_display};
use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Entry counts reported by the buffer size probe.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BufferSizes {
    /// Number of path entries.
    pub paths: u32,
    /// Number of mode entries.
    pub modes: u32,
}

/// A plain path entry, independent of any platform layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConfigPath {
    /// Index of the source mode in the mode table.
    pub source_mode_index: u32,
    /// Whether the path is active.
    pub active: bool,
    /// Target refresh rate.
    pub refresh_rate: RefreshRate,
}

impl ConfigPath {
    /// An active path.
    pub const fn active(source_mode_index: u32, refresh_rate: RefreshRate) -> Self {
        Self {
            source_mode_index,
            active: true,
            refresh_rate,
        }
    }

    /// An inactive path.
    pub const fn inactive(source_mode_index: u32, refresh_rate: RefreshRate) -> Self {
        Self {
            source_mode_index,
            active: false,
            refresh_rate,
        }
    }
}

impl PathEntry for ConfigPath {
    fn source_mode_index(&self) -> usize {
        self.source_mode_index as usize
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn target_refresh_rate(&self) -> RefreshRate {
        self.refresh_rate
    }
}

/// A plain mode entry, independent of any platform layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ConfigMode {
    /// Source surface geometry.
    Source(SourceMode),
    /// Target or desktop image entry; carries no source geometry.
    #[default]
    Other,
}

impl ModeEntry for ConfigMode {
    fn source_mode(&self) -> Option<SourceMode> {
        match self {
            ConfigMode::Source(source) => Some(*source),
            ConfigMode::Other => None,
        }
    }
}

/// Allocate a table of `len` default entries, reporting allocation failure
/// instead of aborting.
pub fn allocate_table<T: Default + Clone>(table: &'static str, len: u32) -> Result<Vec<T>> {
    let mut entries = Vec::new();
    entries
        .try_reserve_exact(len as usize)
        .map_err(|_| Error::AllocationFailed { table, len })?;
    entries.resize(len as usize, T::default());
    Ok(entries)
}

/// The path and mode tables for a single query.
///
/// Both tables are owned here and released together when this value drops,
/// whichever way the query exits.
#[derive(Debug)]
pub struct ConfigTables<P, M> {
    paths: Vec<P>,
    modes: Vec<M>,
}

impl<P: PathEntry, M: ModeEntry> ConfigTables<P, M> {
    /// Take ownership of two allocated tables.
    pub fn new(paths: Vec<P>, modes: Vec<M>) -> Self {
        Self { paths, modes }
    }

    /// Path entries.
    pub fn paths(&self) -> &[P] {
        &self.paths
    }

    /// Mode entries.
    pub fn modes(&self) -> &[M] {
        &self.modes
    }

    /// Both tables, for a backend to fill in place.
    pub fn tables_mut(&mut self) -> (&mut [P], &mut [M]) {
        (&mut self.paths, &mut self.modes)
    }

    /// Drop entries past the counts the populate query reported back.
    pub fn truncate(&mut self, paths: usize, modes: usize) {
        self.paths.truncate(paths);
        self.modes.truncate(modes);
    }

    /// Source geometry for `path`, if its mode index points at a source entry.
    pub fn source_mode(&self, path: &P) -> Option<SourceMode> {
        self.modes
            .get(path.source_mode_index())
            .and_then(|mode| mode.source_mode())
    }

    /// The first path, in table order, that is the same display as `mode`.
    pub fn find_match(&self, mode: &LegacyMode) -> Option<(usize, &P)> {
        self.paths.iter().enumerate().find(|(_, path)| {
            let source = self.source_mode(path);
            is_same_display(mode, *path, source.as_ref())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::{Position, Resolution};

    fn source(x: i32, y: i32, width: u32, height: u32) -> ConfigMode {
        ConfigMode::Source(SourceMode {
            position: Position::new(x, y),
            resolution: Resolution::new(width, height),
        })
    }

    fn legacy(x: i32, y: i32, width: u32, height: u32) -> LegacyMode {
        LegacyMode {
            device_name: r"\\.\DISPLAY1".into(),
            position: Position::new(x, y),
            resolution: Resolution::new(width, height),
        }
    }

    #[test]
    fn test_allocate_table() {
        let paths: Vec<ConfigPath> = allocate_table("path", 3).unwrap();
        assert_eq!(paths.len(), 3);
        assert!(paths.iter().all(|path| *path == ConfigPath::default()));

        let modes: Vec<ConfigMode> = allocate_table("mode", 0).unwrap();
        assert!(modes.is_empty());
    }

    #[test]
    fn test_source_mode_lookup() {
        let tables = ConfigTables::new(
            vec![
                ConfigPath::active(1, RefreshRate::new(60, 1)),
                ConfigPath::active(0, RefreshRate::new(60, 1)),
                ConfigPath::active(7, RefreshRate::new(60, 1)),
            ],
            vec![ConfigMode::Other, source(0, 0, 1920, 1080)],
        );

        assert_eq!(
            tables.source_mode(&tables.paths()[0]),
            source(0, 0, 1920, 1080).source_mode()
        );
        // points at a target entry
        assert_eq!(tables.source_mode(&tables.paths()[1]), None);
        // out of range
        assert_eq!(tables.source_mode(&tables.paths()[2]), None);
    }

    #[test]
    fn test_find_match_first_wins() {
        let tables = ConfigTables::new(
            vec![
                ConfigPath::active(0, RefreshRate::new(60, 1)),
                ConfigPath::active(1, RefreshRate::new(144, 1)),
                ConfigPath::active(1, RefreshRate::new(120, 1)),
            ],
            vec![source(0, 0, 1920, 1080), source(1920, 0, 2560, 1440)],
        );

        let (index, path) = tables.find_match(&legacy(1920, 0, 2560, 1440)).unwrap();
        assert_eq!(index, 1);
        assert_eq!(path.refresh_rate, RefreshRate::new(144, 1));

        assert!(tables.find_match(&legacy(0, 0, 1280, 720)).is_none());
    }

    #[test]
    fn test_truncate() {
        let mut tables = ConfigTables::new(
            vec![ConfigPath::default(); 4],
            vec![ConfigMode::default(); 8],
        );
        tables.truncate(2, 3);
        assert_eq!(tables.paths().len(), 2);
        assert_eq!(tables.modes().len(), 3);

        // never grows
        tables.truncate(10, 10);
        assert_eq!(tables.paths().len(), 2);
        assert_eq!(tables.modes().len(), 3);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialize_entries() {
        let path = ConfigPath::active(2, RefreshRate::new(60000, 1001));
        let json = serde_json::to_string(&path).unwrap();
        let back: ConfigPath = serde_json::from_str(&json).unwrap();
        assert_eq!(back, path);

        let mode = source(-1920, 0, 1920, 1080);
        let json = serde_json::to_string(&mode).unwrap();
        let back: ConfigMode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mode);
    }
}
