//! The statistics store: every profile's records, plus the cached values of
//! the active one.

use std::fs;
use std::io;
use std::path::Path;

use log::{error, info, warn};
use serde::{Deserialize, Serialize};

use super::record::{MoveRecord, StatEntry, WinLossRecord, RECORD_SIZE};
use crate::core::{Config, StatsError};

/// Aggregate numbers for the active profile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub wins: u32,
    pub losses: u32,
    pub moving_average: f32,
}

impl StatsSnapshot {
    /// Games that ended in a recorded result.
    #[must_use]
    pub fn games(&self) -> u32 {
        self.wins + self.losses
    }

    /// Share of recorded games won, 0 when none were played.
    #[must_use]
    pub fn win_rate_percent(&self) -> f32 {
        match self.games() {
            0 => 0.0,
            games => self.wins as f32 * 100.0 / games as f32,
        }
    }
}

/// All records of the statistics file.
///
/// Records of other profiles are kept verbatim and written back untouched.
/// The active profile's values are cached along with the slot they came
/// from, so a save updates that slot in place.
#[derive(Clone, Debug, Default)]
pub struct Statistic {
    entries: Vec<StatEntry>,
    move_slot: Option<usize>,
    win_loss_slot: Option<usize>,
    wins: u32,
    losses: u32,
    moving_average: f32,
}

impl Statistic {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the store at `path` for `config`'s profile.
    ///
    /// A missing file is an empty store.
    pub fn load(path: impl AsRef<Path>, config: &Config) -> Result<Self, StatsError> {
        let path = path.as_ref();
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                info!("no statistics at {}, starting empty", path.display());
                return Ok(Self::new());
            }
            Err(err) => return Err(StatsError::Read(err)),
        };

        let stats = Self::from_bytes(&bytes, config)?;
        info!(
            "loaded {} statistics records from {}",
            stats.entries.len(),
            path.display()
        );
        Ok(stats)
    }

    /// Decode a store image.
    ///
    /// # Panics
    ///
    /// If two records match the same profile.
    pub fn from_bytes(bytes: &[u8], config: &Config) -> Result<Self, StatsError> {
        let chunks = bytes.chunks_exact(RECORD_SIZE);
        if !chunks.remainder().is_empty() {
            warn!(
                "ignoring {} trailing bytes in statistics",
                chunks.remainder().len()
            );
        }

        let mut stats = Self::new();
        for (index, slot) in chunks.enumerate() {
            let entry = StatEntry::decode(index, slot)?;
            match entry {
                StatEntry::Move(record) if record.matches(config) => {
                    assert!(stats.move_slot.is_none(), "duplicate move record for profile");
                    stats.move_slot = Some(index);
                    stats.moving_average = record.moving_average;
                }
                StatEntry::WinLoss(record) if record.matches(config) => {
                    assert!(stats.win_loss_slot.is_none(), "duplicate win/loss record for profile");
                    stats.win_loss_slot = Some(index);
                    stats.wins = record.wins;
                    stats.losses = record.losses;
                }
                _ => {}
            }
            stats.entries.push(entry);
        }
        Ok(stats)
    }

    /// Write the cached values back into their slots, appending new slots for
    /// a profile seen for the first time, and encode every record.
    ///
    /// # Panics
    ///
    /// If `config` is not the profile the cached slots belong to.
    pub fn to_bytes(&mut self, config: &Config) -> Result<Vec<u8>, StatsError> {
        assert!(self.owns_slots(config), "statistics saved under a different profile");

        let moves = StatEntry::Move(MoveRecord {
            real_moves: config.count_real_moves,
            moving_average: self.moving_average,
        });
        self.move_slot = Some(self.put(self.move_slot, moves));

        let win_loss = StatEntry::WinLoss(WinLossRecord {
            wins: self.wins,
            losses: self.losses,
            ..WinLossRecord::for_config(config)
        });
        self.win_loss_slot = Some(self.put(self.win_loss_slot, win_loss));

        let mut bytes = Vec::with_capacity(self.entries.len() * RECORD_SIZE);
        for entry in &self.entries {
            bytes.extend_from_slice(&entry.encode()?);
        }
        Ok(bytes)
    }

    /// Persist the whole store to `path`.
    ///
    /// A failure here loses the session's results; callers should treat it
    /// as fatal.
    pub fn save(&mut self, path: impl AsRef<Path>, config: &Config) -> Result<(), StatsError> {
        let path = path.as_ref();
        let bytes = self.to_bytes(config)?;
        fs::write(path, bytes).map_err(|err| {
            error!("could not write statistics to {}: {err}", path.display());
            StatsError::Write(err)
        })?;
        info!("saved {} statistics records to {}", self.entries.len(), path.display());
        Ok(())
    }

    /// Credit a win that took `moves_used` moves.
    ///
    /// # Panics
    ///
    /// If `moves_used` is zero.
    pub fn record_win(&mut self, moves_used: u32) {
        assert!(moves_used > 0, "a win takes at least one move");
        let wins = self.wins as f32;
        self.moving_average = (self.moving_average * wins + moves_used as f32) / (wins + 1.0);
        self.wins += 1;
        info!("win recorded in {moves_used} moves, {} total", self.wins);
    }

    /// Count a loss.
    pub fn record_loss(&mut self) {
        self.losses += 1;
        info!("loss recorded, {} total", self.losses);
    }

    /// Current values for the active profile.
    #[must_use]
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            wins: self.wins,
            losses: self.losses,
            moving_average: self.moving_average,
        }
    }

    /// Every record, in file order.
    #[must_use]
    pub fn entries(&self) -> &[StatEntry] {
        &self.entries
    }

    fn owns_slots(&self, config: &Config) -> bool {
        let move_ok = self.move_slot.map_or(true, |index| {
            matches!(self.entries[index], StatEntry::Move(record) if record.matches(config))
        });
        let win_loss_ok = self.win_loss_slot.map_or(true, |index| {
            matches!(self.entries[index], StatEntry::WinLoss(record) if record.matches(config))
        });
        move_ok && win_loss_ok
    }

    fn put(&mut self, slot: Option<usize>, entry: StatEntry) -> usize {
        match slot {
            Some(index) => {
                self.entries[index] = entry;
                index
            }
            None => {
                self.entries.push(entry);
                self.entries.len() - 1
            }
        }
    }
}
