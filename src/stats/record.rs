//! On-disk statistics records.
//!
//! Each record is a `bincode` (1.x default options) encoding of
//! [`StatEntry`], zero padded to [`RECORD_SIZE`] bytes:
//!
//! ```text
//! offset  Move record              WinLoss record
//! 0..4    tag = 0 (u32 LE)         tag = 1 (u32 LE)
//! 4       real_moves (bool)        allow_undo (bool)
//! 5       moving_average f32 LE    undo_allowance (u8)
//! 6       (5..9)                   consider_undo_wins (bool)
//! 7                                close_is_loss (bool)
//! 8..12   9..16 zero padding       wins (u32 LE)
//! 12..16                           losses (u32 LE)
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{Config, StatsError};

/// Bytes per record on disk.
pub const RECORD_SIZE: usize = 16;

/// Running average of moves per credited win, for one move-counting mode.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub real_moves: bool,
    pub moving_average: f32,
}

impl MoveRecord {
    /// Does this record belong to `config`'s profile?
    #[must_use]
    pub fn matches(&self, config: &Config) -> bool {
        self.real_moves == config.count_real_moves
    }
}

/// Win and loss tallies for one undo profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinLossRecord {
    pub allow_undo: bool,
    pub undo_allowance: u8,
    pub consider_undo_wins: bool,
    pub close_is_loss: bool,
    pub wins: u32,
    pub losses: u32,
}

impl WinLossRecord {
    /// Empty tallies carrying `config`'s profile.
    #[must_use]
    pub fn for_config(config: &Config) -> Self {
        Self {
            allow_undo: config.allow_undo,
            undo_allowance: config.undo_allowance,
            consider_undo_wins: config.consider_undo_wins,
            close_is_loss: config.close_is_loss,
            wins: 0,
            losses: 0,
        }
    }

    /// Does this record belong to `config`'s profile?
    #[must_use]
    pub fn matches(&self, config: &Config) -> bool {
        self.allow_undo == config.allow_undo
            && self.undo_allowance == config.undo_allowance
            && self.consider_undo_wins == config.consider_undo_wins
            && self.close_is_loss == config.close_is_loss
    }
}

/// One slot of the statistics file.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum StatEntry {
    Move(MoveRecord),
    WinLoss(WinLossRecord),
}

impl StatEntry {
    /// Encode into a fixed-size slot.
    pub fn encode(&self) -> Result<[u8; RECORD_SIZE], StatsError> {
        let bytes = bincode::serialize(self).map_err(StatsError::Encode)?;
        assert!(bytes.len() <= RECORD_SIZE, "record encodes to {} bytes", bytes.len());

        let mut slot = [0u8; RECORD_SIZE];
        slot[..bytes.len()].copy_from_slice(&bytes);
        Ok(slot)
    }

    /// Decode slot number `index`. Padding after the payload is ignored.
    pub fn decode(index: usize, slot: &[u8]) -> Result<Self, StatsError> {
        bincode::deserialize(slot).map_err(|source| StatsError::Corrupt { index, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_record_layout() {
        let entry = StatEntry::Move(MoveRecord { real_moves: true, moving_average: 15.0 });
        let slot = entry.encode().unwrap();

        assert_eq!(&slot[0..4], &[0, 0, 0, 0]);
        assert_eq!(slot[4], 1);
        assert_eq!(&slot[5..9], &15.0f32.to_le_bytes());
        assert!(slot[9..].iter().all(|&b| b == 0));
        assert_eq!(StatEntry::decode(0, &slot).unwrap(), entry);
    }

    #[test]
    fn test_win_loss_record_layout() {
        let entry = StatEntry::WinLoss(WinLossRecord {
            allow_undo: true,
            undo_allowance: 3,
            consider_undo_wins: false,
            close_is_loss: true,
            wins: 0x0102_0304,
            losses: 9,
        });
        let slot = entry.encode().unwrap();

        assert_eq!(&slot[0..4], &[1, 0, 0, 0]);
        assert_eq!(&slot[4..8], &[1, 3, 0, 1]);
        assert_eq!(&slot[8..12], &[4, 3, 2, 1]);
        assert_eq!(&slot[12..16], &[9, 0, 0, 0]);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let mut slot = [0u8; RECORD_SIZE];
        slot[0] = 7;
        assert!(matches!(StatEntry::decode(2, &slot), Err(StatsError::Corrupt { index: 2, .. })));

        // Booleans must be 0 or 1.
        let mut slot = [0u8; RECORD_SIZE];
        slot[4] = 2;
        assert!(StatEntry::decode(0, &slot).is_err());
    }

    #[test]
    fn test_fingerprints() {
        let config = Config::default();
        let record = WinLossRecord::for_config(&config);

        assert!(record.matches(&config));
        assert!(!record.matches(&config.with_undo_allowance(2)));
        assert!(!record.matches(&config.with_close_is_loss(true)));
        // Move counting mode is not part of the win/loss profile.
        assert!(record.matches(&config.with_real_moves(false)));

        let moves = MoveRecord { real_moves: true, moving_average: 0.0 };
        assert!(moves.matches(&config));
        assert!(!moves.matches(&config.with_real_moves(false)));
    }
}
