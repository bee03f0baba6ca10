//! Shot clip grouping.
//!
//! Files in the shots folder are named `<prefix>_<shot>_<phase>.mp4`, where
//! `shot` is 1-based and `phase` is `start` or `end`. Each shot slot keeps a
//! separate [`Rotator`] per phase.

use crate::error::{Error, Result};
use crate::paths::scan_movies_or_empty;
use crate::rotator::Rotator;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use tracing::warn;

/// Number of shot slots.
pub const SHOT_SLOTS: usize = 4;

/// Which clip of a shot is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Start,
    End,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Start => "start",
            Phase::End => "end",
        }
    }

    fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "start.mp4" => Some(Phase::Start),
            "end.mp4" => Some(Phase::End),
            _ => None,
        }
    }
}

impl FromStr for Phase {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "start" => Ok(Phase::Start),
            "end" => Ok(Phase::End),
            _ => Err(Error::UnknownPhase(s.to_string())),
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a shot filename into its shot number and phase.
///
/// Returns `Ok(None)` for a well-formed name with an unrecognised suffix.
/// The prefix may itself contain underscores.
pub fn parse_shot_name(path: &Path) -> Result<Option<(u32, Phase)>> {
    let malformed = || Error::MalformedShotName {
        path: path.to_path_buf(),
    };

    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(malformed)?;

    let mut parts = name.rsplitn(3, '_');
    let (suffix, number, _prefix) = match (parts.next(), parts.next(), parts.next()) {
        (Some(suffix), Some(number), Some(prefix)) => (suffix, number, prefix),
        _ => return Err(malformed()),
    };

    let shot: u32 = number.parse().map_err(|_| malformed())?;

    Ok(Phase::from_suffix(suffix).map(|phase| (shot, phase)))
}

/// Start and end clips discovered for one shot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShotFiles {
    pub start: Vec<PathBuf>,
    pub end: Vec<PathBuf>,
}

/// Bucket shot files into `slots` slots, preserving input order.
///
/// Malformed names are logged and skipped. Shot numbers outside `1..=slots`
/// and unknown phases are skipped silently.
pub fn group_shots(files: Vec<PathBuf>, slots: usize) -> Vec<ShotFiles> {
    let mut grouped = vec![ShotFiles::default(); slots];

    for file in files {
        let (shot, phase) = match parse_shot_name(&file) {
            Ok(Some(parsed)) => parsed,
            Ok(None) => continue,
            Err(e) => {
                warn!("Skipping shot file: {}", e);
                continue;
            }
        };

        let Some(slot) = (shot as usize).checked_sub(1).and_then(|i| grouped.get_mut(i)) else {
            continue;
        };

        match phase {
            Phase::Start => slot.start.push(file),
            Phase::End => slot.end.push(file),
        }
    }

    grouped
}

/// Rotators for a single shot.
#[derive(Debug)]
pub struct ShotSlot {
    pub start: Rotator,
    pub end: Rotator,
}

impl ShotSlot {
    pub fn phase(&self, phase: Phase) -> &Rotator {
        match phase {
            Phase::Start => &self.start,
            Phase::End => &self.end,
        }
    }
}

/// The fixed set of shot slots.
#[derive(Debug)]
pub struct ShotSet {
    slots: Vec<ShotSlot>,
}

impl ShotSet {
    /// Build slots from an already scanned file list.
    pub fn from_files(files: Vec<PathBuf>, debounce: Duration) -> Self {
        let slots = group_shots(files, SHOT_SLOTS)
            .into_iter()
            .enumerate()
            .map(|(i, files)| {
                let shot = i + 1;
                ShotSlot {
                    start: Rotator::new(format!("shot {shot} start"), files.start, debounce),
                    end: Rotator::new(format!("shot {shot} end"), files.end, debounce),
                }
            })
            .collect();

        Self { slots }
    }

    /// Scan `dir` and build slots from its movie files.
    pub fn load(dir: &Path, debounce: Duration) -> Self {
        Self::from_files(scan_movies_or_empty(dir), debounce)
    }

    pub fn slots(&self) -> &[ShotSlot] {
        &self.slots
    }

    /// Look up the slot for a 1-based shot number.
    pub fn slot(&self, shot: u32) -> Result<&ShotSlot> {
        (shot as usize)
            .checked_sub(1)
            .and_then(|i| self.slots.get(i))
            .ok_or(Error::ShotOutOfRange {
                shot,
                slots: self.slots.len(),
            })
    }

    /// Select the next clip for `shot` and `phase`.
    pub fn next(&self, shot: u32, phase: Phase) -> Result<&Path> {
        self.slot(shot)?.phase(phase).next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rotator::DEFAULT_DEBOUNCE;
    use std::time::Instant;

    fn p(name: &str) -> PathBuf {
        PathBuf::from("/media/movies/shots").join(name)
    }

    #[test]
    fn test_parse_shot_name() {
        assert_eq!(
            parse_shot_name(&p("a_1_start.mp4")).unwrap(),
            Some((1, Phase::Start))
        );
        assert_eq!(
            parse_shot_name(&p("a_3_end.mp4")).unwrap(),
            Some((3, Phase::End))
        );
        assert_eq!(parse_shot_name(&p("a_2_middle.mp4")).unwrap(), None);
    }

    #[test]
    fn test_parse_shot_name_prefix_with_underscores() {
        assert_eq!(
            parse_shot_name(&p("kiosk_take_two_2_end.mp4")).unwrap(),
            Some((2, Phase::End))
        );
    }

    #[test]
    fn test_parse_shot_name_malformed() {
        assert!(parse_shot_name(&p("bad_name.mp4")).is_err());
        assert!(parse_shot_name(&p("a_x_start.mp4")).is_err());
        assert!(parse_shot_name(&p("a_-1_start.mp4")).is_err());
        assert!(parse_shot_name(&p("plain.mp4")).is_err());
    }

    #[test]
    fn test_phase_from_str() {
        assert_eq!("start".parse::<Phase>().unwrap(), Phase::Start);
        assert_eq!("end".parse::<Phase>().unwrap(), Phase::End);
        assert!(matches!(
            "Start".parse::<Phase>(),
            Err(Error::UnknownPhase(_))
        ));
        assert_eq!(Phase::End.to_string(), "end");
    }

    #[test]
    fn test_group_shots() {
        let files = vec![
            p("a_1_start.mp4"),
            p("a_1_end.mp4"),
            p("a_2_start.mp4"),
            p("bad_name.mp4"),
            p("a_9_start.mp4"),
        ];

        let grouped = group_shots(files, SHOT_SLOTS);
        assert_eq!(grouped.len(), SHOT_SLOTS);
        assert_eq!(grouped[0].start, vec![p("a_1_start.mp4")]);
        assert_eq!(grouped[0].end, vec![p("a_1_end.mp4")]);
        assert_eq!(grouped[1].start, vec![p("a_2_start.mp4")]);
        assert!(grouped[1].end.is_empty());
        assert_eq!(grouped[2], ShotFiles::default());
        assert_eq!(grouped[3], ShotFiles::default());
    }

    #[test]
    fn test_group_shots_skips_zero_and_unknown_suffix() {
        let files = vec![p("a_0_start.mp4"), p("a_4_intro.mp4"), p("a_4_end.mp4")];

        let grouped = group_shots(files, SHOT_SLOTS);
        assert!(grouped[..3].iter().all(|s| *s == ShotFiles::default()));
        assert!(grouped[3].start.is_empty());
        assert_eq!(grouped[3].end, vec![p("a_4_end.mp4")]);
    }

    #[test]
    fn test_group_shots_keeps_input_order() {
        let files = vec![p("z_1_start.mp4"), p("a_1_start.mp4"), p("m_1_start.mp4")];
        let grouped = group_shots(files.clone(), SHOT_SLOTS);
        assert_eq!(grouped[0].start, files);
    }

    #[test]
    fn test_shot_set_lookup() {
        let set = ShotSet::from_files(
            vec![p("a_1_start.mp4"), p("a_1_end.mp4"), p("a_4_start.mp4")],
            DEFAULT_DEBOUNCE,
        );

        assert_eq!(set.slots().len(), SHOT_SLOTS);
        assert_eq!(set.next(1, Phase::Start).unwrap(), p("a_1_start.mp4"));
        assert_eq!(set.next(1, Phase::End).unwrap(), p("a_1_end.mp4"));
        assert_eq!(set.next(4, Phase::Start).unwrap(), p("a_4_start.mp4"));
    }

    #[test]
    fn test_shot_set_out_of_range() {
        let set = ShotSet::from_files(vec![p("a_1_start.mp4")], DEFAULT_DEBOUNCE);

        assert!(matches!(
            set.next(5, Phase::Start),
            Err(Error::ShotOutOfRange { shot: 5, slots: 4 })
        ));
        assert!(matches!(
            set.next(0, Phase::Start),
            Err(Error::ShotOutOfRange { shot: 0, .. })
        ));
    }

    #[test]
    fn test_shot_set_empty_phase_is_no_media() {
        let set = ShotSet::from_files(vec![p("a_2_start.mp4")], DEFAULT_DEBOUNCE);
        let err = set.next(2, Phase::End).unwrap_err();
        assert_eq!(err.to_string(), "no media available for shot 2 end");
    }

    #[test]
    fn test_phases_rotate_independently() {
        let set = ShotSet::from_files(
            vec![
                p("a_1_start.mp4"),
                p("b_1_start.mp4"),
                p("a_1_end.mp4"),
                p("b_1_end.mp4"),
            ],
            DEFAULT_DEBOUNCE,
        );
        let slot = set.slot(1).unwrap();
        let start = Instant::now();
        let later = start + Duration::from_millis(50);

        assert_eq!(slot.start.next_at(start).unwrap(), p("a_1_start.mp4"));
        // An end read right after a start read is not debounced by it.
        assert_eq!(slot.end.next_at(start).unwrap(), p("a_1_end.mp4"));
        assert_eq!(slot.start.next_at(later).unwrap(), p("b_1_start.mp4"));
        assert_eq!(slot.end.next_at(later).unwrap(), p("b_1_end.mp4"));
    }
}
