use crate::assets::Sound;
use enum_map::{Enum, EnumMap};
use std::io::Write;

/// The moments in the game that make a noise
#[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
pub(crate) enum Cue {
    /// The snake ate the food
    Eat,

    /// The snake ran into itself
    GameOver,
}

/// Something that can play sound cues
pub(crate) trait Audio {
    fn play(&mut self, cue: Cue);
}

const BEL: u8 = 0x07;

/// Plays cues by writing BEL characters to a terminal.
///
/// If writing ever fails, a warning is logged and all further cues are
/// dropped.
#[derive(Debug)]
pub(crate) struct Bell<W> {
    out: W,
    sounds: EnumMap<Cue, Sound>,
    muted: bool,
}

impl<W: Write> Bell<W> {
    pub(crate) fn new(out: W, sounds: EnumMap<Cue, Sound>) -> Bell<W> {
        Bell {
            out,
            sounds,
            muted: false,
        }
    }
}

impl<W: Write> Audio for Bell<W> {
    fn play(&mut self, cue: Cue) {
        if self.muted {
            return;
        }
        let bells = vec![BEL; usize::from(self.sounds[cue].bells.get())];
        if let Err(e) = self.out.write_all(&bells).and_then(|()| self.out.flush()) {
            log::warn!("Failed to ring terminal bell; muting audio: {e}");
            self.muted = true;
        }
    }
}

/// Records cues instead of playing them
#[cfg(test)]
impl Audio for Vec<Cue> {
    fn play(&mut self, cue: Cue) {
        self.push(cue);
    }
}
