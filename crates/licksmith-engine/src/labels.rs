//! Chord-progression text shown under a phrase.

use crate::key::Key;
use crate::keymap::sus4_roots;
use crate::phrase::PhraseType;

/// Display text for `phrase_type` at `tonic`.
pub fn describe(phrase_type: PhraseType, tonic: Key) -> String {
    match phrase_type {
        PhraseType::Sus4 { color: None, .. } => {
            let [minor, dominant, half_dim, altered] = sus4_roots(tonic);
            format!("usable on {minor}m, {dominant}7, {half_dim}ø7, {altered}7Alt")
        }
        // Named after the requested root, in its own spelling
        PhraseType::Sus4 {
            color: Some(color), ..
        } => format!("in the key of {tonic}{}", color.chord_suffix()),
        PhraseType::Major(_) => format!("in the key of {tonic}"),
        PhraseType::MajorTwoFive(_) => major_two_five(tonic),
        PhraseType::MinorTwoFive(_) => minor_two_five(tonic),
        PhraseType::Turnaround => turnaround(tonic),
        PhraseType::RhythmChanges56 => rhythm_changes_56(tonic),
        PhraseType::TwoSevenToFiveSeven => two_seven_to_five_seven(tonic),
        PhraseType::SideStepTwoFive => side_step_two_five(tonic),
    }
}

fn major_two_five(tonic: Key) -> String {
    match tonic {
        Key::E => "F#m B7 E".into(),
        Key::Fs => "G#m C#7 F#".into(),
        Key::B => "C#m F#7 B".into(),
        _ => format!("{}m {}7 {tonic}", tonic.transpose(2), tonic.transpose(7)),
    }
}

fn minor_two_five(tonic: Key) -> String {
    match tonic {
        Key::F => "Gø7 C7 Fm".into(),
        Key::Ab => "Bbø7 Eb7 Abm".into(),
        Key::B => "C#ø7 F#7 Bm".into(),
        // written enharmonically as Gb minor
        Key::Fs => "Abø7 Db7 Gbm".into(),
        _ => format!("{}ø7 {}7 {tonic}m", tonic.transpose(2), tonic.transpose(7)),
    }
}

fn turnaround(tonic: Key) -> String {
    match tonic {
        Key::Fs => "Gb Eb7 Abm Db7".into(),
        Key::B => "B G#7 C#m F#7".into(),
        _ => format!(
            "{tonic} {}7 {}m {}7",
            tonic.transpose(9),
            tonic.transpose(2),
            tonic.transpose(7)
        ),
    }
}

fn rhythm_changes_56(tonic: Key) -> String {
    match tonic {
        Key::Fs => "F#7 - B7 Cdim".into(),
        Key::B => "B7 - E7 Fdim".into(),
        _ => format!(
            "{tonic}7 - {}7 {}dim",
            tonic.transpose(5),
            tonic.transpose(6)
        ),
    }
}

fn two_seven_to_five_seven(tonic: Key) -> String {
    match tonic {
        Key::Fs => "Ab7 - Db7 -".into(),
        Key::B => "C#7 - F#7 -".into(),
        _ => format!("{}7 - {}7 -", tonic.transpose(2), tonic.transpose(7)),
    }
}

fn side_step_two_five(tonic: Key) -> String {
    format!(
        "{}m {}7 {}m {}7 {tonic}",
        tonic.transpose(3),
        tonic.transpose(8),
        tonic.transpose(2),
        tonic.transpose(7)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phrase::{ChordColor, PhraseLength};

    fn sus4(color: Option<ChordColor>) -> PhraseType {
        PhraseType::Sus4 {
            length: PhraseLength::Short,
            color,
        }
    }

    #[test]
    fn test_sus4_usage_list() {
        assert_eq!(describe(sus4(None), Key::C), "usable on Gm, C7, Eø7, F#7Alt");
        assert_eq!(describe(sus4(None), Key::Fs), "usable on C#m, F#7, A#ø7, C7Alt");
        assert_eq!(describe(sus4(None), Key::F), "usable on Cm, F7, Aø7, B7Alt");
    }

    #[test]
    fn test_sus4_colored() {
        assert_eq!(
            describe(sus4(Some(ChordColor::Minor)), Key::D),
            "in the key of Dm"
        );
        assert_eq!(
            describe(sus4(Some(ChordColor::HalfDim)), Key::Db),
            "in the key of Dbø7"
        );
        assert_eq!(
            describe(sus4(Some(ChordColor::Dominant)), Key::Fs),
            "in the key of F#7"
        );
        assert_eq!(
            describe(sus4(Some(ChordColor::Altered)), Key::Ab),
            "in the key of Ab7Alt"
        );
    }

    #[test]
    fn test_two_fives() {
        assert_eq!(describe(PhraseType::MajorTwoFive(PhraseLength::Short), Key::C), "Dm G7 C");
        assert_eq!(describe(PhraseType::MajorTwoFive(PhraseLength::Long), Key::Fs), "G#m C#7 F#");
        assert_eq!(describe(PhraseType::MinorTwoFive(PhraseLength::Short), Key::A), "Bø7 E7 Am");
        assert_eq!(describe(PhraseType::MinorTwoFive(PhraseLength::Long), Key::Fs), "Abø7 Db7 Gbm");
    }

    #[test]
    fn test_longer_progressions() {
        assert_eq!(describe(PhraseType::Turnaround, Key::C), "C A7 Dm G7");
        assert_eq!(describe(PhraseType::Turnaround, Key::B), "B G#7 C#m F#7");
        assert_eq!(describe(PhraseType::RhythmChanges56, Key::Bb), "Bb7 - Eb7 Edim");
        assert_eq!(describe(PhraseType::TwoSevenToFiveSeven, Key::F), "G7 - C7 -");
        assert_eq!(describe(PhraseType::SideStepTwoFive, Key::C), "Ebm Ab7 Dm G7 C");
        assert_eq!(describe(PhraseType::SideStepTwoFive, Key::F), "Abm Db7 Gm C7 F");
    }

    #[test]
    fn test_major() {
        assert_eq!(describe(PhraseType::Major(PhraseLength::Long), Key::Eb), "in the key of Eb");
    }
}
