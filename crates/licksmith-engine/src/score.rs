//! LilyPond source for rendering a phrase as a one-line treble staff.

use crate::pitch::Note;

/// Which notes of a phrase are engraved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoreView {
    /// Every note.
    #[default]
    Full,
    /// Join points only (every fourth note from the first), separated by
    /// eighth rests.
    Partial,
}

/// Spacing between join points in a partial view.
const JOIN_STRIDE: usize = 4;

const PARTIAL_GAP: &str = " r8 r8 r8 ";

/// LilyPond token for one note as an eighth, octaves relative to octave 3.
pub fn lilypond_note(note: &Note) -> String {
    let name = note.name();
    let mut token = name.letter().to_ascii_lowercase().to_string();
    if name.is_sharp() {
        token.push_str("is");
    } else if name.is_flat() {
        token.push_str("es");
    }
    let diff = note.octave() - 3;
    let mark = if diff >= 0 { '\'' } else { ',' };
    token.extend(std::iter::repeat(mark).take(diff.unsigned_abs() as usize));
    token.push('8');
    token
}

/// Music expression for `notes` under `view`.
pub fn music_expression(notes: &[Note], view: ScoreView) -> String {
    match view {
        ScoreView::Full => notes.iter().map(lilypond_note).collect::<Vec<_>>().join(" "),
        ScoreView::Partial => notes
            .iter()
            .step_by(JOIN_STRIDE)
            .map(lilypond_note)
            .collect::<Vec<_>>()
            .join(PARTIAL_GAP),
    }
}

/// Complete `.ly` file for `notes`.
pub fn render_lilypond(notes: &[Note], view: ScoreView) -> String {
    format!(
        r#"\version "2.24.0"
\paper {{
  #(set-paper-size '(cons (* 8 in) (* 2.5 in)))
  indent = 0\mm
  left-margin = 0\mm
  right-margin = 0\mm
  top-margin = 0\mm
  bottom-margin = 0\mm
  line-width = 200\mm
  ragged-right = ##f
  system-count = 1
}}
\score {{
  \new Staff {{
    \override Staff.StaffSymbol.thickness = #0.5
    \set Staff.fontSize = #2
    \override Staff.StaffSymbol.staff-space = #1.0
    \clef treble
    \key c \major
    {music}
  }}
  \layout {{
    \context {{
      \Staff
      \override VerticalAxisGroup.staff-staff-spacing = #'((basic-distance . 0) (minimum-distance . 0) (padding . 0))
    }}
  }}
}}
"#,
        music = music_expression(notes, view)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pitch::parse_notes;

    #[test]
    fn test_note_tokens() {
        let notes = parse_notes(&["C4", "Bb3", "F#5", "A2", "Eb6"]).unwrap();
        let tokens: Vec<String> = notes.iter().map(lilypond_note).collect();
        assert_eq!(tokens, vec!["c'8", "bes8", "fis''8", "a,8", "ees'''8"]);
    }

    #[test]
    fn test_partial_view_shows_join_points() {
        let notes =
            parse_notes(&["C4", "D4", "E4", "G4", "Bb4", "A4", "G4", "F4", "E4"]).unwrap();
        assert_eq!(
            music_expression(&notes, ScoreView::Partial),
            "c'8 r8 r8 r8 bes'8 r8 r8 r8 e'8"
        );
        assert_eq!(
            music_expression(&notes[..3], ScoreView::Full),
            "c'8 d'8 e'8"
        );
    }

    #[test]
    fn test_document_header() {
        let notes = parse_notes(&["G4"]).unwrap();
        let ly = render_lilypond(&notes, ScoreView::Full);
        assert!(ly.starts_with("\\version \"2.24.0\""));
        assert!(ly.contains("\\clef treble"));
        assert!(ly.contains("\\key c \\major"));
        assert!(ly.contains("    g'8\n"));
    }
}
