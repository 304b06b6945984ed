use std::borrow::Cow;

use crate::assets::{CSS_FILE, JS_FILE};
use crate::ast::*;
use crate::transpose::{transpose, Chord};

/// Trailing padding after the last chord of a row, matching `chord.js`.
pub(crate) const ROW_PADDING: usize = 10;

/// Convert a Song to a standalone HTML page.
pub fn to_html(song: &Song) -> String {
    let mut html = String::new();
    let title = escape(&song.title);

    html.push_str("<!DOCTYPE html>\n");
    html.push_str("<HTML>\n");
    html.push_str("  <HEAD>\n");
    html.push_str(&format!("    <LINK rel=\"stylesheet\" href=\"{}\" />\n", CSS_FILE));
    html.push_str(&format!("    <SCRIPT lang=\"Javascript\" src=\"{}\"></SCRIPT>\n", JS_FILE));
    html.push_str(&format!("    <TITLE>{}</TITLE>\n", title));
    html.push_str("  </HEAD>\n");
    html.push_str("  <BODY onload=\"javascript:transposeChords(0);\">\n");
    html.push_str("    <DIV class='transpose'>Transpose by: ");
    html.push_str("<INPUT type='text' size='3' value='0' id=\"transp\" onchange=\"javascript:transposeChords(parseInt(this.value));\"> ");
    html.push_str("<BUTTON onclick=\"javascript:transposeUp();\">+</BUTTON> ");
    html.push_str("<BUTTON onclick=\"javascript:transposeDown();\">-</BUTTON>\n");
    html.push_str("    </DIV>\n");
    html.push_str("    <DIV class=\"song\">\n");
    html.push_str("<PRE>\n");
    html.push_str(&format!(
        "<CENTER><SPAN class='title'>{}</SPAN></CENTER>\n",
        title
    ));

    let mut chord_line = 0;
    for element in &song.body {
        match element {
            Element::Blank => html.push('\n'),
            Element::Lyrics(line) => {
                if line.has_chords() {
                    html.push_str(&format!(
                        "<span class='chordlist' id='cl{n}'>{}</span><span class='chords' id='cl{n}text'>{}</span>\n",
                        chord_markup(line),
                        escape(&chord_row(line)),
                        n = chord_line,
                    ));
                    chord_line += 1;
                }
                html.push_str(&format!("<span class='text'>{}</span>\n", escape(&line.text)));
            }
            Element::Comment(text) => {
                html.push_str(&format!("<SPAN class='comment'>{}</SPAN>\n", escape(text)));
            }
            Element::Subtitle(text) => {
                html.push_str(&format!(
                    "<CENTER><SPAN class='subtitle'>{}</SPAN></CENTER>\n",
                    escape(text)
                ));
            }
            Element::StartOfChorus => html.push_str("<DIV class='chorus'>"),
            Element::EndOfChorus => html.push_str("</DIV>"),
        }
    }

    html.push_str("</PRE>\n");
    html.push_str("    </DIV>\n");
    html.push_str("  </BODY>\n");
    html.push_str("</HTML>\n");

    html
}

/// Empty `<CHORD>` elements carrying each chord's pitch classes, modifiers and
/// position, which `chord.js` reads to rebuild the chord row.
///
/// Unrecognized chords get an empty `base` and their full text as `mod`; the
/// script prints those as they are.
pub fn chord_markup(line: &Line) -> String {
    let mut markup = String::new();
    for token in &line.chords {
        let (bases, mods) = match Chord::parse(&token.chord) {
            Some(chord) => (
                join(chord.parts.iter().map(|part| part.root.index().to_string())),
                join(chord.parts.iter().map(|part| part.modifier.clone())),
            ),
            None => (String::new(), token.chord.clone()),
        };
        markup.push_str(&format!(
            "<CHORD class='chord' base='{}' mod='{}' pos='{}'></CHORD>",
            bases,
            escape(&mods),
            token.position
        ));
    }
    markup
}

/// Lay out the chords of a line as the script does at offset 0: each chord at its
/// position, pushed right to keep one space after the previous chord.
///
/// Chord widths are counted in UTF-16 units, like `String.length` in the script.
pub fn chord_row(line: &Line) -> String {
    let mut row = String::new();
    let mut column = 0;
    for token in &line.chords {
        let chord = transpose(&token.chord, 0);
        let start = if column == 0 {
            token.position
        } else {
            token.position.max(column + 1)
        };
        while column < start {
            row.push(' ');
            column += 1;
        }
        row.push_str(&chord);
        column += chord.encode_utf16().count();
    }
    row.push_str(&" ".repeat(ROW_PADDING));
    row
}

fn join(values: impl Iterator<Item = String>) -> String {
    values.collect::<Vec<_>>().join(",")
}

pub(crate) fn escape(s: &str) -> Cow<'_, str> {
    quick_xml::escape::escape(s)
}
