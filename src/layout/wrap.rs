use crate::canvas::TextMeasurer;
use crate::font::FontSpec;
use crate::units::Pt;
use crate::ResumeError;
use regex::Regex;
use std::sync::LazyLock;

/// Fixed space added below every line on top of the font size
pub const LINE_GAP: Pt = Pt(2.0);

/// Vertical space one line of text at `size` occupies
pub fn line_height(size: Pt) -> Pt {
    size + LINE_GAP
}

/// `[display](target)`
static LINK_MARKUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("link pattern is valid"));

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    Plain,
    /// Text that opens `url` when clicked
    Link { url: String },
}

/// A fragment of a wrapped line. Words that came from the same piece of source text
/// share a `group`, and adjacent words of one group on one line are merged into a
/// single token joined by spaces.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
    pub group: usize,
}

impl Token {
    pub fn url(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::Plain => None,
            TokenKind::Link { url } => Some(url),
        }
    }
}

/// One output line; its tokens are drawn left to right with no extra spacing
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhysicalLine {
    pub tokens: Vec<Token>,
}

impl PhysicalLine {
    /// Empty lines take up vertical space but draw nothing
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn text(&self) -> String {
        self.tokens.iter().map(|t| t.text.as_str()).collect()
    }

    pub fn width<M: TextMeasurer + ?Sized>(
        &self,
        measurer: &M,
        font: FontSpec,
    ) -> Result<Pt, ResumeError> {
        self.tokens
            .iter()
            .map(|t| measurer.text_width(&t.text, font))
            .sum()
    }
}

/// The result of wrapping: the lines, and how tall they are when drawn
#[derive(Debug, Clone, PartialEq)]
pub struct Wrapped {
    pub lines: Vec<PhysicalLine>,
    pub height: Pt,
}

struct Word<'t> {
    text: &'t str,
    source: &'t Token,
}

impl Word<'_> {
    fn to_token(&self, text: String) -> Token {
        Token {
            text,
            kind: self.source.kind.clone(),
            group: self.source.group,
        }
    }
}

/// Split one newline-free segment into plain and link tokens. Plain text shares one
/// group; each link gets a group of its own. Markup that doesn't match stays literal.
fn tokenize(segment: &str, next_group: &mut usize) -> Vec<Token> {
    let plain_group = *next_group;
    *next_group += 1;

    let plain = |text: &str| Token {
        text: text.to_string(),
        kind: TokenKind::Plain,
        group: plain_group,
    };

    let mut tokens = Vec::new();
    let mut start = 0;
    for caps in LINK_MARKUP.captures_iter(segment) {
        let (Some(whole), Some(display), Some(url)) = (caps.get(0), caps.get(1), caps.get(2))
        else {
            continue;
        };
        if start < whole.start() {
            tokens.push(plain(&segment[start..whole.start()]));
        }
        tokens.push(Token {
            text: display.as_str().to_string(),
            kind: TokenKind::Link {
                url: url.as_str().to_string(),
            },
            group: *next_group,
        });
        *next_group += 1;
        start = whole.end();
    }
    if start < segment.len() {
        tokens.push(plain(&segment[start..]));
    }
    tokens
}

/// Greedy word wrap of `text` into lines no wider than `max_width`.
///
/// Every `\n` starts a new wrapping unit and an empty unit produces one empty line, so
/// `"a\n\nb"` is three lines tall. A word that is wider than `max_width` by itself is
/// placed alone on its own line. Links are never merged with neighbouring text, but a
/// multi-word link may break across lines; every piece keeps its URL.
pub fn wrap<M: TextMeasurer + ?Sized>(
    measurer: &M,
    text: &str,
    font: FontSpec,
    max_width: Pt,
) -> Result<Wrapped, ResumeError> {
    let mut lines: Vec<PhysicalLine> = Vec::new();
    let mut next_group = 0;

    for segment in text.split('\n') {
        if segment.is_empty() {
            lines.push(PhysicalLine::default());
            continue;
        }

        let tokens = tokenize(segment, &mut next_group);
        let words = tokens.iter().flat_map(|source| {
            source
                .text
                .split(' ')
                .map(move |text| Word { text, source })
        });

        let mut line: Vec<Token> = Vec::new();
        // width of every token on the line except the last one
        let mut settled = Pt(0.0);
        let mut last_width = Pt(0.0);

        for word in words {
            let merges = line.last().is_some_and(|t| t.group == word.source.group);
            let candidate = match line.last() {
                Some(last) if merges => format!("{} {}", last.text, word.text),
                _ => word.text.to_string(),
            };
            let candidate_width = measurer.text_width(&candidate, font)?;
            let total = if merges {
                settled + candidate_width
            } else {
                settled + last_width + candidate_width
            };

            if line.is_empty() || total <= max_width {
                if merges {
                    if let Some(last) = line.last_mut() {
                        last.text = candidate;
                    }
                } else {
                    settled += last_width;
                    line.push(word.to_token(candidate));
                }
                last_width = candidate_width;
            } else {
                lines.push(PhysicalLine {
                    tokens: std::mem::take(&mut line),
                });
                settled = Pt(0.0);
                if word.text.is_empty() {
                    // the space a line broke on doesn't start the next line
                    last_width = Pt(0.0);
                    continue;
                }
                last_width = measurer.text_width(word.text, font)?;
                line.push(word.to_token(word.text.to_string()));
            }
        }

        if !line.is_empty() {
            lines.push(PhysicalLine { tokens: line });
        }
    }

    let height = line_height(font.size) * lines.len() as f32;
    Ok(Wrapped { lines, height })
}
