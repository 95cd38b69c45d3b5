/// Orthography coverage: which writing systems can this face really write?
///
/// A font that maps `A` is not automatically a Latin font, and one that maps
/// a single Arabic letter is certainly not an Arabic font. So we carry a
/// catalog of curated codepoint lists, one per language or script, and for
/// each face we count how much of every list it actually covers. The lists
/// are grouped by script family, and a whole family is only consulted when
/// the face covers the key codepoint of the family's lead entry, which keeps
/// the analysis quick for the very large number of faces that only ever
/// speak Latin.
///
/// The analysis also picks a sample string. When the face can render the
/// user's locale pangram there is nothing to pick; otherwise we borrow the
/// best supported orthography's sample, fall back to the classic English
/// pangram, and as a last resort compose a little nonsense from whatever
/// characters the face does have.
///
/// Made with patience at FontLab https://www.fontlab.com/
mod data;

use std::env;

use rand::Rng;

use crate::charset::Charset;
use crate::model::{OrthographyEntry, OrthographyResult, Support};

/// Name of the entry emitted when no curated orthography matched.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Name of the entry consulted for the generic Latin fallback sample.
pub const BASIC_LATIN: &str = "Basic Latin";

/// Sample used when Basic Latin is well covered but nothing better exists.
pub const LATIN_PANGRAM: &str = "The quick brown fox jumps over the lazy dog.";

/// Length of the random fallback sample, in characters.
pub const RANDOM_SAMPLE_LEN: usize = 24;

/// One curated codepoint list.
#[derive(Debug, Clone, Copy)]
pub struct Orthography {
    pub name: &'static str,
    pub native: &'static str,
    /// Codepoint the face must cover before the list is evaluated at all.
    pub key: u32,
    pub sample: &'static str,
    pub spans: &'static [Span],
}

/// A single codepoint or an inclusive range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span {
    Single(u32),
    Range(u32, u32),
}

impl Orthography {
    /// Every codepoint the orthography asks for, ranges expanded, in order.
    pub fn codepoints(&self) -> impl Iterator<Item = u32> + '_ {
        self.spans.iter().flat_map(|span| match *span {
            Span::Single(cp) => cp..=cp,
            Span::Range(start, end) => start..=end,
        })
    }

    /// Percentage of [`codepoints`](Self::codepoints) present in `charset`.
    ///
    /// Zero when the key codepoint is missing.
    pub fn coverage(&self, charset: &Charset) -> f64 {
        if !charset.contains(self.key) {
            return 0.0;
        }
        let (hits, tries) = self
            .codepoints()
            .fold((0usize, 0usize), |(hits, tries), cp| {
                (hits + usize::from(charset.contains(cp)), tries + 1)
            });
        if tries == 0 {
            return 0.0;
        }
        100.0 * hits as f64 / tries as f64
    }

    fn evaluate(&self, charset: &Charset) -> Option<OrthographyEntry> {
        let coverage = self.coverage(charset);
        if coverage == 0.0 {
            return None;
        }
        Some(OrthographyEntry {
            name: self.name.to_string(),
            native: non_empty(self.native),
            sample: non_empty(self.sample),
            coverage,
            filter: self.codepoints().collect(),
        })
    }
}

/// Script families in evaluation order, and whether the family is gated on
/// its lead entry's key codepoint.
fn groups() -> [(&'static [Orthography], bool); 7] {
    [
        (data::LATIN, true),
        (data::GREEK, true),
        (data::ARABIC, true),
        (data::CHINESE, true),
        (data::JAPANESE, true),
        (data::KOREAN, true),
        (data::UNCATEGORIZED, false),
    ]
}

/// Every orthography in evaluation order.
pub fn catalog() -> impl Iterator<Item = &'static Orthography> {
    groups().into_iter().flat_map(|(group, _)| group.iter())
}

/// Looks up an orthography by its English name.
pub fn find(name: &str) -> Option<&'static Orthography> {
    catalog().find(|orth| orth.name == name)
}

/// Computes the supported orthographies of `charset` and a sample string.
///
/// `pangram` is the locale sample; when the face covers it the result's
/// sample is `None`.
pub fn analyze(charset: &Charset, pangram: &str) -> OrthographyResult {
    analyze_with_rng(charset, pangram, &mut rand::rng())
}

/// [`analyze`] with a caller-supplied random source for the nonsense sample.
pub fn analyze_with_rng<R: Rng + ?Sized>(
    charset: &Charset,
    pangram: &str,
    rng: &mut R,
) -> OrthographyResult {
    let support = support(charset);
    let sample = pick_sample(charset, &support, pangram, rng);
    OrthographyResult { support, sample }
}

/// The supported orthographies of `charset`, without a sample.
pub fn support(charset: &Charset) -> Support {
    let mut support = Support::new();
    if charset.is_empty() {
        return support;
    }

    for (group, gated) in groups() {
        let Some(lead) = group.first() else {
            continue;
        };
        if gated && lead.coverage(charset) == 0.0 {
            continue;
        }
        support.extend(
            group
                .iter()
                .filter_map(|orth| orth.evaluate(charset))
                .map(|entry| (entry.name.clone(), entry)),
        );
    }

    if support.is_empty() {
        support.insert(
            UNCATEGORIZED.to_string(),
            OrthographyEntry {
                name: UNCATEGORIZED.to_string(),
                native: None,
                sample: None,
                coverage: 100.0,
                filter: charset.iter().collect(),
            },
        );
    }
    support
}

/// Picks a sample string for a face without keeping the full analysis.
pub fn sample_string(charset: &Charset, pangram: &str) -> Option<String> {
    let support = support(charset);
    pick_sample(charset, &support, pangram, &mut rand::rng())
}

fn pick_sample<R: Rng + ?Sized>(
    charset: &Charset,
    support: &Support,
    pangram: &str,
    rng: &mut R,
) -> Option<String> {
    if charset.is_empty() || charset.covers_text(pangram) {
        return None;
    }

    if let Some(best) = best_supported(support.values()) {
        if best.coverage > 90.0 {
            if let Some(sample) = best.sample.as_deref().filter(|s| !s.is_empty()) {
                return Some(sample.to_string());
            }
        }
    }

    let basic_latin = support
        .get(BASIC_LATIN)
        .map_or(0.0, |entry| entry.coverage);
    if basic_latin > 90.0 {
        return Some(LATIN_PANGRAM.to_string());
    }

    Some(random_sample(charset, rng))
}

/// Highest truncated coverage wins; a larger filter breaks ties, then order.
fn best_supported<'a>(
    support: impl IntoIterator<Item = &'a OrthographyEntry>,
) -> Option<&'a OrthographyEntry> {
    let mut best: Option<&'a OrthographyEntry> = None;
    for entry in support {
        let better = match best {
            None => true,
            Some(current) => {
                let (a, b) = (entry.coverage as i64, current.coverage as i64);
                a > b || (a == b && entry.filter.len() > current.filter.len())
            }
        };
        if better {
            best = Some(entry);
        }
    }
    best
}

/// Characters drawn uniformly, with replacement, from `charset`.
pub fn random_sample<R: Rng + ?Sized>(charset: &Charset, rng: &mut R) -> String {
    let pool: Vec<char> = charset.iter().filter_map(char::from_u32).collect();
    if pool.is_empty() {
        return String::new();
    }
    (0..RANDOM_SAMPLE_LEN)
        .map(|_| pool[rng.random_range(0..pool.len())])
        .collect()
}

fn non_empty(text: &str) -> Option<String> {
    (!text.is_empty()).then(|| text.to_string())
}

/// Pangrams by language code, for the locale sample.
static PANGRAMS: &[(&str, &str)] = &[
    ("cs", "Příliš žluťoučký kůň úpěl ďábelské ódy."),
    ("da", "Quizdeltagerne spiste jordbær med fløde, mens cirkusklovnen Walther spillede på xylofon."),
    ("de", "Zwölf Boxkämpfer jagen Viktor quer über den großen Sylter Deich."),
    ("el", "Θέλει αρετή και τόλμη η ελευθερία. (Ανδρέας Κάλβος)"),
    ("en", LATIN_PANGRAM),
    ("es", "Jovencillo emponzoñado de whisky: ¡qué figurota exhibe!"),
    ("fi", "Törkylempijävongahdus"),
    ("fr", "Voix ambiguë d'un cœur qui, au zéphyr, préfère les jattes de kiwis."),
    ("hu", "Egy hűtlen vejét fülöncsípő, dühös mexikói úr Wesselényinél mázol Quitóban és Zürichben."),
    ("it", "Quel fez sghembo copre davanti."),
    ("ja", "いろはにほへと ちりぬるを 色は匂へど 散りぬるを"),
    ("ko", "다람쥐 헌 쳇바퀴에 타고파"),
    ("nl", "Pa's wijze lynx bezag vroom het fikse aquaduct."),
    ("no", "Vår sære Zulu fra badeøya spilte jo whist og quickstep i min taxi."),
    ("pl", "Pchnąć w tę łódź jeża lub ośm skrzyń fig."),
    ("pt", "Vejam a bruxa da raposa Salta-Pocinhas e o cão feliz que dorme regalado."),
    ("ru", "В чащах юга жил бы цитрус? Да, но фальшивый экземпляр!"),
    ("sv", "Flygande bäckasiner söka strax hwila på mjuka tuvor."),
    ("tr", "Pijamalı hasta yağız şoföre çabucak güvendi."),
    ("uk", "Чуєш їх, доцю, га? Кумедна ж ти, прощайся без ґольфів!"),
    ("zh", "我能吞下玻璃而不伤身体。"),
];

/// The pangram for a locale string such as `de_DE.UTF-8`.
///
/// Unknown and `C`/`POSIX` locales get the English pangram.
pub fn pangram_for_locale(locale: &str) -> &'static str {
    let language = locale
        .split(['_', '.', '@', '-'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();
    PANGRAMS
        .iter()
        .find(|(code, _)| *code == language)
        .map_or(LATIN_PANGRAM, |(_, pangram)| pangram)
}

/// The pangram for the process locale (`LC_ALL`, then `LC_CTYPE`, then `LANG`).
pub fn locale_pangram() -> &'static str {
    let locale = ["LC_ALL", "LC_CTYPE", "LANG"]
        .into_iter()
        .filter_map(|key| env::var(key).ok())
        .find(|value| !value.is_empty())
        .unwrap_or_default();
    pangram_for_locale(&locale)
}
