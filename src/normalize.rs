//! Lexical cleanup of raw catalog date strings.
//!
//! Records collected from museum inventories, theft reports and damage logs
//! transliterate Roman numerals with Cyrillic look-alike glyphs, mix half a
//! dozen dash characters, and glue era suffixes onto numerals
//! ("IV centuryBC"). Everything here must run before any numeral-matching
//! rule, or century recognition silently fails on transliterated sources.

/// Cyrillic glyphs visually identical to the Latin letters used in Roman
/// numerals and era suffixes ("ХІХ" → "XIX", "ВС" → "BC").
const CYRILLIC_LOOKALIKES: &[(char, char)] = &[
    ('Х', 'X'),
    ('х', 'x'),
    ('І', 'I'),
    ('і', 'i'),
    ('В', 'B'),
    ('С', 'C'),
    ('М', 'M'),
    ('у', 'y'),
];

/// Mojibake renderings of the same glyphs seen in re-encoded exports.
const MOJIBAKE: &[(&str, &str)] = &[("Ð¥", "X"), ("Ð†", "I")];

/// Dash variants unified to the canonical range separator.
const DASHES: &[char] = &['–', '—', '‒', '−'];

/// Canonicalize one raw date field. Pure text transform; empty and
/// whitespace-only input stays empty (no value is synthesized).
pub fn normalize(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let mut text = trimmed.to_string();
    for (seq, replacement) in MOJIBAKE {
        if text.contains(seq) {
            text = text.replace(seq, replacement);
        }
    }

    let mut mapped = String::with_capacity(text.len());
    for c in text.chars() {
        if let Some(&(_, latin)) = CYRILLIC_LOOKALIKES.iter().find(|(cyr, _)| *cyr == c) {
            mapped.push(latin);
        } else if DASHES.contains(&c) {
            mapped.push('-');
        } else {
            mapped.push(c);
        }
    }

    // Era-suffix repair (runs after the glyph map so Cyrillic "ВС" has
    // already become "BC")
    let mapped = mapped
        .replace("B.C.", "BC")
        .replace("BCE", "BC")
        .replace("A.D.", "AD");
    let stripped = strip_narrative_prefix(&mapped);
    let spaced = insert_era_spaces(stripped);

    let collapsed = spaced.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.trim_end_matches('.').trim_end().to_string()
}

/// Drop the "sec.floor." cataloguer's prefix some inventory exports carry.
fn strip_narrative_prefix(s: &str) -> &str {
    const PREFIX: &str = "sec.floor.";
    // get() keeps this total when the prefix length lands inside a
    // multibyte character
    match s.get(..PREFIX.len()) {
        Some(head) if head.eq_ignore_ascii_case(PREFIX) => &s[PREFIX.len()..],
        _ => s,
    }
}

/// Restore the missing space in glued era suffixes: "centuryBC" →
/// "century BC", "IVBC" → "IV BC". Only uppercase standalone BC/AD tokens
/// are touched.
fn insert_era_spaces(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len() + 2);
    for (i, &c) in chars.iter().enumerate() {
        if i > 0
            && matches!(
                (c, chars.get(i + 1)),
                ('B', Some(&'C')) | ('A', Some(&'D'))
            )
            && chars[i - 1].is_ascii_alphanumeric()
            && chars.get(i + 2).is_none_or(|next| !next.is_ascii_alphanumeric())
        {
            out.push(' ');
        }
        out.push(c);
    }
    out
}
