//! The BCP-47 locale model: parsing, normalization, and comparison.
//!
//! A [`Locale`] is stored in canonical form: subtag casing is
//! normalized, variants are sorted and deduplicated, extension
//! sequences are sorted by singleton, and `-u-` keywords by key. Exact
//! comparison is against that canonical serialization; the normalizing
//! comparison canonicalizes the other operand first. Both exist because
//! tags arrive from many sources with inconsistent casing and extension
//! order: collapsing to one mode would either reject equivalent tags or
//! conflate distinct ones.

use alloc::string::String;
use alloc::vec::Vec;
use core::cmp::Ordering;

use tinystr::TinyAsciiStr;
use writeable::Writeable;

use crate::{KairosError, KairosResult};

fn parse_error(msg: &'static str) -> KairosError {
    KairosError::syntax().with_message(msg)
}

/// A structured BCP-47 language tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    language: TinyAsciiStr<8>,
    script: Option<TinyAsciiStr<4>>,
    region: Option<TinyAsciiStr<3>>,
    variants: Vec<TinyAsciiStr<8>>,
    /// Extension sequences, keyed by singleton. The `u` body is stored
    /// with its keywords already sorted.
    extensions: Vec<(char, String)>,
}

impl Default for Locale {
    /// The undefined language, `und`.
    fn default() -> Self {
        Self {
            language: tinystr::tinystr!(8, "und"),
            script: None,
            region: None,
            variants: Vec::new(),
            extensions: Vec::new(),
        }
    }
}

fn is_language_subtag(s: &str) -> bool {
    (2..=8).contains(&s.len()) && s.len() != 4 && s.bytes().all(|b| b.is_ascii_alphabetic())
}

fn is_script_subtag(s: &str) -> bool {
    s.len() == 4 && s.bytes().all(|b| b.is_ascii_alphabetic())
}

fn is_region_subtag(s: &str) -> bool {
    (s.len() == 2 && s.bytes().all(|b| b.is_ascii_alphabetic()))
        || (s.len() == 3 && s.bytes().all(|b| b.is_ascii_digit()))
}

fn is_variant_subtag(s: &str) -> bool {
    ((5..=8).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_alphanumeric()))
        || (s.len() == 4
            && s.as_bytes()[0].is_ascii_digit()
            && s.bytes().all(|b| b.is_ascii_alphanumeric()))
}

fn titlecase<const N: usize>(s: &str) -> Option<TinyAsciiStr<N>> {
    let mut buf = [0u8; N];
    for (i, b) in s.bytes().enumerate() {
        buf[i] = if i == 0 {
            b.to_ascii_uppercase()
        } else {
            b.to_ascii_lowercase()
        };
    }
    TinyAsciiStr::try_from_utf8(&buf[..s.len()]).ok()
}

impl Locale {
    /// Parses a BCP-47 tag into its canonical structured form.
    pub fn from_string(source: &str) -> KairosResult<Self> {
        if source.is_empty() {
            return Err(parse_error("empty language tag"));
        }
        let mut subtags = source.split('-').peekable();

        let language = subtags
            .next()
            .filter(|s| is_language_subtag(s) || *s == "x")
            .ok_or(parse_error("invalid language subtag"))?;
        if language == "x" {
            // A private-use-only tag has no language.
            let mut locale = Self::default();
            let body = collect_extension_body(&mut subtags, true)?;
            locale.extensions.push(('x', body));
            return Ok(locale);
        }
        let language_lower = language.to_ascii_lowercase();
        let language = TinyAsciiStr::try_from_str(if language_lower == "root" {
            "und"
        } else {
            &language_lower
        })
        .map_err(|_| parse_error("invalid language subtag"))?;

        let mut locale = Self {
            language,
            ..Self::default()
        };

        // Script, then region, both optional.
        if let Some(next) = subtags.peek() {
            if is_script_subtag(next) {
                locale.script =
                    Some(titlecase(next).ok_or(parse_error("invalid script subtag"))?);
                subtags.next();
            }
        }
        if let Some(next) = subtags.peek() {
            if is_region_subtag(next) {
                let upper = next.to_ascii_uppercase();
                locale.region = Some(
                    TinyAsciiStr::try_from_str(&upper)
                        .map_err(|_| parse_error("invalid region subtag"))?,
                );
                subtags.next();
            }
        }

        // Variants, until the first singleton.
        while let Some(next) = subtags.peek() {
            if next.len() == 1 {
                break;
            }
            if !is_variant_subtag(next) {
                return Err(parse_error("invalid variant subtag"));
            }
            let lower = next.to_ascii_lowercase();
            let variant = TinyAsciiStr::try_from_str(&lower)
                .map_err(|_| parse_error("invalid variant subtag"))?;
            if !locale.variants.contains(&variant) {
                locale.variants.push(variant);
            }
            subtags.next();
        }
        locale.variants.sort_unstable();

        // Extension sequences.
        while let Some(singleton) = subtags.next() {
            if singleton.len() != 1 || !singleton.as_bytes()[0].is_ascii_alphanumeric() {
                return Err(parse_error("invalid extension singleton"));
            }
            let singleton = singleton.as_bytes()[0].to_ascii_lowercase() as char;
            if locale.extensions.iter().any(|(s, _)| *s == singleton) {
                return Err(parse_error("duplicate extension singleton"));
            }
            let body = collect_extension_body(&mut subtags, singleton == 'x')?;
            let body = if singleton == 'u' {
                sort_unicode_keywords(&body)?
            } else {
                body
            };
            locale.extensions.push((singleton, body));
        }
        locale
            .extensions
            .sort_unstable_by(|a, b| match (a.0 == 'x', b.0 == 'x') {
                // Private use sorts last.
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                _ => a.0.cmp(&b.0),
            });

        Ok(locale)
    }

    /// Canonicalizes a tag to its normalized string form.
    pub fn normalize(source: &str) -> KairosResult<String> {
        Ok(Self::from_string(source)?.write_to_string().into_owned())
    }

    /// The language subtag.
    pub fn language(&self) -> &str {
        self.language.as_str()
    }

    /// Replaces the language subtag; the rest of the locale is untouched
    /// on failure.
    pub fn set_language(&mut self, language: &str) -> KairosResult<()> {
        if !is_language_subtag(language) {
            return Err(parse_error("invalid language subtag"));
        }
        let lower = language.to_ascii_lowercase();
        self.language = TinyAsciiStr::try_from_str(if lower == "root" { "und" } else { &lower })
            .map_err(|_| parse_error("invalid language subtag"))?;
        Ok(())
    }

    pub fn script(&self) -> Option<&str> {
        self.script.as_ref().map(TinyAsciiStr::as_str)
    }

    /// Replaces the script subtag; an empty string clears it.
    pub fn set_script(&mut self, script: &str) -> KairosResult<()> {
        if script.is_empty() {
            self.script = None;
            return Ok(());
        }
        if !is_script_subtag(script) {
            return Err(parse_error("invalid script subtag"));
        }
        self.script = Some(titlecase(script).ok_or(parse_error("invalid script subtag"))?);
        Ok(())
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_ref().map(TinyAsciiStr::as_str)
    }

    /// Replaces the region subtag; an empty string clears it.
    pub fn set_region(&mut self, region: &str) -> KairosResult<()> {
        if region.is_empty() {
            self.region = None;
            return Ok(());
        }
        if !is_region_subtag(region) {
            return Err(parse_error("invalid region subtag"));
        }
        let upper = region.to_ascii_uppercase();
        self.region = Some(
            TinyAsciiStr::try_from_str(&upper).map_err(|_| parse_error("invalid region subtag"))?,
        );
        Ok(())
    }

    pub fn variants(&self) -> impl Iterator<Item = &str> {
        self.variants.iter().map(TinyAsciiStr::as_str)
    }

    /// The value of a `-u-` extension keyword, e.g. `ca`.
    pub fn keyword(&self, key: &str) -> Option<&str> {
        let body = self
            .extensions
            .iter()
            .find_map(|(s, body)| (*s == 'u').then_some(body.as_str()))?;
        let mut parts = body.split('-');
        while let Some(part) = parts.next() {
            if part.len() == 2 && part.eq_ignore_ascii_case(key) {
                // The value runs until the next two-character key.
                let value_len = parts.clone().take_while(|p| p.len() > 2).count();
                if value_len == 0 {
                    return Some("");
                }
                let start = parts.next()?;
                let mut end = start;
                for _ in 1..value_len {
                    end = parts.next()?;
                }
                let start_idx = start.as_ptr() as usize - body.as_ptr() as usize;
                let end_idx = end.as_ptr() as usize - body.as_ptr() as usize + end.len();
                return Some(&body[start_idx..end_idx]);
            }
        }
        None
    }

    /// Exact three-way comparison against another locale, via the
    /// canonical forms. A total order, usable for sorting.
    pub fn compare_to(&self, other: &Self) -> Ordering {
        self.language
            .cmp(&other.language)
            .then_with(|| self.script.cmp(&other.script))
            .then_with(|| self.region.cmp(&other.region))
            .then_with(|| self.variants.cmp(&other.variants))
            .then_with(|| self.extensions.cmp(&other.extensions))
    }

    /// Exact three-way comparison of this locale's canonical
    /// serialization against a raw tag string.
    pub fn compare_to_string(&self, other: &str) -> Ordering {
        let serialized = self.write_to_string();
        serialized.as_bytes().cmp(other.as_bytes())
    }

    /// Equality that treats syntactically different but semantically
    /// identical tags (casing, extension order) as equal.
    pub fn normalizing_eq(&self, other: &str) -> bool {
        match Self::from_string(other) {
            Ok(parsed) => parsed == *self,
            Err(_) => false,
        }
    }

    /// The locale with extensions stripped, for data lookup.
    pub(crate) fn without_extensions(&self) -> Self {
        Self {
            extensions: Vec::new(),
            variants: Vec::new(),
            ..self.clone()
        }
    }
}

/// Collects extension subtags until the next singleton. Everything
/// after an `x` singleton belongs to the private-use sequence.
fn collect_extension_body(
    subtags: &mut core::iter::Peekable<core::str::Split<'_, char>>,
    private_use: bool,
) -> KairosResult<String> {
    let mut body = String::new();
    while let Some(next) = subtags.peek() {
        if next.len() == 1 && !private_use {
            break;
        }
        if next.is_empty() || next.len() > 8 || !next.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(parse_error("invalid extension subtag"));
        }
        if !body.is_empty() {
            body.push('-');
        }
        for b in next.bytes() {
            body.push(b.to_ascii_lowercase() as char);
        }
        subtags.next();
    }
    if body.is_empty() {
        return Err(parse_error("empty extension sequence"));
    }
    Ok(body)
}

/// Sorts a `-u-` extension body by keyword key, keeping each keyword's
/// value subtags attached.
fn sort_unicode_keywords(body: &str) -> KairosResult<String> {
    let mut keywords: Vec<(&str, Vec<&str>)> = Vec::new();
    for part in body.split('-') {
        if part.len() == 2 {
            keywords.push((part, Vec::new()));
        } else {
            match keywords.last_mut() {
                Some((_, values)) => values.push(part),
                // Attribute subtags before the first key are not
                // supported by this model.
                None => return Err(parse_error("unsupported unicode extension attribute")),
            }
        }
    }
    keywords.sort_by(|a, b| a.0.cmp(b.0));
    let mut out = String::new();
    for (key, values) in keywords {
        if !out.is_empty() {
            out.push('-');
        }
        out.push_str(key);
        for value in values {
            out.push('-');
            out.push_str(value);
        }
    }
    Ok(out)
}

impl Writeable for Locale {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        sink.write_str(self.language.as_str())?;
        if let Some(script) = &self.script {
            sink.write_char('-')?;
            sink.write_str(script.as_str())?;
        }
        if let Some(region) = &self.region {
            sink.write_char('-')?;
            sink.write_str(region.as_str())?;
        }
        for variant in &self.variants {
            sink.write_char('-')?;
            sink.write_str(variant.as_str())?;
        }
        for (singleton, body) in &self.extensions {
            sink.write_char('-')?;
            sink.write_char(*singleton)?;
            sink.write_char('-')?;
            sink.write_str(body)?;
        }
        Ok(())
    }
}

impl core::str::FromStr for Locale {
    type Err = KairosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

impl core::fmt::Display for Locale {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.write_to(f)
    }
}

impl PartialOrd for Locale {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare_to(other))
    }
}

impl Ord for Locale {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_to(other)
    }
}
