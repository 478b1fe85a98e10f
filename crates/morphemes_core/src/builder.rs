//! Builder pattern for creating dataset entries.
//!
//! Entries are normally produced by the validator from raw rows; the builder
//! exists for tests, fixtures and programmatic corpus construction.

use crate::entry::{Entry, FreqCode, Tier};
use crate::morpheme::Segmentation;

/// Builder for creating an [`Entry`].
///
/// # Example
///
/// ```rust
/// use morphemes_core::{EntryBuilder, Tier};
///
/// let entry = EntryBuilder::new("робити", Tier::new(1).unwrap())
///     .segmentation("роб:R/и:S/ти:F".parse().unwrap())
///     .pos("verb")
///     .multext("Vmpn")
///     .build();
/// assert_eq!(entry.pattern(), "RSF");
/// ```
#[derive(Debug, Default)]
pub struct EntryBuilder {
    lemma: Option<String>,
    segmentation: Option<Segmentation>,
    tier: Option<Tier>,
    multext: Option<String>,
    pos: Option<String>,
    freq: Option<FreqCode>,
    paradigm: Option<String>,
    root: Option<String>,
    ambiguous: bool,
}

impl EntryBuilder {
    /// Creates a new entry builder with the required fields.
    ///
    /// # Arguments
    ///
    /// * `lemma` - The plain lemma
    /// * `tier` - Provenance/confidence tier
    pub fn new(lemma: impl Into<String>, tier: Tier) -> Self {
        Self {
            lemma: Some(lemma.into()),
            tier: Some(tier),
            ..Default::default()
        }
    }

    /// Sets the segmentation.
    pub fn segmentation(mut self, segmentation: Segmentation) -> Self {
        self.segmentation = Some(segmentation);
        self
    }

    /// Sets the MULTEXT-East descriptor.
    pub fn multext(mut self, multext: impl Into<String>) -> Self {
        self.multext = Some(multext.into());
        self
    }

    /// Sets the part-of-speech label.
    pub fn pos(mut self, pos: impl Into<String>) -> Self {
        self.pos = Some(pos.into());
        self
    }

    /// Sets the corpus frequency code.
    pub fn freq(mut self, freq: FreqCode) -> Self {
        self.freq = Some(freq);
        self
    }

    /// Sets the inflectional paradigm code.
    pub fn paradigm(mut self, paradigm: impl Into<String>) -> Self {
        self.paradigm = Some(paradigm.into());
        self
    }

    /// Sets the root form(s).
    pub fn root(mut self, root: impl Into<String>) -> Self {
        self.root = Some(root.into());
        self
    }

    /// Marks the entry as a known homonym.
    pub fn ambiguous(mut self, ambiguous: bool) -> Self {
        self.ambiguous = ambiguous;
        self
    }

    /// Builds the entry.
    ///
    /// When no segmentation was set, the lemma is carried as an unsegmented
    /// bare form.
    ///
    /// # Panics
    ///
    /// Panics if the lemma or tier is missing.
    pub fn build(self) -> Entry {
        let lemma = self.lemma.expect("lemma is required");
        let segmentation = self
            .segmentation
            .unwrap_or_else(|| Segmentation::Unsegmented(lemma.clone()));
        Entry {
            lemma,
            segmentation,
            tier: self.tier.expect("tier is required"),
            multext: self.multext,
            pos: self.pos,
            freq: self.freq,
            paradigm: self.paradigm,
            root: self.root,
            ambiguous: self.ambiguous,
        }
    }
}
