//! Built-in sentiment lexicon
//!
//! Entries are `(word, polarity, subjectivity)` with polarity in [-1, 1] and
//! subjectivity in [0, 1]. Words are lowercase.
//!
//! The table is small. It covers common evaluative adjectives,
//! not the procedural vocabulary that makes up most constitutional text.
//! Larger lexicons load at runtime through
//! [`LexiconSentiment::extend_from_file`](crate::analysis::LexiconSentiment::extend_from_file).

/// Adjectives and adverbs common in constitutional and general prose
pub const SENTIMENT_WORDS: &[(&str, f64, f64)] = &[
    // Positive
    ("good", 0.7, 0.6),
    ("great", 0.8, 0.75),
    ("best", 1.0, 0.3),
    ("better", 0.5, 0.5),
    ("excellent", 1.0, 1.0),
    ("happy", 0.8, 1.0),
    ("free", 0.4, 0.8),
    ("fair", 0.7, 0.9),
    ("just", 0.25, 0.5),
    ("equal", 0.25, 0.4),
    ("safe", 0.5, 0.5),
    ("secure", 0.4, 0.6),
    ("peaceful", 0.6, 0.7),
    ("independent", 0.2, 0.4),
    ("democratic", 0.3, 0.4),
    ("fundamental", 0.2, 0.5),
    ("sovereign", 0.2, 0.4),
    ("legitimate", 0.3, 0.5),
    ("honest", 0.6, 0.9),
    ("healthy", 0.5, 0.5),
    ("decent", 0.17, 0.67),
    ("dignified", 0.5, 0.8),
    ("impartial", 0.3, 0.6),
    ("transparent", 0.3, 0.5),
    ("effective", 0.6, 0.8),
    ("appropriate", 0.5, 0.5),
    ("proper", 0.2, 0.4),
    ("reasonable", 0.2, 0.6),
    ("adequate", 0.2, 0.45),
    ("sufficient", 0.2, 0.45),
    ("important", 0.4, 1.0),
    ("public", 0.0, 0.07),
    ("general", 0.05, 0.5),
    ("national", 0.0, 0.0),
    ("necessary", 0.0, 1.0),
    ("new", 0.14, 0.45),
    ("full", 0.35, 0.55),
    ("whole", 0.2, 0.4),
    ("common", -0.3, 0.5),
    ("special", 0.36, 0.57),
    ("supreme", 0.5, 0.6),
    ("high", 0.16, 0.54),
    ("positive", 0.23, 0.55),
    ("welfare", 0.3, 0.4),
    ("prosperous", 0.6, 0.7),
    ("respectful", 0.5, 0.6),
    // Negative
    ("bad", -0.7, 0.67),
    ("poor", -0.4, 0.6),
    ("worse", -0.4, 0.6),
    ("worst", -1.0, 1.0),
    ("wrong", -0.5, 0.9),
    ("unfair", -0.5, 0.9),
    ("unjust", -0.6, 0.9),
    ("unlawful", -0.5, 0.5),
    ("illegal", -0.5, 0.5),
    ("unconstitutional", -0.5, 0.5),
    ("invalid", -0.4, 0.4),
    ("void", -0.4, 0.4),
    ("cruel", -1.0, 1.0),
    ("inhuman", -0.8, 0.9),
    ("degrading", -0.6, 0.8),
    ("arbitrary", -0.4, 0.7),
    ("excessive", -0.3, 0.7),
    ("unusual", -0.1, 0.6),
    ("dangerous", -0.6, 0.9),
    ("violent", -0.8, 0.9),
    ("harmful", -0.5, 0.7),
    ("corrupt", -0.5, 0.8),
    ("false", -0.4, 0.65),
    ("guilty", -0.5, 0.8),
    ("hostile", -0.6, 0.8),
    ("serious", -0.33, 0.67),
    ("grave", -0.4, 0.7),
    ("foreign", -0.125, 0.125),
    ("criminal", -0.4, 0.6),
    ("forced", -0.3, 0.5),
    ("compulsory", -0.1, 0.3),
    ("unable", -0.5, 0.5),
    ("incapable", -0.4, 0.6),
    ("sick", -0.7, 0.86),
    ("old", 0.1, 0.2),
    ("other", -0.125, 0.375),
    ("least", -0.3, 0.4),
    ("less", -0.17, 0.07),
];

/// Words that scale the score of the word that follows them
pub const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("extremely", 1.5),
    ("highly", 1.3),
    ("really", 1.2),
    ("particularly", 1.2),
    ("especially", 1.2),
    ("fully", 1.2),
    ("most", 1.3),
    ("slightly", 0.6),
    ("somewhat", 0.7),
];

/// Words that flip the polarity of the following scored word
pub const NEGATIONS: &[&str] = &["not", "no", "never", "nor", "neither", "cannot", "without"];
